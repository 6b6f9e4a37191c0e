use crate::*;

/// A throw. The playable subset of [`Gesture`].
///
/// Standard rules apply: Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Rock: beats Scissors, loses to Paper.
    Rock,
    /// Paper: beats Rock, loses to Scissors.
    Paper,
    /// Scissors: beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];
    /// The move this one defeats.
    pub fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The move that defeats this one.
    pub fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub fn defeats(&self, other: &Self) -> bool {
        self.beats() == *other
    }
}

impl TryFrom<Gesture> for Move {
    type Error = anyhow::Error;
    fn try_from(gesture: Gesture) -> Result<Self, Self::Error> {
        match gesture {
            Gesture::Rock => Ok(Self::Rock),
            Gesture::Paper => Ok(Self::Paper),
            Gesture::Scissors => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("{} is not a throw", other)),
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Gesture::try_from(s).and_then(Self::try_from)
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL.choose(rng).copied().expect("ALL is empty")
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Gesture::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_beats_the_move_it_counters() {
        for m in Move::ALL {
            assert!(m.counter().defeats(&m));
            assert!(m.counter().beats() == m);
            assert!(m.beats().counter() == m);
        }
    }

    #[test]
    fn cycle() {
        assert!(Move::Rock.defeats(&Move::Scissors));
        assert!(Move::Paper.defeats(&Move::Rock));
        assert!(Move::Scissors.defeats(&Move::Paper));
        assert!(!Move::Rock.defeats(&Move::Rock));
        assert!(!Move::Rock.defeats(&Move::Paper));
    }

    #[test]
    fn only_throws_convert() {
        assert!(Move::try_from(Gesture::Thinking).is_err());
        assert!(Move::try_from(Gesture::None).is_err());
        assert!(Move::try_from(Gesture::Scissors).unwrap() == Move::Scissors);
        assert!(Move::try_from("paper").unwrap() == Move::Paper);
        assert!(Move::try_from("thinking").is_err());
    }

    #[test]
    fn random_is_a_move() {
        for _ in 0..64 {
            assert!(Move::ALL.contains(&Move::random()));
        }
    }
}
