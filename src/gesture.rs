use crate::*;

/// Symbolic reading of the player's hand for one frame.
///
/// `Rock`, `Paper` and `Scissors` are hand shapes that can be thrown.
/// `Thinking` is not a shape: it overrides the right hand's shape while both
/// hands are held together. `None` means no right hand, or a shape that
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Thinking,
    #[default]
    None,
}

impl Gesture {
    /// True for the three gestures that count as a throw.
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::Rock | Self::Paper | Self::Scissors)
    }
    /// The throw this gesture makes, if any.
    pub fn playable(&self) -> Option<Move> {
        Move::try_from(*self).ok()
    }
}

/// Classify one hand's shape.
pub fn classify(hand: &Hand) -> Gesture {
    Gesture::from(hand)
}

impl From<&Hand> for Gesture {
    fn from(hand: &Hand) -> Self {
        Self::from(Fingers::from(hand))
    }
}

/// Fixed lookup over the extension pattern (thumb, index, middle, ring, pinky).
/// Paper tolerates a tucked thumb, since thumbs rarely read as fully extended.
impl From<Fingers> for Gesture {
    fn from(fingers: Fingers) -> Self {
        let pattern: (bool, bool, bool, bool, bool) = fingers.into();
        match pattern {
            (false, false, false, false, false) => Self::Rock,
            (true, true, true, true, true) => Self::Paper,
            (false, true, true, true, true) => Self::Paper,
            (false, true, true, false, false) => Self::Scissors,
            _ => Self::None,
        }
    }
}

impl From<Move> for Gesture {
    fn from(m: Move) -> Self {
        match m {
            Move::Rock => Self::Rock,
            Move::Paper => Self::Paper,
            Move::Scissors => Self::Scissors,
        }
    }
}

impl TryFrom<&str> for Gesture {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "thinking" => Ok(Self::Thinking),
            "none" => Ok(Self::None),
            _ => Err(anyhow::anyhow!("invalid gesture: {}", s)),
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
            Self::Thinking => write!(f, "thinking"),
            Self::None => write!(f, "none"),
        }
    }
}
