use crate::*;

/// Result of one round, from the player's point of view.
///
/// Serialized in lowercase like [`Gesture`] and [`Move`]: `tie`, `player`, `computer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Tie,
    Player,
    Computer,
}

/// Score a player's throw against the computer's.
pub fn evaluate(player: Move, computer: Move) -> Outcome {
    Outcome::from((player, computer))
}

impl Outcome {
    /// The same round seen from the other side of the table.
    pub fn swap(&self) -> Self {
        match self {
            Self::Tie => Self::Tie,
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((player, computer): (Move, Move)) -> Self {
        if player == computer {
            Self::Tie
        } else if player.defeats(&computer) {
            Self::Player
        } else {
            Self::Computer
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tie => write!(f, "Tie"),
            Self::Player => write!(f, "Player Wins"),
            Self::Computer => write!(f, "Computer Wins"),
        }
    }
}
