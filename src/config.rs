use crate::*;

/// Tunable parameters for one session.
///
/// Defaults are the fixed game constants; the binary only overrides them
/// from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Wrist-to-wrist distance below which the player is "thinking".
    pub proximity: Coordinate,
    /// Let the computer see the player's throw.
    pub cheat: bool,
    /// Hands the detector reports below this score are ignored.
    pub min_confidence: Confidence,
    /// Detector reports un-flipped camera frames.
    pub mirror: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proximity: PROXIMITY_THRESHOLD,
            cheat: CHEAT,
            min_confidence: MIN_CONFIDENCE,
            mirror: false,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} opponent, proximity {:.3}, min confidence {:.2}{}",
            Computer::from(self.cheat),
            self.proximity,
            self.min_confidence,
            if self.mirror { ", mirrored" } else { "" }
        )
    }
}
