//! Wire format for detector output.
//!
//! One JSON object per frame:
//!
//! ```json
//! {"hands":[{"handedness":"Right","score":0.93,"landmarks":[{"x":0.5,"y":0.4,"z":-0.02}]}]}
//! ```
//!
//! `landmarks` must hold all 21 points; `score` may be omitted.
use crate::*;

/// One hand as reported by the detector, before validation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandDto {
    pub handedness: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Confidence>,
    pub landmarks: Vec<Point>,
}

/// Everything the detector saw in one camera frame.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hands: Vec<HandDto>,
}

impl Frame {
    /// Validated hands with enough confidence, mirrored if asked.
    ///
    /// Hands that break the wire contract are logged and dropped; the rest
    /// of the frame still counts.
    pub fn hands(self, config: &Config) -> Vec<Hand> {
        self.hands
            .into_iter()
            .filter(|dto| dto.score.map_or(true, |s| s >= config.min_confidence))
            .filter_map(|dto| match Hand::try_from(dto) {
                Ok(hand) => Some(hand),
                Err(e) => {
                    log::warn!("dropping hand: {}", e);
                    None
                }
            })
            .map(|hand| if config.mirror { hand.mirror() } else { hand })
            .collect()
    }
}

impl From<&[Hand]> for Frame {
    fn from(hands: &[Hand]) -> Self {
        Self {
            hands: hands.iter().map(HandDto::from).collect(),
        }
    }
}

impl TryFrom<&str> for Frame {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(line)?)
    }
}

/// Per-frame output handed to whatever draws the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    pub frame: usize,
    #[serde(flatten)]
    pub state: RoundState,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Gesture: {}", self.state.gesture)?;
        match self.state.computer {
            Some(computer) => writeln!(f, "Computer: {}", computer)?,
            None => writeln!(f, "Computer: ")?,
        }
        match self.state.outcome {
            Some(outcome) => write!(f, "Result: {}", outcome),
            None => write!(f, "Result: "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(handedness: &str, score: &str, n: usize) -> String {
        let landmarks = vec![r#"{"x":0.5,"y":0.5,"z":0.0}"#; n].join(",");
        format!(
            r#"{{"hands":[{{"handedness":"{}"{},"landmarks":[{}]}}]}}"#,
            handedness, score, landmarks
        )
    }

    #[test]
    fn parses_detector_line() {
        let frame = Frame::try_from(line("Right", r#","score":0.9"#, 21).as_str()).unwrap();
        assert!(frame.hands.len() == 1);
        assert!(frame.hands[0].score == Some(0.9));
        let hands = frame.hands(&Config::default());
        assert!(hands.len() == 1);
        assert!(hands[0].side() == Side::Right);
    }

    #[test]
    fn empty_frame() {
        let frame = Frame::try_from(r#"{"hands":[]}"#).unwrap();
        assert!(frame.hands(&Config::default()).is_empty());
        let frame = Frame::try_from("{}").unwrap();
        assert!(frame.hands.is_empty());
    }

    #[test]
    fn score_is_optional() {
        let frame = Frame::try_from(line("Left", "", 21).as_str()).unwrap();
        assert!(frame.hands[0].score.is_none());
        assert!(frame.hands(&Config::default()).len() == 1);
    }

    #[test]
    fn drops_low_confidence() {
        let frame = Frame::try_from(line("Right", r#","score":0.5"#, 21).as_str()).unwrap();
        assert!(frame.hands(&Config::default()).is_empty());
    }

    #[test]
    fn drops_malformed_hand() {
        let frame = Frame::try_from(line("Right", "", 20).as_str()).unwrap();
        assert!(frame.hands(&Config::default()).is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Frame::try_from("not json").is_err());
    }

    #[test]
    fn mirrors_when_configured() {
        let config = Config {
            mirror: true,
            ..Config::default()
        };
        let frame = Frame::try_from(line("Right", "", 21).as_str()).unwrap();
        assert!(frame.hands(&config)[0].side() == Side::Left);
    }

    #[test]
    fn snapshot_lines() {
        let snapshot = Snapshot {
            frame: 2,
            state: RoundState {
                gesture: Gesture::Rock,
                computer: Some(Move::Paper),
                outcome: Some(Outcome::Computer),
            },
        };
        assert!(snapshot.to_string() == "Gesture: rock\nComputer: paper\nResult: Computer Wins");
    }

    #[test]
    fn snapshot_json() {
        let snapshot = Snapshot {
            frame: 0,
            state: RoundState::default(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["gesture"] == "none");
        assert!(json["computer"].is_null());
        assert!(json["frame"] == 0);
    }
}
