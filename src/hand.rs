use crate::*;

/// One detected hand for one frame.
///
/// Always exactly [`LANDMARK_COUNT`] points, ordered by the MediaPipe hand
/// topology (wrist first, then base-to-tip per finger). Construction from
/// detector output goes through `TryFrom<HandDto>`, so a `Hand` that exists
/// is well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    side: Side,
    points: [Point; LANDMARK_COUNT],
}

impl Hand {
    pub fn new(side: Side, points: [Point; LANDMARK_COUNT]) -> Self {
        Self { side, points }
    }
    pub fn side(&self) -> Side {
        self.side
    }
    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.points
    }
    /// Landmark by index.
    pub fn at(&self, landmark: Landmark) -> Point {
        self.points[landmark]
    }
    /// Anchor used for two-hand proximity.
    pub fn wrist(&self) -> Point {
        self.at(WRIST)
    }
    /// Finger extension pattern.
    pub fn fingers(&self) -> Fingers {
        Fingers::from(self)
    }
    /// Gesture this hand's shape makes on its own.
    pub fn gesture(&self) -> Gesture {
        Gesture::from(self)
    }
    /// The same hand seen through a horizontally flipped camera.
    ///
    /// Reflects every x coordinate and swaps the side label, which is what a
    /// detector reports when the frame is flipped before detection.
    pub fn mirror(&self) -> Self {
        Self {
            side: self.side.flip(),
            points: self.points.map(|p| p.mirror()),
        }
    }
}

impl TryFrom<HandDto> for Hand {
    type Error = anyhow::Error;
    fn try_from(dto: HandDto) -> Result<Self, Self::Error> {
        let side = Side::try_from(dto.handedness.as_str())?;
        let count = dto.landmarks.len();
        let points = <[Point; LANDMARK_COUNT]>::try_from(dto.landmarks).map_err(|_| {
            anyhow::anyhow!("expected {} landmarks, got {}", LANDMARK_COUNT, count)
        })?;
        Ok(Self::new(side, points))
    }
}

impl From<&Hand> for HandDto {
    fn from(hand: &Hand) -> Self {
        Self {
            handedness: hand.side().to_string(),
            score: None,
            landmarks: hand.points().to_vec(),
        }
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        let side = if rand::random::<bool>() {
            Side::Left
        } else {
            Side::Right
        };
        Self::new(side, std::array::from_fn(|_| Point::random()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} hand @ {} {}", self.side, self.wrist(), self.fingers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(handedness: &str, n: usize) -> HandDto {
        HandDto {
            handedness: handedness.to_string(),
            score: Some(0.9),
            landmarks: vec![Point::default(); n],
        }
    }

    #[test]
    fn accepts_full_landmark_set() {
        let hand = Hand::try_from(dto("Right", LANDMARK_COUNT)).unwrap();
        assert!(hand.side() == Side::Right);
        assert!(hand.points().len() == LANDMARK_COUNT);
    }

    #[test]
    fn rejects_short_landmark_set() {
        assert!(Hand::try_from(dto("Right", 20)).is_err());
        assert!(Hand::try_from(dto("Right", 0)).is_err());
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(Hand::try_from(dto("Center", LANDMARK_COUNT)).is_err());
    }

    #[test]
    fn mirror_swaps_side_and_reflects() {
        let hand = Hand::random();
        let flipped = hand.mirror();
        assert!(flipped.side() == hand.side().flip());
        assert!(flipped.wrist() == hand.wrist().mirror());
        assert!(flipped.mirror().side() == hand.side());
        for (a, b) in flipped.mirror().points().iter().zip(hand.points()) {
            assert!(a.distance(b) < 1e-6);
        }
    }

    #[test]
    fn dto_roundtrip_keeps_points() {
        let hand = Hand::random();
        assert!(Hand::try_from(HandDto::from(&hand)).unwrap() == hand);
    }
}
