use crate::*;

/// What the pair of hands in one frame amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Right hand's gesture, or `Thinking` when both hands are held together.
    pub gesture: Gesture,
    /// Whether a left hand was seen this frame.
    pub left: bool,
}

/// Pick at most one left and one right hand and read the player's gesture.
///
/// The right hand throws; the left hand only matters as a proximity anchor.
/// When both wrists are closer than `proximity` (strictly), the gesture is
/// forced to `Thinking` whatever shape the right hand makes. If a side shows
/// up more than once, the last hand reported for it wins.
pub fn resolve(hands: &[Hand], proximity: Coordinate) -> Resolution {
    let mut lwrist = None;
    let mut rwrist = None;
    let mut gesture = Gesture::None;
    for hand in hands {
        match hand.side() {
            Side::Left => lwrist = Some(hand.wrist()),
            Side::Right => {
                rwrist = Some(hand.wrist());
                gesture = classify(hand);
            }
        }
    }
    if let (Some(l), Some(r)) = (lwrist, rwrist) {
        if l.distance(&r) < proximity {
            gesture = Gesture::Thinking;
        }
    }
    Resolution {
        gesture,
        left: lwrist.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Closed fist with the wrist at `x`.
    fn fist(side: Side, x: Coordinate) -> Hand {
        let mut points = [Point::new(x, 0.5, 0.0); LANDMARK_COUNT];
        for (tip, _) in [INDEX, MIDDLE, RING, PINKY] {
            points[tip].y = 0.75;
        }
        Hand::new(side, points)
    }

    #[test]
    fn no_hands() {
        let resolution = resolve(&[], PROXIMITY_THRESHOLD);
        assert!(resolution.gesture == Gesture::None);
        assert!(!resolution.left);
    }

    #[test]
    fn left_hand_alone_is_none() {
        let resolution = resolve(&[fist(Side::Left, 0.25)], PROXIMITY_THRESHOLD);
        assert!(resolution.gesture == Gesture::None);
        assert!(resolution.left);
    }

    #[test]
    fn right_hand_alone_is_classified() {
        let resolution = resolve(&[fist(Side::Right, 0.75)], PROXIMITY_THRESHOLD);
        assert!(resolution.gesture == Gesture::Rock);
        assert!(!resolution.left);
    }

    #[test]
    fn hands_far_apart_keep_shape() {
        let hands = [fist(Side::Left, 0.25), fist(Side::Right, 0.75)];
        let resolution = resolve(&hands, PROXIMITY_THRESHOLD);
        assert!(resolution.gesture == Gesture::Rock);
        assert!(resolution.left);
    }

    #[test]
    fn hands_together_are_thinking() {
        let hands = [fist(Side::Right, 0.5), fist(Side::Left, 0.55)];
        assert!(resolve(&hands, PROXIMITY_THRESHOLD).gesture == Gesture::Thinking);
    }

    #[test]
    fn threshold_is_exclusive() {
        let hands = [fist(Side::Left, 0.25), fist(Side::Right, 0.5)];
        assert!(resolve(&hands, 0.25).gesture == Gesture::Rock);
        assert!(resolve(&hands, 0.26).gesture == Gesture::Thinking);
    }

    #[test]
    fn default_threshold_boundary() {
        // 9/64 and 5/32 bracket 0.15 and square exactly
        let inside = [fist(Side::Left, 0.5), fist(Side::Right, 0.5 + 0.140625)];
        let outside = [fist(Side::Left, 0.5), fist(Side::Right, 0.5 + 0.15625)];
        assert!(resolve(&inside, PROXIMITY_THRESHOLD).gesture == Gesture::Thinking);
        assert!(resolve(&outside, PROXIMITY_THRESHOLD).gesture == Gesture::Rock);
    }

    #[test]
    fn distance_counts_depth() {
        let l = fist(Side::Left, 0.5);
        let mut points = *fist(Side::Right, 0.5).points();
        points[WRIST].z = 0.5;
        let r = Hand::new(Side::Right, points);
        assert!(resolve(&[l, r], PROXIMITY_THRESHOLD).gesture == Gesture::Rock);
    }

    #[test]
    fn last_right_hand_wins() {
        let mut open = [Point::new(0.75, 0.5, 0.0); LANDMARK_COUNT];
        for (tip, _) in [INDEX, MIDDLE, RING, PINKY] {
            open[tip].y = 0.25;
        }
        let hands = [fist(Side::Right, 0.75), Hand::new(Side::Right, open)];
        assert!(resolve(&hands, PROXIMITY_THRESHOLD).gesture == Gesture::Paper);
    }
}
