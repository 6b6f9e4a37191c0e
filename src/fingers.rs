use crate::*;

/// Extension state of the five fingers, thumb first.
///
/// `true` means extended. Derived per frame from a [`Hand`] by comparing each
/// fingertip against a lower joint:
///
/// - thumb: along x, against the joint right below the tip. The direction
///   depends on the side, since left and right thumbs point opposite ways in
///   a front-facing view.
/// - other fingers: along y, against the joint two below the tip. Smaller y
///   is higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingers([bool; 5]);

impl Fingers {
    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self([thumb, index, middle, ring, pinky])
    }
    pub fn thumb(&self) -> bool {
        self.0[0]
    }
    pub fn index(&self) -> bool {
        self.0[1]
    }
    pub fn middle(&self) -> bool {
        self.0[2]
    }
    pub fn ring(&self) -> bool {
        self.0[3]
    }
    pub fn pinky(&self) -> bool {
        self.0[4]
    }
    /// Number of extended fingers.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&f| f).count()
    }
    /// All 32 patterns, in bit order with the thumb as the low bit.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..32).map(Self::from)
    }
    fn thumb_of(hand: &Hand) -> bool {
        let (tip, joint) = THUMB;
        let (tip, joint) = (hand.at(tip), hand.at(joint));
        match hand.side() {
            Side::Right => tip.x < joint.x,
            Side::Left => tip.x > joint.x,
        }
    }
    fn finger_of(hand: &Hand, (tip, joint): (Landmark, Landmark)) -> bool {
        hand.at(tip).y < hand.at(joint).y
    }
}

impl From<&Hand> for Fingers {
    fn from(hand: &Hand) -> Self {
        Self::new(
            Self::thumb_of(hand),
            Self::finger_of(hand, INDEX),
            Self::finger_of(hand, MIDDLE),
            Self::finger_of(hand, RING),
            Self::finger_of(hand, PINKY),
        )
    }
}

impl From<u8> for Fingers {
    fn from(bits: u8) -> Self {
        Self(std::array::from_fn(|i| bits >> i & 1 == 1))
    }
}

impl From<Fingers> for u8 {
    fn from(fingers: Fingers) -> Self {
        fingers
            .0
            .iter()
            .enumerate()
            .map(|(i, &f)| (f as u8) << i)
            .sum()
    }
}

impl From<Fingers> for (bool, bool, bool, bool, bool) {
    fn from(Fingers([t, i, m, r, p]): Fingers) -> Self {
        (t, i, m, r, p)
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for extended in self.0 {
            write!(f, "{}", if extended { '|' } else { '.' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for bits in 0u8..32 {
            assert!(u8::from(Fingers::from(bits)) == bits);
        }
        assert!(Fingers::all().count() == 32);
    }

    #[test]
    fn accessors_follow_thumb_first_order() {
        let fingers = Fingers::new(true, false, true, false, true);
        assert!(fingers.thumb());
        assert!(!fingers.index());
        assert!(fingers.middle());
        assert!(!fingers.ring());
        assert!(fingers.pinky());
        assert!(fingers.count() == 3);
        assert!(fingers.to_string() == "|.|.|");
    }

    #[test]
    fn right_thumb_extends_toward_smaller_x() {
        let mut points = [Point::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[THUMB.0].x = 0.375;
        points[THUMB.1].x = 0.5;
        assert!(Fingers::from(&Hand::new(Side::Right, points)).thumb());
        assert!(!Fingers::from(&Hand::new(Side::Left, points)).thumb());
    }

    #[test]
    fn finger_extends_when_tip_is_higher() {
        let mut points = [Point::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[INDEX.0].y = 0.25;
        points[PINKY.0].y = 0.75;
        let fingers = Fingers::from(&Hand::new(Side::Right, points));
        assert!(fingers.index());
        assert!(!fingers.pinky());
        assert!(!fingers.middle());
    }
}
