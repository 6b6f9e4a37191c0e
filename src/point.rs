use crate::*;

/// A single hand landmark in normalized camera space.
///
/// `x` and `y` span the image (0..1, y grows downward), `z` is depth
/// relative to the wrist on the same scale as `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
}

impl Point {
    pub const fn new(x: Coordinate, y: Coordinate, z: Coordinate) -> Self {
        Self { x, y, z }
    }
    /// Euclidean distance in all three axes.
    pub fn distance(&self, other: &Self) -> Coordinate {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
    /// Reflect across the vertical center line of the image.
    pub fn mirror(&self) -> Self {
        Self::new(1. - self.x, self.y, self.z)
    }
}

impl From<(Coordinate, Coordinate, Coordinate)> for Point {
    fn from((x, y, z): (Coordinate, Coordinate, Coordinate)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[Coordinate; 3]> for Point {
    fn from([x, y, z]: [Coordinate; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Arbitrary for Point {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::new(rng.random(), rng.random(), rng.random::<Coordinate>() - 0.5)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
