use std::fmt;

use serde::{Deserialize, Serialize};

/// Continuous world position in block units.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing up, used as the face normal when placing on top of a block.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns a copy translated by the given deltas.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Squared euclidean distance. Range checks compare against squared radii
    /// so no square root is needed.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Absolute vertical separation.
    #[inline]
    pub fn vertical_gap(self, other: Self) -> f64 {
        (self.y - other.y).abs()
    }

    /// Integer block coordinates containing this point.
    pub fn block_coords(self) -> (i64, i64, i64) {
        (
            self.x.floor() as i64,
            self.y.floor() as i64,
            self.z.floor() as i64,
        )
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_squared_covers_all_axes() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn offset_and_vertical_gap() {
        let feet = Vec3::new(10.0, 64.0, -3.0).offset(0.0, -1.0, 0.0);
        assert_eq!(feet, Vec3::new(10.0, 63.0, -3.0));
        assert_eq!(feet.vertical_gap(Vec3::new(0.0, 70.0, 0.0)), 7.0);
    }

    #[test]
    fn block_coords_floor_negative_values() {
        assert_eq!(Vec3::new(81.5, 65.0, -386.2).block_coords(), (81, 65, -387));
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(Vec3::new(1.0, 2.26, -3.0).to_string(), "(1.0, 2.3, -3.0)");
    }
}
