use std::fmt;

use serde::{Deserialize, Serialize};

/// Pure offset applied by [`Point::translate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
    #[serde(default)]
    pub dz: f64,
}

impl Vector {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy, dz: 0.0 }
    }

    #[must_use]
    pub const fn dx(dx: f64) -> Self {
        Self::new(dx, 0.0)
    }

    #[must_use]
    pub const fn dy(dy: f64) -> Self {
        Self::new(0.0, dy)
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }
}

/// A point in the Y-up cartesian frame used by every outline.
///
/// Points are values: every transform returns a new point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    #[must_use]
    pub fn translate(self, v: Vector) -> Self {
        Self::new(self.x + v.dx, self.y + v.dy, self.z + v.dz)
    }

    /// Mirror across the Y axis (negates `x`).
    #[must_use]
    pub fn mirror_y(self) -> Self {
        Self::new(-self.x, self.y, self.z)
    }

    /// Vector that moves `self` onto `other`.
    #[must_use]
    pub fn vector_to(self, other: Point) -> Vector {
        Vector {
            dx: other.x - self.x,
            dy: other.y - self.y,
            dz: other.z - self.z,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
