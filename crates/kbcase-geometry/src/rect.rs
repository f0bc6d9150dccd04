use kbcase_core::{Point, Vector};
use serde::{Deserialize, Serialize};

use crate::primitives::rxry_to_xyxy;

/// Axis-aligned rectangle given by its top-left `p1` and bottom-right `p2`
/// corners in a Y-up frame (`p1.y >= p2.y` once normalized).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Rectangle of size `w` x `h` centred on `(rx, ry)`.
    #[must_use]
    pub fn from_center(rx: f64, ry: f64, w: f64, h: f64) -> Self {
        let (x1, y1, x2, y2) = rxry_to_xyxy(rx, ry, w, h);
        Self::new(Point::xy(x1, y1), Point::xy(x2, y2))
    }

    /// Same rectangle with `p1` at the top-left and `p2` at the bottom-right.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(
            Point::new(self.p1.x.min(self.p2.x), self.p1.y.max(self.p2.y), self.p1.z),
            Point::new(self.p1.x.max(self.p2.x), self.p1.y.min(self.p2.y), self.p2.z),
        )
    }

    #[must_use]
    pub fn rx(&self) -> f64 {
        (self.p1.x + self.p2.x) / 2.0
    }

    #[must_use]
    pub fn ry(&self) -> f64 {
        (self.p1.y + self.p2.y) / 2.0
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::xy(self.rx(), self.ry())
    }

    #[must_use]
    pub fn w(&self) -> f64 {
        (self.p1.x - self.p2.x).abs()
    }

    #[must_use]
    pub fn h(&self) -> f64 {
        (self.p1.y - self.p2.y).abs()
    }

    #[must_use]
    pub fn tl(&self) -> Point {
        self.p1
    }

    #[must_use]
    pub fn tr(&self) -> Point {
        Point::xy(self.p2.x, self.p1.y)
    }

    #[must_use]
    pub fn br(&self) -> Point {
        self.p2
    }

    #[must_use]
    pub fn bl(&self) -> Point {
        Point::xy(self.p1.x, self.p2.y)
    }

    /// Corners in clockwise order starting at the top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [self.tl(), self.tr(), self.br(), self.bl()]
    }

    #[must_use]
    pub fn translate(self, v: Vector) -> Self {
        Self::new(self.p1.translate(v), self.p2.translate(v))
    }

    /// Grow (positive `v`) or shrink (negative `v`) by `v` on every side.
    #[must_use]
    pub fn offset(self, v: f64) -> Self {
        Self::new(
            self.p1.translate(Vector::new(-v, v)),
            self.p2.translate(Vector::new(v, -v)),
        )
    }

    /// Mirror across the Y axis, keeping `p1` at the top-left.
    #[must_use]
    pub fn mirror_y(self) -> Self {
        Self::new(self.p1.mirror_y(), self.p2.mirror_y()).normalized()
    }

    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Rect) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        Self::new(
            Point::xy(a.p1.x.min(b.p1.x), a.p1.y.max(b.p1.y)),
            Point::xy(a.p2.x.max(b.p2.x), a.p2.y.min(b.p2.y)),
        )
    }
}
