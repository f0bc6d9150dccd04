use kbcase_core::{Point, Vector};
use serde::{Deserialize, Serialize};

use crate::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Two diagonal corners of an axis-aligned rectangle.
    Rect,
    /// An explicit closed boundary.
    Polygon,
}

/// Outline handed to the host as either a rectangle or a closed point loop,
/// together with a bounding rect.
///
/// The rect is the tight bounding box unless the producer supplies a wider
/// one (hole templates carry their clip clearance box there).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub rect: Rect,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let rect = bounding_rect(&points);
        Self { points, rect }
    }

    #[must_use]
    pub fn with_rect(points: Vec<Point>, rect: Rect) -> Self {
        Self { points, rect }
    }

    /// RECT-shaped polygon covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            points: vec![rect.p1, rect.p2],
            rect,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        if self.points.len() == 2 {
            Shape::Rect
        } else {
            Shape::Polygon
        }
    }

    #[must_use]
    pub fn translate(&self, v: Vector) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translate(v)).collect(),
            rect: self.rect.translate(v),
        }
    }

    #[must_use]
    pub fn mirror_y(&self) -> Self {
        Self {
            points: self.points.iter().map(|p| p.mirror_y()).collect(),
            rect: self.rect.mirror_y(),
        }
    }

    /// Boundary segments as the host draws them: the four sides of a RECT,
    /// or every consecutive pair of a POLYGON including the closing edge.
    #[must_use]
    pub fn edges(&self) -> Vec<(Point, Point)> {
        match self.shape() {
            Shape::Rect => {
                let corners = Rect::new(self.points[0], self.points[1]).corners();
                closed_loop(&corners)
            }
            Shape::Polygon => closed_loop(&self.points),
        }
    }
}

fn closed_loop(points: &[Point]) -> Vec<(Point, Point)> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n).map(|i| (points[i], points[(i + 1) % n])).collect()
}

fn bounding_rect(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::default();
    }

    let mut x1 = f64::INFINITY;
    let mut y1 = f64::NEG_INFINITY;
    let mut x2 = f64::NEG_INFINITY;
    let mut y2 = f64::INFINITY;
    for p in points {
        x1 = x1.min(p.x);
        x2 = x2.max(p.x);
        y1 = y1.max(p.y);
        y2 = y2.min(p.y);
    }
    Rect::new(Point::xy(x1, y1), Point::xy(x2, y2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Polygon {
        Polygon::new(vec![
            Point::xy(0.0, 4.0),
            Point::xy(3.0, -1.0),
            Point::xy(-2.0, 0.0),
        ])
    }

    #[test]
    fn bounding_rect_is_computed() {
        let p = tri();
        assert_eq!(p.rect.p1, Point::xy(-2.0, 4.0));
        assert_eq!(p.rect.p2, Point::xy(3.0, -1.0));
        assert_eq!(p.shape(), Shape::Polygon);
    }

    #[test]
    fn two_points_is_a_rect() {
        let r = Rect::new(Point::xy(-1.0, 1.0), Point::xy(1.0, -1.0));
        let p = Polygon::from_rect(r);
        assert_eq!(p.shape(), Shape::Rect);
        assert_eq!(p.rect, r);
        assert_eq!(Polygon::new(vec![r.p1, r.p2]).rect, r);
    }

    #[test]
    fn supplied_rect_is_kept_through_translate() {
        let clearance = Rect::new(Point::xy(-5.0, 5.0), Point::xy(5.0, -8.0));
        let p = Polygon::with_rect(vec![Point::xy(-1.0, 1.0), Point::xy(1.0, -1.0)], clearance)
            .translate(Vector::new(10.0, 0.0));
        assert_eq!(p.rect.p1, Point::xy(5.0, 5.0));
        assert_eq!(p.points[1], Point::xy(11.0, -1.0));
    }

    #[test]
    fn mirror_y_mirrors_points_and_rect() {
        let p = tri().mirror_y();
        assert_eq!(p.points[1], Point::xy(-3.0, -1.0));
        assert_eq!(p.rect.p1, Point::xy(-3.0, 4.0));
        assert_eq!(p.rect.p2, Point::xy(2.0, -1.0));
    }

    #[test]
    fn rect_edges_walk_four_sides() {
        let p = Polygon::from_rect(Rect::new(Point::xy(0.0, 2.0), Point::xy(4.0, 0.0)));
        let edges = p.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (Point::xy(0.0, 2.0), Point::xy(4.0, 2.0)));
        assert_eq!(edges[3], (Point::xy(0.0, 0.0), Point::xy(0.0, 2.0)));
    }

    #[test]
    fn polygon_edges_are_closed() {
        let edges = tri().edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].1, edges[0].0);
    }

    #[test]
    fn empty_polygon_has_degenerate_rect() {
        let p = Polygon::new(vec![]);
        assert_eq!(p.rect, Rect::default());
        assert!(p.edges().is_empty());
    }
}
