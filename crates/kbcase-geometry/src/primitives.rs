use kbcase_core::{Point, Vector};

/// Corners `(x1, y1, x2, y2)` of a `w` x `h` box centred on `(rx, ry)`,
/// top-left first in a Y-up frame.
#[must_use]
pub fn rxry_to_xyxy(rx: f64, ry: f64, w: f64, h: f64) -> (f64, f64, f64, f64) {
    (rx - w / 2.0, ry + h / 2.0, rx + w / 2.0, ry - h / 2.0)
}

/// Close a right-hand half outline into a Y-symmetric loop.
///
/// The result is `points` followed by their X-mirrored images in reverse
/// order, so index `i` and index `len - 1 - i` are mirror images.
#[must_use]
pub fn fold_points_y(points: &[Point]) -> Vec<Point> {
    let mut folded = Vec::with_capacity(points.len() * 2);
    folded.extend_from_slice(points);
    folded.extend(points.iter().rev().map(|p| p.mirror_y()));
    folded
}

/// Offset a staircase polyline horizontally by `dx`, keeping its corners.
///
/// The polyline must alternate vertical and horizontal segments starting
/// with a vertical one. End points only move along X; every interior corner
/// pair moves by `dx` along X and by `dx` along Y toward the side the step
/// opens to. Other inputs produce meaningless output; nothing is checked.
#[must_use]
pub fn offset_points(points: &[Point], dx: f64) -> Vec<Point> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(points.len());
    result.push(first.translate(Vector::dx(dx)));

    for i in (0..points.len().saturating_sub(2)).step_by(2) {
        let (p1, p2, p3) = (points[i], points[i + 1], points[i + 2]);
        let dy = if p1.x == p2.x {
            if p3.x - p2.x < 0.0 {
                -dx
            } else {
                dx
            }
        } else {
            0.0
        };
        let v = Vector::new(dx, dy);
        result.push(p2.translate(v));
        result.push(p3.translate(v));
    }

    if points.len() % 2 == 0 {
        if let Some(last) = points.last() {
            result.push(last.translate(Vector::dx(dx)));
        }
    }

    result
}

/// Value at `x = 0` of the line through `(x1, y1)` and `(x2, y2)`.
///
/// Returns `None` for a vertical line (`x1 == x2`).
#[must_use]
pub fn solve_intercept(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<f64> {
    if x1 == x2 {
        return None;
    }
    Some((x1 * y2 - x2 * y1) / (x1 - x2))
}
