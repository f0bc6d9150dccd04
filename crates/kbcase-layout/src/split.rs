//! Split-keyboard panel outlines.

use kbcase_core::Point;
use kbcase_geometry::{offset_points, Polygon, Rect};

/// Left and right panel outlines for `panel`.
///
/// `divider` holds the top-right and bottom-right corners of every split key
/// in row order. Its ends are stretched to the panel's top and bottom edges,
/// then each half is bounded by a copy of the divider moved `gap / 2` away
/// from the centreline. An empty divider yields the whole panel for both
/// halves.
#[must_use]
pub fn panel_outlines(panel: Rect, divider: &[Point], gap: f64) -> (Polygon, Polygon) {
    if divider.is_empty() {
        let whole = Polygon::from_rect(panel);
        return (whole.clone(), whole);
    }

    let divider = clamp_to_panel(panel, divider);
    let half_gap = gap / 2.0;

    let mut left = vec![panel.tl()];
    left.extend(offset_points(&divider, -half_gap));
    left.push(panel.bl());

    let mut right = vec![panel.tr()];
    right.extend(offset_points(&divider, half_gap));
    right.push(panel.br());

    (Polygon::new(left), Polygon::new(right))
}

fn clamp_to_panel(panel: Rect, divider: &[Point]) -> Vec<Point> {
    let mut points = divider.to_vec();
    if let Some(first) = points.first_mut() {
        first.y = panel.p1.y;
    }
    if let Some(last) = points.last_mut() {
        last.y = panel.p2.y;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Rect {
        Rect::new(Point::xy(-3.0, 3.0), Point::xy(117.0, -41.0))
    }

    #[test]
    fn no_divider_keeps_whole_panel() {
        let (left, right) = panel_outlines(panel(), &[], 1.0);
        assert_eq!(left, right);
        assert_eq!(left.rect, panel());
    }

    #[test]
    fn straight_divider_splits_with_gap() {
        let divider = [
            Point::xy(57.0, 0.0),
            Point::xy(57.0, -19.0),
            Point::xy(57.0, -19.0),
            Point::xy(57.0, -38.0),
        ];
        let (left, right) = panel_outlines(panel(), &divider, 2.0);

        assert_eq!(left.points.first(), Some(&Point::xy(-3.0, 3.0)));
        assert_eq!(left.points[1], Point::xy(56.0, 3.0));
        assert_eq!(left.points.last(), Some(&Point::xy(-3.0, -41.0)));
        assert_eq!(left.rect.p2.x, 56.0);

        assert_eq!(right.points.first(), Some(&Point::xy(117.0, 3.0)));
        assert_eq!(right.points[4], Point::xy(58.0, -41.0));
        assert_eq!(right.rect.p1.x, 58.0);
    }

    #[test]
    fn staggered_divider_follows_the_step() {
        let divider = [
            Point::xy(57.0, 0.0),
            Point::xy(57.0, -19.0),
            Point::xy(66.5, -19.0),
            Point::xy(66.5, -38.0),
        ];
        let (left, right) = panel_outlines(panel(), &divider, 1.0);
        assert_eq!(
            left.points,
            vec![
                Point::xy(-3.0, 3.0),
                Point::xy(56.5, 3.0),
                Point::xy(56.5, -19.5),
                Point::xy(66.0, -19.5),
                Point::xy(66.0, -41.0),
                Point::xy(-3.0, -41.0),
            ]
        );
        assert_eq!(right.points[2], Point::xy(57.5, -18.5));
        assert_eq!(right.points[3], Point::xy(67.0, -18.5));
    }
}
