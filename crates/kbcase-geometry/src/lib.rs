//! 2D geometry primitives and operations.

pub mod polygon;
pub mod primitives;
pub mod rect;

pub use polygon::{Polygon, Shape};
pub use primitives::{fold_points_y, offset_points, rxry_to_xyxy, solve_intercept};
pub use rect::Rect;
