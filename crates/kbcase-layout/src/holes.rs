//! Switch-hole outline templates.
//!
//! Both templates are centred on the origin and built once per
//! [`LayoutContext`](crate::LayoutContext); keys receive translated copies.
//! The template's `rect` is the plate-side clearance box, not the tight
//! bounding box of the outline.

use kbcase_core::{CaseConfig, Point, Vector};
use kbcase_geometry::{fold_points_y, rxry_to_xyxy, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Keys at least this many units wide get the stabilized template.
pub const STABILIZED_MIN_UNITS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleTemplates {
    pub hole_1u: Polygon,
    pub hole_2u: Polygon,
}

impl HoleTemplates {
    #[must_use]
    pub fn new(cfg: &CaseConfig) -> Self {
        Self {
            hole_1u: hole_1u(cfg),
            hole_2u: hole_2u(cfg),
        }
    }

    /// Template for a key `uw` units wide.
    ///
    /// There is no template past 2U: wider keys (spacebars included) reuse
    /// the 2U outline centred on the key.
    #[must_use]
    pub fn select(&self, uw: f64) -> &Polygon {
        if uw >= STABILIZED_MIN_UNITS {
            &self.hole_2u
        } else {
            &self.hole_1u
        }
    }

    #[must_use]
    pub fn place(&self, uw: f64, center: Point) -> Polygon {
        self.select(uw).translate(Vector::new(center.x, center.y))
    }
}

fn hole_1u(cfg: &CaseConfig) -> Polygon {
    let x = cfg.hole_size / 2.0;
    let y = x;
    Polygon::with_rect(
        vec![Point::xy(-x, y), Point::xy(x, -y)],
        Rect::new(
            Point::xy(-x, y + cfg.clearance_top),
            Point::xy(x, -y - cfg.clearance_bottom_1u),
        ),
    )
}

fn hole_2u(cfg: &CaseConfig) -> Polygon {
    let x = cfg.hole_size / 2.0;
    let y = x;
    let canal = cfg.canal_depth;

    let (stb_x1, stb_y1, stb_x2, stb_y2) =
        rxry_to_xyxy(cfg.stb_hole_dx, -cfg.stb_hole_dy, cfg.stb_hole_w, cfg.stb_hole_h);
    let (_, noh_y1, noh_x2, noh_y2) = rxry_to_xyxy(
        cfg.side_notch_dx,
        cfg.side_notch_dy,
        cfg.side_notch_w,
        cfg.side_notch_h,
    );
    let (bot_x1, _, bot_x2, bot_y2) = rxry_to_xyxy(
        cfg.bott_notch_dx,
        -cfg.bott_notch_dy,
        cfg.bott_notch_w,
        cfg.bott_notch_h,
    );

    // Right half, clockwise from the top-right of the switch opening.
    let half = [
        Point::xy(x, y),
        Point::xy(x, y - canal),
        Point::xy(stb_x1, y - canal),
        Point::xy(stb_x1, stb_y1),
        Point::xy(stb_x2, stb_y1),
        Point::xy(stb_x2, noh_y1),
        Point::xy(noh_x2, noh_y1),
        Point::xy(noh_x2, noh_y2),
        Point::xy(stb_x2, noh_y2),
        Point::xy(stb_x2, stb_y2),
        Point::xy(bot_x2, stb_y2),
        Point::xy(bot_x2, bot_y2),
        Point::xy(bot_x1, bot_y2),
        Point::xy(bot_x1, stb_y2),
        Point::xy(stb_x1, stb_y2),
        Point::xy(stb_x1, stb_y2 + canal),
        Point::xy(x, stb_y2 + canal),
        Point::xy(x, -y),
    ];

    Polygon::with_rect(
        fold_points_y(&half),
        Rect::new(
            Point::xy(-noh_x2, y + cfg.clearance_top),
            Point::xy(noh_x2, -y - cfg.clearance_bottom_2u),
        ),
    )
}
