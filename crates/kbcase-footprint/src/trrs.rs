use kbcase_core::{CaseConfig, Point, Vector};
use kbcase_geometry::{fold_points_y, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// TRRS jack clamp and jack body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackFootprint {
    pub holder: Vec<Polygon>,
    pub body: Rect,
}

impl JackFootprint {
    #[must_use]
    pub fn new(cfg: &CaseConfig) -> Self {
        Self {
            holder: trrs_holder(cfg),
            body: trrs_rect(cfg),
        }
    }

    #[must_use]
    pub fn translate(&self, v: Vector) -> Self {
        Self {
            holder: self.holder.iter().map(|p| p.translate(v)).collect(),
            body: self.body.translate(v),
        }
    }
}

fn jack_top(cfg: &CaseConfig) -> f64 {
    cfg.wall_thickness - cfg.trrs_l + cfg.plate_gap
}

/// U-shaped clamp hugging both sides and the back of the jack.
#[must_use]
pub fn trrs_holder(cfg: &CaseConfig) -> Vec<Polygon> {
    let trrs_height = cfg.trrs_h - jack_top(cfg);
    let (x, y, t) = (cfg.trrs_w / 2.0, -trrs_height, cfg.holder_thickness);
    vec![Polygon::new(fold_points_y(&[
        Point::xy(x, y),
        Point::xy(x, 0.0),
        Point::xy(x + t, 0.0),
        Point::xy(x + t, y - t),
    ]))]
}

#[must_use]
pub fn trrs_rect(cfg: &CaseConfig) -> Rect {
    let x = cfg.trrs_w / 2.0;
    let y = jack_top(cfg);
    Rect::new(Point::xy(-x, y), Point::xy(x, y - cfg.trrs_h))
}
