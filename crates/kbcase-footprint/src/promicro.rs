use kbcase_core::{CaseConfig, Point, Vector};
use kbcase_geometry::{fold_points_y, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Pro Micro holder clips plus the board and USB connector bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerFootprint {
    /// Left nub, right nub, bottom clamp.
    pub holder: Vec<Polygon>,
    pub board: Rect,
    pub usb: Rect,
}

impl ControllerFootprint {
    #[must_use]
    pub fn new(cfg: &CaseConfig) -> Self {
        let (board, usb) = promicro_rects(cfg);
        Self {
            holder: promicro_holder(cfg),
            board,
            usb,
        }
    }

    #[must_use]
    pub fn translate(&self, v: Vector) -> Self {
        Self {
            holder: self.holder.iter().map(|p| p.translate(v)).collect(),
            board: self.board.translate(v),
            usb: self.usb.translate(v),
        }
    }
}

/// Y of the board's top edge, placed so the USB connector front is flush
/// with the outside of the wall.
fn board_top(cfg: &CaseConfig) -> f64 {
    cfg.wall_thickness - cfg.usb_l + cfg.plate_gap
}

/// Two corner nubs at the board's top corners and a clamp under its bottom edge.
#[must_use]
pub fn promicro_holder(cfg: &CaseConfig) -> Vec<Polygon> {
    let pcb_height = cfg.promicro_h - board_top(cfg);
    let x = cfg.promicro_w / 2.0;
    let t = cfg.holder_thickness;

    let bottom_clamp = Polygon::new(fold_points_y(&[
        Point::xy(x, 0.0),
        Point::xy(x, t),
        Point::xy(x + t, t),
        Point::xy(x + t, -t),
    ]));
    let rnub = Polygon::new(vec![Point::xy(x, 0.0), Point::xy(x + t, -t)]);
    let lnub = rnub.mirror_y();

    vec![lnub, rnub, bottom_clamp.translate(Vector::dy(-pcb_height))]
}

/// Board and USB connector outlines, both hanging from the board top.
#[must_use]
pub fn promicro_rects(cfg: &CaseConfig) -> (Rect, Rect) {
    let x1 = cfg.promicro_w / 2.0;
    let x2 = cfg.usb_w / 2.0;
    let y = board_top(cfg);
    (
        Rect::new(Point::xy(-x1, y), Point::xy(x1, y - cfg.promicro_h)),
        Rect::new(Point::xy(-x2, y), Point::xy(x2, y - cfg.usb_l)),
    )
}
