use kbcase_footprint::{ControllerFootprint, JackFootprint};
use kbcase_geometry::{solve_intercept, Polygon, Rect};
use kbcase_layout::{HoleTemplates, Layout, LayoutContext};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ExportError;

/// Linear height profile of the panel surface along Y: `rear_height` at the
/// panel's top edge falling to `front_height` at its bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelTilt {
    pub front_height: f64,
    pub rear_height: f64,
    /// Height at `y = 0`, the panel centre after re-centring.
    pub center_height: f64,
    /// Panel angle about the X axis, in degrees.
    pub angle_deg: f64,
}

impl PanelTilt {
    #[must_use]
    pub fn new(panel: Rect, front_height: f64, rear_height: f64) -> Self {
        let panel = panel.normalized();
        let center_height = solve_intercept(panel.p1.y, rear_height, panel.p2.y, front_height)
            .unwrap_or((front_height + rear_height) / 2.0);
        let depth = panel.h();
        let angle_deg = if depth > 0.0 {
            ((rear_height - front_height) / depth).atan().to_degrees()
        } else {
            0.0
        };
        Self {
            front_height,
            rear_height,
            center_height,
            angle_deg,
        }
    }

    /// Panel surface height at `y`.
    #[must_use]
    pub fn height_at(&self, y: f64) -> f64 {
        self.center_height + y * self.angle_deg.to_radians().tan()
    }
}

/// Everything the host needs to build the case bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasePlan {
    pub layout: Layout,
    /// Distinct panel outlines (one unsplit, two split).
    pub outlines: Vec<Polygon>,
    pub tilt: PanelTilt,
    pub controller: ControllerFootprint,
    pub jack: JackFootprint,
    pub hole_templates: HoleTemplates,
}

impl CasePlan {
    #[must_use]
    pub fn new(ctx: &LayoutContext, layout: Layout) -> Self {
        let cfg = &ctx.config;
        let outlines = layout.outlines().into_iter().cloned().collect::<Vec<_>>();
        let tilt = PanelTilt::new(layout.rect, cfg.front_height, cfg.rear_height);
        debug!(
            keys = layout.keys.len(),
            outlines = outlines.len(),
            center_height = tilt.center_height,
            "assembled case plan"
        );
        Self {
            outlines,
            tilt,
            controller: ControllerFootprint::new(cfg),
            jack: JackFootprint::new(cfg),
            hole_templates: ctx.holes.clone(),
            layout,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}
