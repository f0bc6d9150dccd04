//! Hand-off of the computed geometry to the CAD host.

pub mod plan;
pub mod svg;

pub use plan::{CasePlan, PanelTilt};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize case plan: {0}")]
    Json(#[from] serde_json::Error),
    #[error("SVG export requires at least one outline")]
    Empty,
}
