//! Keyboard case layout engine.
//!
//! Reads a KLE layout and a case configuration and produces a [`CasePlan`]:
//! key rectangles, switch holes, one or two panel outlines, the panel tilt
//! and the controller and jack holder footprints, all as plain 2D data for a
//! CAD host to extrude.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub use kbcase_core::{CaseConfig, ConfigError, Point, Vector};
pub use kbcase_export::{svg, CasePlan, ExportError, PanelTilt};
pub use kbcase_footprint::{
    promicro_holder, promicro_rects, trrs_holder, trrs_rect, ControllerFootprint, JackFootprint,
};
pub use kbcase_geometry::{
    fold_points_y, offset_points, rxry_to_xyxy, solve_intercept, Polygon, Rect, Shape,
};
pub use kbcase_layout::{HoleTemplates, Key, Layout, LayoutContext, LayoutError, LayoutMeta};

/// Load a case configuration. `.json` files are read as JSON, anything else
/// as YAML.
pub fn load_config(path: &Path) -> Result<CaseConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => CaseConfig::from_json_str(&content),
        _ => CaseConfig::from_yaml_str(&content),
    }
    .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}

/// Parse KLE JSON text into a plan.
pub fn build_plan_from_str(ctx: &LayoutContext, json: &str) -> Result<CasePlan> {
    let layout = kbcase_layout::parse_str(ctx, json).context("Failed to parse KLE layout")?;
    Ok(CasePlan::new(ctx, layout))
}

/// Read a KLE file and build its plan under `config`.
pub fn build_plan_from_file(path: &Path, config: CaseConfig) -> Result<CasePlan> {
    let ctx = LayoutContext::new(config).context("Invalid case configuration")?;
    let layout = kbcase_layout::from_file(&ctx, path)
        .with_context(|| format!("Failed to load KLE layout: {:?}", path))?;
    let plan = CasePlan::new(&ctx, layout);
    info!(
        path = %path.display(),
        keys = plan.layout.keys.len(),
        split = plan.layout.is_split(),
        "built case plan"
    );
    Ok(plan)
}

/// Write `plan.json` and `preview.svg` into `dir`, creating it if needed.
pub fn write_outputs(plan: &CasePlan, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let json = plan.to_json().context("Failed to serialize case plan")?;
    let json_path = dir.join("plan.json");
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write {:?}", json_path))?;

    let preview = svg::render_plan(plan).context("Failed to render SVG preview")?;
    let svg_path = dir.join("preview.svg");
    fs::write(&svg_path, preview).with_context(|| format!("Failed to write {:?}", svg_path))?;
    Ok(())
}
