//! Dimension constants shared by every generator.
//!
//! All lengths are in the scaled millimetre unit the layout is expressed in
//! (one key pitch is [`CaseConfig::unit`]). A config is built once, validated,
//! and only read afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("\"{field}\" must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("\"{field}\" must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("split key ({row}, {col}) is invalid: rows and columns are 1-indexed")]
    SplitKey { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseConfig {
    /// Key pitch (1U).
    pub unit: f64,
    /// Side of the square switch opening.
    pub hole_size: f64,

    pub stb_hole_dx: f64,
    pub stb_hole_dy: f64,
    pub stb_hole_w: f64,
    pub stb_hole_h: f64,

    pub side_notch_dx: f64,
    pub side_notch_dy: f64,
    pub side_notch_w: f64,
    pub side_notch_h: f64,

    pub bott_notch_dx: f64,
    pub bott_notch_dy: f64,
    pub bott_notch_w: f64,
    pub bott_notch_h: f64,

    /// Height of the passage joining the switch opening to the stabilizer slot.
    pub canal_depth: f64,
    /// Switch clip clearance above every hole.
    pub clearance_top: f64,
    /// Switch clip clearance below a 1U hole.
    pub clearance_bottom_1u: f64,
    /// Clearance below a 2U hole, covering the stabilizer housing.
    pub clearance_bottom_2u: f64,

    pub panel_padding: f64,
    pub split_gap: f64,
    /// 1-indexed `(row, col)` cells whose right edge forms the split divider.
    pub split_keys: BTreeSet<(usize, usize)>,

    pub wall_thickness: f64,
    pub plate_gap: f64,

    pub promicro_w: f64,
    pub promicro_h: f64,
    pub usb_w: f64,
    pub usb_l: f64,

    pub trrs_w: f64,
    pub trrs_h: f64,
    pub trrs_l: f64,

    pub holder_thickness: f64,

    /// Panel surface height at the bottom (front) edge.
    pub front_height: f64,
    /// Panel surface height at the top (rear) edge.
    pub rear_height: f64,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            unit: 19.0,
            hole_size: 14.1,
            stb_hole_dx: 11.9,
            stb_hole_dy: 0.62,
            stb_hole_w: 7.1,
            stb_hole_h: 13.4,
            side_notch_dx: 15.66,
            side_notch_dy: 0.9,
            side_notch_w: 1.0,
            side_notch_h: 2.9,
            bott_notch_dx: 11.9,
            bott_notch_dy: 7.37,
            bott_notch_w: 3.1,
            bott_notch_h: 1.3,
            canal_depth: 3.0,
            clearance_top: 0.5,
            clearance_bottom_1u: 0.5,
            clearance_bottom_2u: 3.3,
            panel_padding: 3.0,
            split_gap: 1.0,
            split_keys: BTreeSet::new(),
            wall_thickness: 3.0,
            plate_gap: 0.5,
            promicro_w: 18.5,
            promicro_h: 33.5,
            usb_w: 8.0,
            usb_l: 5.6,
            trrs_w: 6.0,
            trrs_h: 12.0,
            trrs_l: 2.0,
            holder_thickness: 1.5,
            front_height: 12.0,
            rear_height: 20.0,
        }
    }
}

impl CaseConfig {
    /// Parse a (possibly partial) YAML config; missing fields keep their defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[must_use]
    pub fn with_split_keys(mut self, keys: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.split_keys = keys.into_iter().collect();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("unit", self.unit),
            ("hole_size", self.hole_size),
            ("stb_hole_w", self.stb_hole_w),
            ("stb_hole_h", self.stb_hole_h),
            ("side_notch_w", self.side_notch_w),
            ("side_notch_h", self.side_notch_h),
            ("bott_notch_w", self.bott_notch_w),
            ("bott_notch_h", self.bott_notch_h),
            ("wall_thickness", self.wall_thickness),
            ("promicro_w", self.promicro_w),
            ("promicro_h", self.promicro_h),
            ("usb_w", self.usb_w),
            ("usb_l", self.usb_l),
            ("trrs_w", self.trrs_w),
            ("trrs_h", self.trrs_h),
            ("trrs_l", self.trrs_l),
            ("holder_thickness", self.holder_thickness),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("canal_depth", self.canal_depth),
            ("clearance_top", self.clearance_top),
            ("clearance_bottom_1u", self.clearance_bottom_1u),
            ("clearance_bottom_2u", self.clearance_bottom_2u),
            ("panel_padding", self.panel_padding),
            ("split_gap", self.split_gap),
            ("plate_gap", self.plate_gap),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if let Some(&(row, col)) = self.split_keys.iter().find(|(r, c)| *r == 0 || *c == 0) {
            return Err(ConfigError::SplitKey { row, col });
        }

        Ok(())
    }
}
