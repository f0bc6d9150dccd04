//! Value types and configuration shared by the kbcase crates.

pub mod config;
pub mod point;

pub use config::{CaseConfig, ConfigError};
pub use point::{Point, Vector};
