use kbcase_core::{CaseConfig, ConfigError};

use crate::holes::HoleTemplates;

/// Validated configuration plus the hole templates derived from it.
///
/// Built once and shared read-only by every parse.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub config: CaseConfig,
    pub holes: HoleTemplates,
}

impl LayoutContext {
    pub fn new(config: CaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let holes = HoleTemplates::new(&config);
        Ok(Self { config, holes })
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        let config = CaseConfig::default();
        let holes = HoleTemplates::new(&config);
        Self { config, holes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected() {
        let config = CaseConfig {
            unit: 0.0,
            ..CaseConfig::default()
        };
        assert!(matches!(
            LayoutContext::new(config),
            Err(ConfigError::NonPositive { field: "unit", .. })
        ));
    }

    #[test]
    fn templates_match_config() {
        let config = CaseConfig {
            hole_size: 13.9,
            ..CaseConfig::default()
        };
        let ctx = LayoutContext::new(config.clone()).unwrap();
        assert_eq!(ctx.holes, HoleTemplates::new(&config));
    }
}
