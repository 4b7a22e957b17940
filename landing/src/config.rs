//! Page assembly configuration.
//!
//! Passed into [`crate::LandingPage`] instead of living in module constants,
//! so every switch can be flipped from tests or the export CLI.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::reveal::DEFAULT_MARGIN_PX;

/// Default gap between the animation starts of sibling grid items, seconds.
pub const DEFAULT_STAGGER_STEP: f64 = 0.1;
/// Largest accepted stagger step, seconds.
pub const MAX_STAGGER_STEP: f64 = 5.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stagger_step must be between 0 and 5 seconds (got {0})")]
    StaggerStep(f64),
}

/// Switches for one rendering of the page.
///
/// ```rust
/// use bootcamp_landing::PageConfig;
///
/// let config = PageConfig::from_json_str(r#"{ "show_mentors": true }"#).unwrap();
/// assert!(config.show_mentors);
/// assert_eq!(config.stagger_step, 0.1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Render the "Meet Your Mentors" carousel. Off until mentors are final.
    pub show_mentors: bool,
    /// Delay step per item index inside a grid, in seconds.
    pub stagger_step: f64,
    /// Root margin for reveal observers, in CSS pixels.
    pub reveal_margin_px: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            show_mentors: false,
            stagger_step: DEFAULT_STAGGER_STEP,
            reveal_margin_px: DEFAULT_MARGIN_PX,
        }
    }
}

impl PageConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_STAGGER_STEP).contains(&self.stagger_step) {
            return Err(ConfigError::StaggerStep(self.stagger_step));
        }
        Ok(())
    }

    /// Reveal delay for the item at `index` in a grid, rounded to whole
    /// milliseconds so it prints cleanly in CSS.
    pub fn stagger(&self, index: usize) -> f64 {
        (index as f64 * self.stagger_step * 1000.0).round() / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hide_mentors() {
        let config = PageConfig::default();
        assert!(!config.show_mentors);
        assert_eq!(config.reveal_margin_px, -50);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(PageConfig::from_json_str("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn negative_stagger_rejected() {
        let err = PageConfig::from_json_str(r#"{ "stagger_step": -0.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::StaggerStep(_)));
    }

    #[test]
    fn oversized_stagger_rejected() {
        let err = PageConfig::from_json_str(r#"{ "stagger_step": 1e308 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::StaggerStep(_)));
        assert!(err.to_string().contains("between 0 and 5 seconds"));

        let config = PageConfig::from_json_str(r#"{ "stagger_step": 5 }"#).unwrap();
        assert_eq!(config.stagger(3), 15.0);
    }

    #[test]
    fn malformed_json_rejected() {
        let err = PageConfig::from_json_str("{ show_mentors: yes }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn stagger_is_index_proportional() {
        let config = PageConfig::default();
        assert_eq!(config.stagger(0), 0.0);
        assert_eq!(config.stagger(3), 0.3);
        assert_eq!(config.stagger(7).to_string(), "0.7");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PageConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
