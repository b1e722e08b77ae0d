use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Configuration for sanitizing a dashboard document
#[derive(Debug, Clone)]
pub struct SanitizeConfig {
    /// Object key whose values are handed to the clearing policy
    pub datasource_key: String,

    /// Datasource `type` values that get replaced with `null`
    pub cleared_types: Vec<String>,

    /// Top-level field reset to an empty array
    pub inputs_field: String,

    /// Top-level field removed entirely
    pub version_field: String,

    /// Directory the cleaned dashboard is written to.
    /// `None` resolves to `<tool dir>/../dashboards`.
    pub output_dir: Option<PathBuf>,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        SanitizeConfig {
            datasource_key: String::from("datasource"),
            cleared_types: vec![String::from("prometheus")],
            inputs_field: String::from("__inputs"),
            version_field: String::from("version"),
            output_dir: None,
        }
    }
}

impl SanitizeConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn is_cleared_type(&self, ty: &str) -> bool {
        self.cleared_types.iter().any(|t| t == ty)
    }
}

/// Datasource counters for a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeStats {
    /// Entries found under the datasource key
    pub visited: usize,

    /// Entries replaced with `null`
    pub cleared: usize,
}

impl fmt::Display for SanitizeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} datasources, changed {}", self.visited, self.cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SanitizeConfig::default();
        assert_eq!(config.datasource_key, "datasource");
        assert!(config.is_cleared_type("prometheus"));
        assert!(!config.is_cleared_type("influxdb"));
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_stats_summary_line() {
        let stats = SanitizeStats { visited: 5, cleared: 3 };
        assert_eq!(stats.to_string(), "Found 5 datasources, changed 3");
    }
}
