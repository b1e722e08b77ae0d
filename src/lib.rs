//! # dashboard-import - Dashboard template sanitizer
//!
//! Turns an exported monitoring dashboard into a generic template: the import
//! inputs are reset, the version is dropped, and datasource bindings of the
//! cleared types (by default `prometheus`) are replaced with `null` so the
//! dashboard binds to whatever default datasource it is imported into.
//!
//! ## Modules
//!
//! - **rewrite**: depth-first rewriting of keyed entries in a JSON tree
//! - **sanitize**: the dashboard policy built on top of the rewriter
//! - **writer**: writes cleaned dashboards as `<title>.json`
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_import::{SanitizeConfig, Sanitizer};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut dashboard = json!({
//!     "title": "T",
//!     "version": 4,
//!     "panels": [
//!         {"datasource": {"type": "prometheus", "uid": "x"}},
//!         {"datasource": {"type": "influxdb"}}
//!     ]
//! });
//!
//! let stats = Sanitizer::new(SanitizeConfig::default()).sanitize(&mut dashboard)?;
//!
//! assert_eq!(stats.to_string(), "Found 2 datasources, changed 1");
//! assert!(dashboard["panels"][0]["datasource"].is_null());
//! assert_eq!(dashboard["__inputs"], json!([]));
//! # Ok(())
//! # }
//! ```

use serde_json::Value;
use std::path::{Path, PathBuf};

pub mod error;
pub mod rewrite;
pub mod sanitize;
pub mod types;
pub mod writer;

pub use error::{Result, SanitizeError};
pub use rewrite::{rewrite, Rewriter};
pub use sanitize::{dashboard_title, Sanitizer};
pub use types::{SanitizeConfig, SanitizeStats};
pub use writer::{default_dashboards_dir, DashboardWriter};

/// Read and parse a dashboard file
pub fn read_dashboard<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SanitizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SanitizeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A sanitized dashboard, ready to be written as `<title>.json`
pub struct DashboardTemplate {
    title: String,
    doc: Value,
    stats: SanitizeStats,
    writer: DashboardWriter,
}

impl DashboardTemplate {
    /// Sanitize a parsed dashboard
    ///
    /// Fails before touching the document when the title is missing or cannot
    /// be used as a file name.
    pub fn from_document(mut doc: Value, config: SanitizeConfig) -> Result<Self> {
        let title = dashboard_title(&doc)
            .ok_or(SanitizeError::MissingTitle)?
            .to_string();

        let dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => default_dashboards_dir()?,
        };
        let writer = DashboardWriter::new(dir);
        writer.path_for(&title)?;

        let stats = Sanitizer::new(config).sanitize(&mut doc)?;

        Ok(DashboardTemplate {
            title,
            doc,
            stats,
            writer,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stats(&self) -> SanitizeStats {
        self.stats
    }

    pub fn document(&self) -> &Value {
        &self.doc
    }

    /// Write the template, replacing any existing file, and return its path
    pub fn write(&self) -> Result<PathBuf> {
        self.writer.write(&self.title, &self.doc)
    }
}
