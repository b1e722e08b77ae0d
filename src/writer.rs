use crate::error::{Result, SanitizeError};
use log::info;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// `<tool dir>/../dashboards`, where the tool dir holds the running executable
pub fn default_dashboards_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(SanitizeError::ToolDirectory)?;
    let tool_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(tool_dir.join("..").join("dashboards"))
}

/// File name for a dashboard with the given title
pub fn dashboard_file_name(title: &str) -> Result<String> {
    if title.is_empty() || title.contains(['/', '\\', '\0']) || title == "." || title == ".." {
        return Err(SanitizeError::InvalidTitle(title.to_string()));
    }
    Ok(format!("{}.json", title))
}

/// Writes cleaned dashboards into a single directory
pub struct DashboardWriter {
    dir: PathBuf,
}

impl DashboardWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DashboardWriter { dir: dir.into() }
    }

    /// Destination path for `title`
    pub fn path_for(&self, title: &str) -> Result<PathBuf> {
        Ok(self.dir.join(dashboard_file_name(title)?))
    }

    /// Pretty-print `doc` to `<dir>/<title>.json`, replacing any existing file
    pub fn write(&self, title: &str, doc: &Value) -> Result<PathBuf> {
        let path = self.path_for(title)?;
        let json = serde_json::to_string_pretty(doc).map_err(SanitizeError::Serialize)?;

        std::fs::create_dir_all(&self.dir).map_err(|source| SanitizeError::Write {
            path: self.dir.clone(),
            source,
        })?;

        if path.exists() {
            info!("overwriting {}", path.display());
        }

        std::fs::write(&path, json).map_err(|source| SanitizeError::Write {
            path: path.clone(),
            source,
        })?;

        info!("wrote {}", path.display());
        Ok(path)
    }
}
