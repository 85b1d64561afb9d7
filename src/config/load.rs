use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::RectCliqueConfig;

/// Run settings read from a `.rectclique` JSON file.
///
/// `input` and `output` are written relative to the file itself and are
/// joined onto `config_dir` when resolved.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RectCliqueConfig,
    /// Parent directory of the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Read and parse `path`. Unknown pivot names are left for the caller to reject.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: RectCliqueConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Rectangle file path, resolved relative to the config directory
    pub fn resolve_input(&self) -> Option<PathBuf> {
        self.config
            .input
            .as_ref()
            .map(|input| self.config_dir.join(input))
    }

    /// Output file path, resolved relative to the config directory
    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.config
            .output
            .as_ref()
            .map(|output| self.config_dir.join(output))
    }
}
