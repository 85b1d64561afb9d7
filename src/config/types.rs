use serde::Deserialize;

/// rectclique configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RectCliqueConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Rectangle file to read
    pub input: Option<String>,
    /// File to write results to; stdout when absent
    pub output: Option<String>,
    /// Pivot rule for the clique search: "none" or "tomita"
    pub pivot: String,
}

impl Default for RectCliqueConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            output: None,
            pivot: "tomita".to_string(),
        }
    }
}
