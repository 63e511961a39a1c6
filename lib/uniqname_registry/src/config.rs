use serde::{Deserialize, Serialize};

/// Construction-time settings of a `NameRegistry`.
///
/// Missing fields fall back to `Default`, so `{}` is a valid config.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Inserted between a stem and its number
    pub separator: String,
    /// Stem used when the prefix is empty
    pub empty_marker: String,
    /// Names issued up front so that they are never handed out
    pub reserved: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            separator: "_".to_string(),
            empty_marker: "".to_string(),
            reserved: vec![],
        }
    }
}
