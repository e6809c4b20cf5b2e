//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Room (affiliation label) the tree view opens on when no `--room`
    /// flag is given. Empty means no default; the `tree` command then
    /// requires the flag.
    #[serde(default)]
    pub default_room: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_room: String::new(),
            default_limit: default_limit(),
        }
    }
}
