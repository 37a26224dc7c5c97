//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for `list`. `0` means no limit.
    #[serde(default)]
    pub default_limit: u32,
}
