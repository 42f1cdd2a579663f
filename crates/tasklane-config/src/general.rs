//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for search results.
const fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for search/list operations.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}
