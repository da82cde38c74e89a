//! Output format value object

use serde::{Deserialize, Serialize};

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banners, notifications and a readable survey summary (default)
    #[default]
    Pretty,
    /// Raw JSON payload only
    Json,
}
