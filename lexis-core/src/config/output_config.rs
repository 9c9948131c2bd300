use serde::{Deserialize, Serialize};

use super::defaults;

/// Run report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report. `None` prints a summary only.
    pub report_path: Option<String>,
    /// Where to write the 2-D scatter points as CSV.
    pub scatter_csv_path: Option<String>,
    /// Compute 2-D scatter coordinates for the report.
    pub include_scatter: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: None,
            scatter_csv_path: None,
            include_scatter: defaults::DEFAULT_INCLUDE_SCATTER,
        }
    }
}
