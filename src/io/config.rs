//! Optional JSON config file.
//!
//! Every field is optional; missing fields keep the code-level defaults.
//!
//! ```json
//! {
//!   "output": "README.md",
//!   "lookback_days": 10,
//!   "utc_offset_hours": 9,
//!   "timezone_label": "KST",
//!   "instruments": [
//!     { "name": "KOSPI", "symbol": "^KS11" },
//!     { "name": "Apple", "symbol": "AAPL", "currency": "USD" }
//!   ]
//! }
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{Instrument, RunConfig};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub instruments: Option<Vec<Instrument>>,
    pub lookback_days: Option<u32>,
    pub output: Option<PathBuf>,
    pub utc_offset_hours: Option<i32>,
    pub timezone_label: Option<String>,
}

impl ConfigFile {
    /// Overlay the file's values onto `base`.
    pub fn apply(self, mut base: RunConfig) -> RunConfig {
        if let Some(instruments) = self.instruments {
            base.instruments = instruments;
        }
        if let Some(days) = self.lookback_days {
            base.lookback_days = days;
        }
        if let Some(output) = self.output {
            base.output = output;
        }
        if let Some(hours) = self.utc_offset_hours {
            base.utc_offset_hours = hours;
        }
        if let Some(label) = self.timezone_label {
            base.timezone_label = label;
        }
        base
    }
}

/// Read a config file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open config '{}': {e}", path.display())))?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid config '{}': {e}", path.display())))
}
