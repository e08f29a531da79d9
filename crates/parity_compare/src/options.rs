use parity_document::DEFAULT_RESOLUTION_DPI;
use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// Configuration for one comparison run.
///
/// Cheap to clone and serde-friendly so it can be loaded from a config file
/// or passed over a process boundary unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareOptions {
    /// Rasterization resolution for the visual channel. Held constant for
    /// the whole run; defaults to 144 DPI.
    #[serde(default = "CompareOptions::default_resolution_dpi")]
    pub resolution_dpi: u32,
    /// Run block-level localization on pages whose text diverges.
    #[serde(default = "CompareOptions::default_localize")]
    pub localize: bool,
    /// Fan page-level work out across the rayon pool. Verdict order is
    /// ascending page index either way.
    #[serde(default)]
    pub use_parallel: bool,
}

impl CompareOptions {
    pub(crate) fn default_resolution_dpi() -> u32 {
        DEFAULT_RESOLUTION_DPI
    }

    pub(crate) fn default_localize() -> bool {
        true
    }

    /// Validate the options for a single run.
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.resolution_dpi == 0 {
            return Err(CompareError::InvalidOptions(
                "resolution_dpi must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            resolution_dpi: Self::default_resolution_dpi(),
            localize: Self::default_localize(),
            use_parallel: false,
        }
    }
}
