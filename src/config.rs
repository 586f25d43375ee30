//! Configuration management and validation.
//!
//! Provides the configuration structure for a processing run: date
//! windowing, cancellation handling and expiry filtering.

use crate::constants::DEFAULT_YEAR_PIVOT;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main configuration for NOTAM batch processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Two-digit year windowing boundary (`YY <= pivot` is 20YY, else 19YY)
    pub year_pivot: u8,

    /// Drop records that a cancellation NOTAM in the same batch supersedes
    pub drop_superseded: bool,

    /// Drop records whose validity window already ended at the reference time
    pub exclude_expired: bool,

    /// Reference instant for time-status decisions (None = now at batch time)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            year_pivot: DEFAULT_YEAR_PIVOT,
            drop_superseded: true,
            exclude_expired: false,
            reference_time: None,
        }
    }
}

impl ProcessorConfig {
    /// Create configuration with a custom two-digit year pivot
    pub fn with_year_pivot(mut self, year_pivot: u8) -> Self {
        self.year_pivot = year_pivot;
        self
    }

    /// Keep records even when a cancellation in the batch supersedes them
    pub fn keeping_superseded(mut self) -> Self {
        self.drop_superseded = false;
        self
    }

    /// Enable expiry filtering
    pub fn with_expired_excluded(mut self) -> Self {
        self.exclude_expired = true;
        self
    }

    /// Pin the reference instant used for time-status decisions
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    /// Resolve the reference instant, falling back to the current time
    pub fn reference_time_or_now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.year_pivot > 99 {
            return Err(Error::configuration(format!(
                "Year pivot {} is out of range: must be between 0 and 99",
                self.year_pivot
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
