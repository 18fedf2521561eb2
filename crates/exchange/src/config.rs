use chrono::Duration;
use gbce_core::{DEFAULT_VWSP_WINDOW_SECS, Pennies, money::DISPLAY_PRECISION};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ExchangeError, Result};

/// Root configuration for an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Trailing window for the volume-weighted stock price, in seconds
    #[serde(default = "default_vwsp_window_secs")]
    pub vwsp_window_secs: i64,
    /// Fractional digits used when reporting
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
    /// Stocks listed at start-up
    #[serde(default)]
    pub securities: Vec<SecurityConfig>,
}

/// Listing of a single stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SecurityConfig {
    Common {
        symbol: String,
        last_dividend: Pennies,
        par_value: Pennies,
    },
    Preferred {
        symbol: String,
        last_dividend: Pennies,
        fixed_dividend_rate: Decimal,
        par_value: Pennies,
    },
}

impl SecurityConfig {
    pub fn symbol(&self) -> &str {
        match self {
            SecurityConfig::Common { symbol, .. } | SecurityConfig::Preferred { symbol, .. } => {
                symbol
            }
        }
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            vwsp_window_secs: default_vwsp_window_secs(),
            display_precision: default_display_precision(),
            securities: Vec::new(),
        }
    }
}

impl ExchangeConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExchangeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The GBCE sample catalog (all values in pennies)
    pub fn gbce_sample() -> Self {
        Self {
            securities: vec![
                SecurityConfig::Common {
                    symbol: "TEA".to_string(),
                    last_dividend: 0,
                    par_value: 10000,
                },
                SecurityConfig::Common {
                    symbol: "POP".to_string(),
                    last_dividend: 8,
                    par_value: 10000,
                },
                SecurityConfig::Common {
                    symbol: "ALE".to_string(),
                    last_dividend: 23,
                    par_value: 6000,
                },
                SecurityConfig::Preferred {
                    symbol: "GIN".to_string(),
                    last_dividend: 8,
                    fixed_dividend_rate: dec!(0.02),
                    par_value: 10000,
                },
                SecurityConfig::Common {
                    symbol: "JOE".to_string(),
                    last_dividend: 13,
                    par_value: 25000,
                },
            ],
            ..Self::default()
        }
    }

    /// Check settings that serde cannot express
    ///
    /// Stock attributes are validated when the stocks are listed.
    pub fn validate(&self) -> Result<()> {
        self.vwsp_window().map(|_| ())
    }

    /// VWSP window as a duration; fails unless it is positive and in range
    pub fn vwsp_window(&self) -> Result<Duration> {
        if self.vwsp_window_secs <= 0 {
            return Err(ExchangeError::ConfigError(format!(
                "vwsp_window_secs must be positive, got {}",
                self.vwsp_window_secs
            )));
        }
        Duration::try_seconds(self.vwsp_window_secs).ok_or_else(|| {
            ExchangeError::ConfigError(format!(
                "vwsp_window_secs out of range: {}",
                self.vwsp_window_secs
            ))
        })
    }
}

// Default value functions for serde
fn default_vwsp_window_secs() -> i64 {
    DEFAULT_VWSP_WINDOW_SECS
}

fn default_display_precision() -> u32 {
    DISPLAY_PRECISION
}
