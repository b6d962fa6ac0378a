//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset};

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the payment snapshot
    pub data_file: PathBuf,
    /// Offset the system clock reports in
    pub utc_offset: FixedOffset,
    /// Pinned "now", replacing the system clock when set
    pub now: Option<DateTime<FixedOffset>>,
}

/// Values that override the environment, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub utc_offset: Option<String>,
    pub now: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env(overrides: Overrides) -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), overrides)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> anyhow::Result<Self> {
        let data_file = overrides
            .data_file
            .or_else(|| lookup("PAYMENTS_DATA_FILE").map(PathBuf::from))
            .ok_or_else(|| {
                anyhow::anyhow!("PAYMENTS_DATA_FILE environment variable or --data is required")
            })?;

        let utc_offset = match overrides
            .utc_offset
            .or_else(|| lookup("PAYMENTS_UTC_OFFSET"))
        {
            Some(raw) => parse_offset(&raw)?,
            None => FixedOffset::east_opt(0).ok_or_else(|| anyhow::anyhow!("invalid UTC offset"))?,
        };

        let now = overrides
            .now
            .or_else(|| lookup("PAYMENTS_NOW"))
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map_err(|e| anyhow::anyhow!("Invalid PAYMENTS_NOW '{}': {}", raw, e))
            })
            .transpose()?;

        Ok(Self {
            data_file,
            utc_offset,
            now,
        })
    }
}

/// Parses `Z`, `+HH:MM` or `-HH:MM`.
pub fn parse_offset(raw: &str) -> anyhow::Result<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| anyhow::anyhow!("invalid UTC offset"));
    }

    // `format::parse` rejects trailing input, unlike `FixedOffset::from_str`.
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, raw, StrftimeItems::new("%:z"))
        .and_then(|()| parsed.to_fixed_offset())
        .map_err(|e| anyhow::anyhow!("Invalid UTC offset '{}', expected +HH:MM: {}", raw, e))
}
