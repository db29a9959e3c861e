//! CLI configuration: payroll calendar and RSU cadence.
//!
//! The payroll-alignment calendar is deployment data, not code; only the
//! semiannual disbursement dates are known defaults. Everything here can
//! be overridden from `vestctl.toml`:
//!
//! ```toml
//! [payroll]
//! dates = ["06-15", "11-15"]
//!
//! [rsu]
//! cadence = "monthly"   # or "quarterly"
//! ```

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use vesting_models::grants::{ConfigResolver, RsuCadence};
use vesting_models::schedules::{MonthDay, PayrollCalendar};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    payroll: PayrollSection,
    #[serde(default)]
    rsu: RsuSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PayrollSection {
    dates: Vec<String>,
}

impl Default for PayrollSection {
    fn default() -> Self {
        Self {
            dates: vec!["06-15".to_string(), "11-15".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RsuSection {
    #[serde(default)]
    cadence: Cadence,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum Cadence {
    #[default]
    Monthly,
    Quarterly,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// The payroll-alignment calendar.
    pub calendar: PayrollCalendar,
    /// Resolver configured with the chosen RSU cadence.
    pub resolver: ConfigResolver,
}

impl CliConfig {
    /// Loads configuration from a TOML file, or built-in defaults when
    /// the file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        let raw = if Path::new(path).exists() {
            toml::from_str(&std::fs::read_to_string(path)?)?
        } else {
            RawConfig::default()
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let days = raw
            .payroll
            .dates
            .iter()
            .map(|s| s.parse::<MonthDay>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(CliError::Schedule)?;
        let calendar = PayrollCalendar::new(days)?;

        let cadence = match raw.rsu.cadence {
            Cadence::Monthly => RsuCadence::Monthly,
            Cadence::Quarterly => RsuCadence::Quarterly,
        };

        Ok(Self {
            calendar,
            resolver: ConfigResolver::new().with_rsu_cadence(cadence),
        })
    }

    /// Built-in defaults: the semiannual disbursement calendar and
    /// monthly RSU cadence.
    pub fn defaults() -> Self {
        Self {
            calendar: PayrollCalendar::semiannual(),
            resolver: ConfigResolver::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_empty_config() {
        let parsed = CliConfig::from_raw(RawConfig::default()).unwrap();
        assert_eq!(parsed.calendar, CliConfig::defaults().calendar);
    }

    #[test]
    fn test_parse_full_config() {
        let raw: RawConfig = toml::from_str(
            r#"
            [payroll]
            dates = ["03-15", "06-15", "09-15", "12-15"]

            [rsu]
            cadence = "quarterly"
            "#,
        )
        .unwrap();
        let config = CliConfig::from_raw(raw).unwrap();
        assert_eq!(config.calendar.days().len(), 4);
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        let raw: RawConfig = toml::from_str(
            r#"
            [payroll]
            dates = ["02-30"]
            "#,
        )
        .unwrap();
        assert!(CliConfig::from_raw(raw).is_err());
    }

    #[test]
    fn test_empty_calendar_rejected() {
        let raw: RawConfig = toml::from_str(
            r#"
            [payroll]
            dates = []
            "#,
        )
        .unwrap();
        assert!(CliConfig::from_raw(raw).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<RawConfig>("[payrol]\ndates = []\n").is_err());
    }
}
