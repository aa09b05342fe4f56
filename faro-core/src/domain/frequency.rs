// faro-core/src/domain/frequency.rs
//
// Update-frequency model. Catalogs declare how often a dataset should be
// refreshed with an ISO-8601 repeating-interval code ("R/P1M", "R/P0.5Y")
// or the literal token "eventual" for unscheduled publications.

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Literal accrualPeriodicity token for irregular publications.
pub const EVENTUAL: &str = "eventual";

const MONTH_DAYS: f64 = 30.0;
const YEAR_DAYS: f64 = 365.0;

fn interval_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Compiled once; the pattern is a literal so compilation cannot fail.
    PATTERN.get_or_init(|| {
        Regex::new(r"^R/P(\d+(?:\.\d+)?)([DMY])$").unwrap_or_else(|e| {
            unreachable!("invalid builtin frequency pattern: {e}");
        })
    })
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized accrualPeriodicity code '{code}'")]
pub struct FrequencyParseError {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyUnit {
    Day,
    Month,
    Year,
}

impl FrequencyUnit {
    pub fn days(self) -> f64 {
        match self {
            FrequencyUnit::Day => 1.0,
            FrequencyUnit::Month => MONTH_DAYS,
            FrequencyUnit::Year => YEAR_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frequency {
    /// Irregular publication: never classified as stale.
    Eventual,
    Repeating { amount: f64, unit: FrequencyUnit },
}

impl Frequency {
    pub fn parse(code: &str) -> Result<Self, FrequencyParseError> {
        if code == EVENTUAL {
            return Ok(Frequency::Eventual);
        }

        let parse_error = || FrequencyParseError {
            code: code.to_string(),
        };

        let captures = interval_pattern().captures(code).ok_or_else(parse_error)?;
        let amount: f64 = captures[1].parse().map_err(|_| parse_error())?;
        if amount <= 0.0 {
            return Err(parse_error());
        }
        let unit = match &captures[2] {
            "D" => FrequencyUnit::Day,
            "M" => FrequencyUnit::Month,
            _ => FrequencyUnit::Year,
        };

        Ok(Frequency::Repeating { amount, unit })
    }

    /// Window in days a dataset may go without update before counting as
    /// stale. `None` for eventual frequencies (no window applies).
    pub fn tolerance_days(&self) -> Option<f64> {
        match self {
            Frequency::Eventual => None,
            Frequency::Repeating { amount, unit } => Some(amount * unit.days()),
        }
    }
}

impl FromStr for Frequency {
    type Err = FrequencyParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Frequency::parse(code)
    }
}
