// src/config.rs
use crate::application::checks::VerificationPlan;
use crate::domain::calendar::{CalendarDate, WeekdayIndex};
use crate::infrastructure::console::OutputFormat;
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ProbeConfig {
    plan: VerificationPlan,
    strict: bool,
    output_format: OutputFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{key} has invalid value `{raw}`"))),
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl ProbeConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let standard = VerificationPlan::standard()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let delay_us =
            parse_var::<u64>(&lookup, "RTC_PROBE_DELAY_US")?.unwrap_or(standard.delay_us);
        if delay_us == 0 {
            return Err(ConfigError::Invalid(
                "RTC_PROBE_DELAY_US must be greater than zero".into(),
            ));
        }

        let year = parse_var::<i32>(&lookup, "RTC_PROBE_YEAR")?
            .unwrap_or_else(|| standard.date.year().get());
        let month = parse_var::<u32>(&lookup, "RTC_PROBE_MONTH")?
            .unwrap_or_else(|| standard.date.month().get());
        let day = parse_var::<u32>(&lookup, "RTC_PROBE_DAY")?
            .unwrap_or_else(|| standard.date.day().get());
        let date = CalendarDate::from_parts(year, month, day)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        let is_standard_date = date == standard.date;

        // Known answers only apply to the standard date.
        let expected_days = match parse_var::<u32>(&lookup, "RTC_PROBE_EXPECT_DAYS")? {
            Some(days) => Some(days),
            None if is_standard_date => standard.expected_days,
            None => None,
        };
        let expected_weekday = match parse_var::<u8>(&lookup, "RTC_PROBE_EXPECT_WEEKDAY")? {
            Some(raw) => Some(
                WeekdayIndex::new(raw).map_err(|err| ConfigError::Invalid(err.to_string()))?,
            ),
            None if is_standard_date => standard.expected_weekday,
            None => None,
        };

        let strict = lookup("RTC_PROBE_STRICT").is_some_and(|v| parse_flag(v.trim()));

        let output_format = match lookup("RTC_PROBE_OUTPUT") {
            Some(raw) => raw.parse::<OutputFormat>().map_err(ConfigError::Invalid)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            plan: VerificationPlan {
                delay_us,
                date,
                expected_days,
                expected_weekday,
            },
            strict,
            output_format,
        })
    }

    pub fn plan(&self) -> &VerificationPlan {
        &self.plan
    }

    /// Whether a failed check should turn into a failing exit status.
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}
