//! Controller defaults shared by the browser app and the CLI.

use crate::dates::DateInterval;
use chrono::NaiveDate;

/// Result count used when the limit field is empty or not a positive integer.
pub const DEFAULT_LIMIT: u32 = 10;

/// Limits offered by the search form.
pub const LIMIT_CHOICES: [u32; 4] = [10, 20, 50, 100];

/// The year the picker is pinned to. The year itself is never sent.
pub const SEASON_YEAR: i32 = 2025;

/// Sentinel filter value meaning "no region filter" / "every resort".
pub const ALL: &str = "all";

/// Prefecture filter values understood by the search endpoint, as
/// `(value, label)` pairs.
pub const PREFECTURES: [(&str, &str); 12] = [
    ("hokkaido", "Hokkaido"),
    ("aomori", "Aomori"),
    ("iwate", "Iwate"),
    ("akita", "Akita"),
    ("yamagata", "Yamagata"),
    ("fukushima", "Fukushima"),
    ("niigata", "Niigata"),
    ("nagano", "Nagano"),
    ("gunma", "Gunma"),
    ("toyama", "Toyama"),
    ("gifu", "Gifu"),
    ("hyogo", "Hyogo"),
];

/// Runtime settings for a controller instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Prefix for every endpoint path; empty means same origin.
    pub api_base: String,
    /// Limit used when the form value is unusable.
    pub default_limit: u32,
    /// Interval the picker opens on.
    pub default_interval: DateInterval,
}

impl ControllerConfig {
    /// Configuration pointing at another host (used by the CLI).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        ControllerConfig {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..ControllerConfig::default()
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        // Jan 15 - Jan 20 always exists, so the fallback is never taken.
        let default_interval = match (
            NaiveDate::from_ymd_opt(SEASON_YEAR, 1, 15),
            NaiveDate::from_ymd_opt(SEASON_YEAR, 1, 20),
        ) {
            (Some(start), Some(end)) => DateInterval::new(start, end),
            _ => DateInterval::single(NaiveDate::default()),
        };
        ControllerConfig {
            api_base: String::new(),
            default_limit: DEFAULT_LIMIT,
            default_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let config = ControllerConfig::default();
        assert_eq!(config.default_interval.display_text(), "Jan 15 - Jan 20");
        assert_eq!(config.default_limit, 10);
        assert!(config.api_base.is_empty());
    }

    #[test]
    fn test_with_api_base_trims_trailing_slash() {
        let config = ControllerConfig::with_api_base("http://localhost:8080/");
        assert_eq!(config.api_base, "http://localhost:8080");
    }
}
