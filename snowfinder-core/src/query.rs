//! Query builder: picked dates plus form fields become a canonical query.

use crate::config::{ControllerConfig, ALL};
use crate::dates::{DateInterval, MonthDay};
use crate::error::{ControllerError, Result};
use crate::rows::capitalize_first;
use log::warn;

/// Region filter for the ranking search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    /// No filter; serialized as the `all` sentinel.
    All,
    /// A single prefecture id, lower-cased.
    Prefecture(String),
}

impl RegionFilter {
    /// Empty input and `all` (any case) both mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim().to_lowercase();
        if value.is_empty() || value == ALL {
            RegionFilter::All
        } else {
            RegionFilter::Prefecture(value)
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            RegionFilter::All => ALL,
            RegionFilter::Prefecture(id) => id,
        }
    }

    /// Human label used in the results info line.
    pub fn display_text(&self) -> String {
        match self {
            RegionFilter::All => "All of Japan".to_string(),
            RegionFilter::Prefecture(id) => capitalize_first(id),
        }
    }
}

/// Raw values of the search form, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub prefecture: String,
    pub limit: String,
}

/// Canonical parameters for `GET /api/search`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub start_date: MonthDay,
    pub end_date: MonthDay,
    pub region: RegionFilter,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(start_date: MonthDay, end_date: MonthDay, region: RegionFilter, limit: u32) -> Self {
        SearchQuery {
            start_date,
            end_date,
            region,
            limit,
        }
    }

    /// Parameters in the order the endpoint documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", self.start_date.to_string()),
            ("end_date", self.end_date.to_string()),
            ("prefecture", self.region.as_param().to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Scope of a peak-info request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResortScope {
    All,
    Resort(String),
}

impl ResortScope {
    /// Empty selection and `all` both mean every resort.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            ResortScope::All
        } else {
            ResortScope::Resort(value.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            ResortScope::All => ALL,
            ResortScope::Resort(id) => id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ResortScope::All)
    }
}

/// Parse the limit field; anything but a positive integer yields `default`.
pub fn parse_limit(value: &str, default: u32) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => limit,
        _ => default,
    }
}

/// Build a search query from the picked interval and the form.
///
/// Fails with a validation error when no interval was picked; in that case
/// the caller must not touch the network.
pub fn build_search_query(
    interval: Option<&DateInterval>,
    form: &SearchForm,
    config: &ControllerConfig,
) -> Result<SearchQuery> {
    let interval = interval.ok_or_else(ControllerError::no_dates)?;
    if interval.crosses_year_boundary() {
        warn!(
            "Date interval {} wraps the new year; sending {} to {} without a year",
            interval.display_text(),
            MonthDay::from_date(&interval.start()),
            MonthDay::from_date(&interval.end())
        );
    }
    Ok(SearchQuery::new(
        MonthDay::from_date(&interval.start()),
        MonthDay::from_date(&interval.end()),
        RegionFilter::parse(&form.prefecture),
        parse_limit(&form.limit, config.default_limit),
    ))
}

/// Info line shown above the ranking table, e.g. "Jan 15 - Jan 20 · Nagano · 6 days".
pub fn describe_search(interval: &DateInterval, region: &RegionFilter) -> String {
    let days = interval.day_count();
    format!(
        "{} · {} · {} day{}",
        interval.display_text(),
        region.display_text(),
        days,
        if days == 1 { "" } else { "s" }
    )
}
