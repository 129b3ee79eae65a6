//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Each table owns its own controller signal, so sort state is never shared.

use dioxus::prelude::*;
use snowfinder_core::config::{ControllerConfig, ALL};
use snowfinder_core::dates::{format_input_date, parse_input_date, DateInterval};
use snowfinder_core::models::ResortOption;
use snowfinder_core::query::SearchForm;
use snowfinder_core::table::{PeakInfoTable, RankingTable};

/// Shared application state for the SnowFinder page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Endpoint base and form defaults
    pub config: Signal<ControllerConfig>,
    /// Whether a request is in flight
    pub loading: Signal<bool>,
    /// The single error banner; `None` hides it
    pub error_msg: Signal<Option<String>>,
    /// Picker start, as an `<input type="date">` value
    pub start_date: Signal<String>,
    /// Picker end, as an `<input type="date">` value
    pub end_date: Signal<String>,
    /// Prefecture filter value ("all" for no filter)
    pub prefecture: Signal<String>,
    /// Limit field, as typed
    pub limit: Signal<String>,
    /// Ranking table controller
    pub ranking: Signal<RankingTable>,
    /// Info line above the ranking table
    pub results_info: Signal<String>,
    /// Resort selector entries, sorted by name
    pub resorts: Signal<Vec<ResortOption>>,
    /// Currently selected resort id ("all" for every resort)
    pub selected_resort: Signal<String>,
    /// Peak-info table controller
    pub peaks: Signal<PeakInfoTable>,
    /// Title above the peak-info table
    pub peak_title: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        let interval = config.default_interval;
        let limit = config.default_limit.to_string();
        Self {
            config: Signal::new(config),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            start_date: Signal::new(format_input_date(&interval.start())),
            end_date: Signal::new(format_input_date(&interval.end())),
            prefecture: Signal::new(ALL.to_string()),
            limit: Signal::new(limit),
            ranking: Signal::new(RankingTable::new()),
            results_info: Signal::new(String::new()),
            resorts: Signal::new(Vec::new()),
            selected_resort: Signal::new(ALL.to_string()),
            peaks: Signal::new(PeakInfoTable::new()),
            peak_title: Signal::new(String::new()),
        }
    }

    /// The interval currently picked; `None` when both inputs are empty.
    pub fn picked_interval(&self) -> Option<DateInterval> {
        let picked: Vec<_> = [(self.start_date)(), (self.end_date)()]
            .iter()
            .filter_map(|value| parse_input_date(value))
            .collect();
        DateInterval::from_selection(&picked)
    }

    /// Snapshot of the search form fields.
    pub fn search_form(&self) -> SearchForm {
        SearchForm {
            prefecture: (self.prefecture)(),
            limit: (self.limit)(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
