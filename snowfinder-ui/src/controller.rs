//! Async actions behind the page's buttons.
//!
//! Each action: clear the previous error → (validate) → show loading → fetch →
//! map → hand the rows to that table's controller → reveal and scroll, or show
//! exactly one error. Nothing here cancels an earlier in-flight request; when
//! two overlap, whichever completes last decides what is shown.

use crate::fetch;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use snowfinder_core::error::ControllerError;
use snowfinder_core::query::{build_search_query, describe_search, ResortScope};
use snowfinder_core::table::{peak_table_from, ranking_rows_from};

/// DOM id of the ranking results section.
pub const RANKING_SECTION_ID: &str = "ranking-results";

/// DOM id of the peak-info results section.
pub const PEAK_SECTION_ID: &str = "peak-results";

fn show_error(mut state: AppState, error: ControllerError) {
    log::warn!("Showing error: {}", error);
    state.error_msg.set(Some(error.to_string()));
}

/// Run a ranking search from the current form state.
pub async fn submit_search(mut state: AppState) {
    state.error_msg.set(None);

    let config = state.config.read().clone();
    let interval = state.picked_interval();
    let query = match build_search_query(interval.as_ref(), &state.search_form(), &config) {
        Ok(query) => query,
        Err(e) => {
            show_error(state, e);
            return;
        }
    };

    state.loading.set(true);
    state.ranking.write().begin_request();

    let outcome = fetch::search(&config.api_base, &query).await;
    state.loading.set(false);

    let settled = state.ranking.write().finish(ranking_rows_from(outcome));
    match settled {
        Ok(()) => {
            if let Some(interval) = interval {
                state
                    .results_info
                    .set(describe_search(&interval, &query.region));
            }
            js_bridge::scroll_into_view(RANKING_SECTION_ID);
        }
        Err(e) => show_error(state, e),
    }
}

/// Fetch peak periods for the selected resort (or all resorts).
pub async fn submit_peak_info(mut state: AppState) {
    state.error_msg.set(None);

    let config = state.config.read().clone();
    let scope = ResortScope::parse(&(state.selected_resort)());

    state.loading.set(true);
    state.peaks.write().begin_request();
    // A peak query replaces whatever ranking was on screen.
    state.ranking.write().hide();

    let outcome = fetch::peak_info(&config.api_base, &scope).await;
    state.loading.set(false);

    match peak_table_from(outcome) {
        Ok(table) => {
            state.peak_title.set(table.title);
            let settled = state.peaks.write().finish(Ok(table.rows));
            if settled.is_ok() {
                js_bridge::scroll_into_view(PEAK_SECTION_ID);
            }
        }
        Err(e) => {
            let settled = state.peaks.write().finish(Err(e));
            if let Err(e) = settled {
                show_error(state, e);
            }
        }
    }
}

/// Populate the resort selector. Failures are logged and otherwise ignored.
pub async fn load_resort_list(mut state: AppState) {
    let api_base = state.config.read().api_base.clone();
    match fetch::resorts_with_peaks(&api_base).await {
        Ok(resorts) => {
            log::info!("Loaded {} resorts with peak data", resorts.len());
            state.resorts.set(resorts);
        }
        Err(e) => {
            log::error!("Error loading resorts: {}", e);
        }
    }
}
