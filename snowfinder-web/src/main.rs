//! SnowFinder page
//!
//! Lets the user rank resorts by average snowfall over a picked date range
//! (optionally within one prefecture), and browse each resort's historical
//! peak snowfall periods. Both result tables sort by any header, toggling
//! direction on repeated clicks.
//!
//! Data flow:
//! 1. On mount, the resort selector is filled from `/api/resorts-with-peaks`.
//! 2. "Find Snowiest Resorts" builds a query from the picker and the form,
//!    fetches `/api/search` and loads the ranking table controller.
//! 3. "Show Peak Periods" fetches `/api/peak-info` and loads the peak table
//!    controller.
//! 4. Header clicks re-sort the rows held by that table's controller.

use dioxus::prelude::*;
use snowfinder_ui::components::{
    ErrorDisplay, LoadingSpinner, PeakTable, RankingTable, ResortSelector, SearchForm,
    SectionHeader,
};
use snowfinder_ui::controller::load_resort_list;
use snowfinder_ui::state::AppState;

/// Styles for the classes the tables emit (podium ranks, sorted headers).
const PAGE_CSS: &str = "
    td.rank-1 { background: #FFD54F; font-weight: 700; }
    td.rank-2 { background: #E0E0E0; font-weight: 700; }
    td.rank-3 { background: #FFCC80; font-weight: 700; }
    th.sortable:hover { opacity: 0.85; }
    th.sort-asc, th.sort-desc { text-decoration: underline; }
";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("snowfinder-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Fill the resort selector once on mount
    use_effect(move || {
        spawn(load_resort_list(state));
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1100px; margin: 0 auto;",

            style { "{PAGE_CSS}" }

            SectionHeader {
                title: "SnowFinder".to_string(),
                subtitle: "Find the snowiest ski resorts in Japan for any dates of the season".to_string(),
            }

            SearchForm {}

            div {
                style: "margin: 16px 0 8px 0;",
                SectionHeader {
                    title: "Peak Snowfall Periods".to_string(),
                    subtitle: "Historical windows of unusually heavy snowfall, best first".to_string(),
                }
                ResortSelector {}
            }

            if (state.loading)() {
                LoadingSpinner {}
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            RankingTable {}
            PeakTable {}

            TableLegend {}
        }
    }
}

/// Legend explaining the podium highlighting and confidence colors.
#[component]
fn TableLegend() -> Element {
    let state = use_context::<AppState>();
    let ranking_visible = state.ranking.read().is_visible();
    let peaks_visible = state.peaks.read().is_visible();
    if !ranking_visible && !peaks_visible {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 16px; flex-wrap: wrap;",
            if ranking_visible {
                div {
                    "Ranks 1-3 are highlighted. Missing values are shown as \"-\" and sort as -1."
                }
            }
            if peaks_visible {
                div {
                    style: "display: flex; gap: 8px;",
                    "Confidence: "
                    span { style: "color: #2E7D32;", "high" }
                    span { style: "color: #F57C00;", "medium" }
                    span { style: "color: #C62828;", "low" }
                }
            }
        }
    }
}
