//! Sortable table of resorts with their peak snowfall periods.

use crate::components::{SectionHeader, SortHeader};
use crate::controller::PEAK_SECTION_ID;
use crate::state::AppState;
use dioxus::prelude::*;
use snowfinder_core::rows::PeakColumn;
use snowfinder_core::sort::{ColumnKind, TableColumn};

const CELL: &str = "padding: 8px 12px; border-top: 1px solid #dee2e6; vertical-align: top;";
const NUM_CELL: &str =
    "padding: 8px 12px; border-top: 1px solid #dee2e6; vertical-align: top; text-align: right;";

fn confidence_color(class: &str) -> &'static str {
    match class {
        "confidence-high" => "#2E7D32",
        "confidence-medium" => "#F57C00",
        "confidence-low" => "#C62828",
        _ => "#666",
    }
}

/// Peak-info results, one row per resort with at least one peak period.
#[component]
pub fn PeakTable() -> Element {
    let mut state = use_context::<AppState>();
    let table = state.peaks.read();
    if !table.is_visible() {
        return rsx! {};
    }
    let title = (state.peak_title)();
    let sort = *table.sort_state();

    rsx! {
        div {
            id: PEAK_SECTION_ID,
            style: "margin: 20px 0;",
            SectionHeader { title }
            div {
                style: "overflow-x: auto;",
                table {
                    id: "peakResultsTable",
                    style: "width: 100%; border-collapse: collapse; background: white; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
                    thead {
                        tr {
                            style: "background: #00838F; color: white;",
                            for column in PeakColumn::all().iter().copied() {
                                {
                                    let id = column.id();
                                    rsx! {
                                        SortHeader {
                                            key: "{id}",
                                            column: id,
                                            label: column.label(),
                                            indicator: sort.indicator(column),
                                            numeric: column.kind() == ColumnKind::Numeric && column != PeakColumn::Peaks,
                                            onactivate: move |_| {
                                                state.peaks.write().activate(column);
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        id: "peakResultsBody",
                        for row in table.rows().iter() {
                            {
                                let d = &row.display;
                                rsx! {
                                    tr {
                                        key: "{d.resort_id}",
                                        td { style: CELL, div { class: "resort-name", style: "font-weight: 600;", "{d.name}" } }
                                        td { style: CELL, "{d.prefecture}" }
                                        td { style: NUM_CELL, "{d.top}" }
                                        td { style: NUM_CELL, "{d.base}" }
                                        td { style: NUM_CELL, "{d.vertical}" }
                                        td { style: NUM_CELL, "{d.courses}" }
                                        td {
                                            class: "peaks-cell",
                                            style: CELL,
                                            for peak in d.peaks.iter() {
                                                {
                                                    let color = confidence_color(&peak.confidence_class);
                                                    rsx! {
                                                        div {
                                                            class: "peak-entry",
                                                            style: "display: flex; gap: 8px; font-size: 13px; padding: 2px 0;",
                                                            span { class: "peak-rank", style: "font-weight: 600;", "{peak.rank}" }
                                                            span { class: "peak-dates", "{peak.dates}" }
                                                            span { class: "peak-snowfall", "{peak.snowfall}" }
                                                            span {
                                                                class: "peak-confidence {peak.confidence_class}",
                                                                style: "color: {color};",
                                                                "{peak.confidence}"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
