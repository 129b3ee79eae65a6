//! Sortable table of the snowiest resorts.

use crate::components::{SectionHeader, SortHeader};
use crate::controller::RANKING_SECTION_ID;
use crate::state::AppState;
use dioxus::prelude::*;
use snowfinder_core::rows::RankingColumn;
use snowfinder_core::sort::{ColumnKind, TableColumn};

const CELL: &str = "padding: 8px 12px; border-top: 1px solid #dee2e6;";
const NUM_CELL: &str = "padding: 8px 12px; border-top: 1px solid #dee2e6; text-align: right;";

/// Ranking results. Hidden until the ranking controller holds rows.
///
/// Header clicks go straight to the controller, which owns the sort state
/// and re-sorts its rows; the body below is only a projection of them.
#[component]
pub fn RankingTable() -> Element {
    let mut state = use_context::<AppState>();
    let table = state.ranking.read();
    if !table.is_visible() {
        return rsx! {};
    }
    let info = (state.results_info)();
    let sort = *table.sort_state();

    rsx! {
        div {
            id: RANKING_SECTION_ID,
            style: "margin: 20px 0;",
            SectionHeader {
                title: "Snowiest Resorts".to_string(),
                subtitle: info,
            }
            div {
                style: "overflow-x: auto;",
                table {
                    id: "resultsTable",
                    style: "width: 100%; border-collapse: collapse; background: white; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
                    thead {
                        tr {
                            style: "background: #1565C0; color: white;",
                            for column in RankingColumn::all().iter().copied() {
                                {
                                    let id = column.id();
                                    rsx! {
                                        SortHeader {
                                            key: "{id}",
                                            column: id,
                                            label: column.label(),
                                            indicator: sort.indicator(column),
                                            numeric: column.kind() == ColumnKind::Numeric,
                                            onactivate: move |_| {
                                                state.ranking.write().activate(column);
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        id: "resultsBody",
                        for (idx, row) in table.rows().iter().enumerate() {
                            {
                                let d = &row.display;
                                let rank_class = d.rank_class.clone().unwrap_or_default();
                                rsx! {
                                    tr {
                                        key: "{d.rank}-{d.name}",
                                        style: if idx % 2 == 0 { "background: #f8f9fa;" } else { "background: white;" },
                                        td { class: "{rank_class}", style: NUM_CELL, "{d.rank}" }
                                        td { style: CELL, "{d.name}" }
                                        td { style: CELL, "{d.prefecture}" }
                                        td { style: NUM_CELL, strong { "{d.snowfall}" } }
                                        td { style: NUM_CELL, "{d.years}" }
                                        td { style: NUM_CELL, "{d.top}" }
                                        td { style: NUM_CELL, "{d.base}" }
                                        td { style: NUM_CELL, "{d.vertical}" }
                                        td { style: NUM_CELL, "{d.courses}" }
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
