//! Ranking search form: dates, prefecture filter and result limit.

use crate::components::DateRangePicker;
use crate::controller::submit_search;
use crate::state::AppState;
use dioxus::prelude::*;
use snowfinder_core::config::{ALL, LIMIT_CHOICES, PREFECTURES};

/// Search form for the snowiest-resort ranking.
#[component]
pub fn SearchForm() -> Element {
    let mut state = use_context::<AppState>();
    let prefecture = (state.prefecture)();
    let limit = (state.limit)();

    let on_prefecture_change = move |evt: Event<FormData>| {
        state.prefecture.set(evt.value());
    };

    let on_limit_change = move |evt: Event<FormData>| {
        state.limit.set(evt.value());
    };

    let on_submit = move |_| {
        spawn(submit_search(state));
    };

    rsx! {
        div {
            id: "searchForm",
            style: "margin: 8px 0; padding: 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            DateRangePicker {}
            div {
                style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold;",
                    "Prefecture: "
                    select {
                        onchange: on_prefecture_change,
                        option {
                            value: ALL,
                            selected: prefecture == ALL,
                            "All of Japan"
                        }
                        for (value, label) in PREFECTURES.iter() {
                            option {
                                value: "{value}",
                                selected: prefecture == *value,
                                "{label}"
                            }
                        }
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "Show: "
                    select {
                        onchange: on_limit_change,
                        for choice in LIMIT_CHOICES.iter() {
                            option {
                                value: "{choice}",
                                selected: limit == choice.to_string(),
                                "{choice}"
                            }
                        }
                    }
                    " resorts"
                }
                button {
                    r#type: "button",
                    onclick: on_submit,
                    "Find Snowiest Resorts"
                }
            }
        }
    }
}
