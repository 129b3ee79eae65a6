//! Date range picker with start and end date inputs.
//!
//! Only the month and day of the picked dates reach the query; leaving the
//! end empty searches a single day, leaving both empty is a validation error.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date range picker for the ranking search.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    let on_clear = move |_| {
        state.start_date.set(String::new());
        state.end_date.set(String::new());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
            button {
                r#type: "button",
                onclick: on_clear,
                "Clear"
            }
        }
    }
}
