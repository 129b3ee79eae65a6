//! Resort selector and trigger for the peak-info view.

use crate::controller::submit_peak_info;
use crate::state::AppState;
use dioxus::prelude::*;
use snowfinder_core::config::ALL;

/// Resort dropdown selector.
/// Reads available resorts from AppState and updates selected_resort on change.
#[component]
pub fn ResortSelector() -> Element {
    let mut state = use_context::<AppState>();
    let resorts = state.resorts.read().clone();
    let selected = (state.selected_resort)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_resort.set(evt.value());
    };

    let on_submit = move |_| {
        spawn(submit_peak_info(state));
    };

    rsx! {
        div {
            id: "peakInfoForm",
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "resortSelect",
                style: "font-weight: bold;",
                "Resort: "
            }
            select {
                id: "resortSelect",
                onchange: on_change,
                option {
                    value: ALL,
                    selected: selected == ALL,
                    "All resorts"
                }
                for resort in resorts.iter() {
                    option {
                        key: "{resort.id}",
                        value: "{resort.id}",
                        selected: resort.id == selected,
                        "{resort.name}"
                    }
                }
            }
            button {
                r#type: "button",
                onclick: on_submit,
                "Show Peak Periods"
            }
        }
    }
}
