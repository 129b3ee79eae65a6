//! Clickable table header cell with a sort indicator.

use dioxus::prelude::*;
use snowfinder_core::sort::SortDirection;

#[derive(Props, Clone, PartialEq)]
pub struct SortHeaderProps {
    /// Column id, exposed as `data-column`
    pub column: &'static str,
    pub label: &'static str,
    /// Direction when this column is the active one, `None` otherwise
    pub indicator: Option<SortDirection>,
    #[props(default = false)]
    pub numeric: bool,
    pub onactivate: EventHandler<()>,
}

/// A `th` that reports clicks and shows ▲ / ▼ while it is the sorted column.
#[component]
pub fn SortHeader(props: SortHeaderProps) -> Element {
    let class = match props.indicator {
        Some(direction) => format!("sortable {}", direction.class()),
        None => "sortable".to_string(),
    };
    let arrow = props.indicator.map(|d| d.arrow()).unwrap_or("");
    let align = if props.numeric { "right" } else { "left" };
    let onactivate = props.onactivate;

    rsx! {
        th {
            class: "{class}",
            "data-column": props.column,
            style: "padding: 10px 12px; text-align: {align}; font-weight: 600; cursor: pointer; user-select: none; white-space: nowrap;",
            onclick: move |_| onactivate.call(()),
            "{props.label}"
            span { class: "sort-arrow", "{arrow}" }
        }
    }
}
