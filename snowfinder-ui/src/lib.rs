//! Shared Dioxus components and browser plumbing for the SnowFinder page.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals, one table controller per table
//! - `fetch`: `window.fetch` wrappers for the ranking service endpoints
//! - `controller`: the async submit actions wiring fetch, mappers and tables together
//! - `js_bridge`: small `js_sys::eval()` helpers (scrolling results into view)
//! - `components`: Reusable RSX components (form, selectors, sortable tables, ...)

pub mod components;
pub mod controller;
pub mod fetch;
pub mod js_bridge;
pub mod state;
