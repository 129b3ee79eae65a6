//! Core logic for the SnowFinder resort tables.
//!
//! This crate is free of any rendering concerns and compiles both to WASM
//! (for the Dioxus frontend) and natively (for the CLI). It provides:
//! - `dates` / `query`: turning a picked date interval and filter inputs into a
//!   canonical `SearchQuery`
//! - `models`: the JSON shapes returned by the ranking and peak-info endpoints
//! - `rows` / `mapper`: converting responses into `SortableRow`s that carry
//!   display strings plus typed sort keys
//! - `sort`: the direction-toggling, type-aware sort engine shared by both tables
//! - `table`: per-table controller state (rows, sort state, visibility)
//! - `api`: endpoint paths and query parameters, plus a native client behind
//!   the `api` feature

pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod mapper;
pub mod models;
pub mod query;
pub mod rows;
pub mod sort;
pub mod table;

#[cfg(feature = "api")]
pub mod client;

pub use error::{ControllerError, Result};
