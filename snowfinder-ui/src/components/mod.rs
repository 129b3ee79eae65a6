//! Reusable Dioxus RSX components for the SnowFinder page.

mod date_range_picker;
mod error_display;
mod loading_spinner;
mod peak_table;
mod ranking_table;
mod resort_selector;
mod search_form;
mod section_header;
mod sort_header;

pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use peak_table::PeakTable;
pub use ranking_table::RankingTable;
pub use resort_selector::ResortSelector;
pub use search_form::SearchForm;
pub use section_header::SectionHeader;
pub use sort_header::SortHeader;
