//! Per-table controller state.
//!
//! A `TableController` exclusively owns its rows and its sort state; the
//! ranking and peak tables each get their own instance. Rendering layers only
//! read from it and forward header activations to `activate`.

use crate::error::{ControllerError, Result};
use crate::mapper::{map_peak_response, map_ranking_rows, PeakTable};
use crate::models::{PeakInfoResponse, RankingRecord};
use crate::rows::{PeakColumn, PeakDisplay, RankingColumn, RankingDisplay, RankingRow};
use crate::sort::{sort_rows, SortDirection, SortState, SortableRow, TableColumn};
use log::info;

/// Visibility of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// Nothing shown: initial state, or after a failed request.
    Hidden,
    /// A request for this table is in flight.
    Loading,
    /// Rows are shown.
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableController<C: TableColumn, D> {
    rows: Vec<SortableRow<C, D>>,
    sort: SortState<C>,
    status: TableStatus,
}

pub type RankingTable = TableController<RankingColumn, RankingDisplay>;
pub type PeakInfoTable = TableController<PeakColumn, PeakDisplay>;

impl<C: TableColumn, D> Default for TableController<C, D> {
    fn default() -> Self {
        TableController {
            rows: Vec::new(),
            sort: SortState::default(),
            status: TableStatus::Hidden,
        }
    }
}

impl<C: TableColumn, D> TableController<C, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request was submitted: hide the table until it settles.
    pub fn begin_request(&mut self) {
        self.status = TableStatus::Loading;
    }

    /// Hide without touching rows (another view took over the page).
    pub fn hide(&mut self) {
        self.status = TableStatus::Hidden;
    }

    /// Settle the pending request.
    ///
    /// New rows replace the old ones in arrival order and the sort state is
    /// cleared. On error the table stays hidden and the error is handed back
    /// for the page's error banner.
    pub fn finish(&mut self, outcome: Result<Vec<SortableRow<C, D>>>) -> Result<()> {
        match outcome {
            Ok(rows) => {
                self.rows = rows;
                self.sort.reset();
                self.status = TableStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.status = TableStatus::Hidden;
                Err(e)
            }
        }
    }

    /// Header activation: toggle direction and re-sort every row.
    pub fn activate(&mut self, column: C) -> SortDirection {
        let direction = self.sort.activate(column);
        sort_rows(&mut self.rows, column, direction);
        info!(
            "Sorted {} rows by {} ({:?})",
            self.rows.len(),
            column.id(),
            direction
        );
        direction
    }

    pub fn rows(&self) -> &[SortableRow<C, D>] {
        &self.rows
    }

    pub fn sort_state(&self) -> &SortState<C> {
        &self.sort
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn is_visible(&self) -> bool {
        self.status == TableStatus::Ready
    }
}

/// Turn a search outcome into ranking rows; an empty list is a "no results" error.
pub fn ranking_rows_from(outcome: Result<Vec<RankingRecord>>) -> Result<Vec<RankingRow>> {
    let records = outcome?;
    if records.is_empty() {
        return Err(ControllerError::no_results());
    }
    Ok(map_ranking_rows(&records))
}

/// Turn a peak-info outcome into a titled table; no rows left is a "no peaks" error.
pub fn peak_table_from(outcome: Result<PeakInfoResponse>) -> Result<PeakTable> {
    let table = map_peak_response(outcome?);
    if table.rows.is_empty() {
        return Err(ControllerError::no_peaks());
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConfidenceLevel, PeakPeriod, ResortPeaksRecord, ResortSummary};

    fn record(rank: u32, name: &str, snowfall: Option<f64>) -> RankingRecord {
        RankingRecord {
            rank,
            name: name.to_string(),
            prefecture: "niigata".to_string(),
            avg_snowfall: snowfall,
            years_with_data: None,
            top_elevation: None,
            base_elevation: None,
            vertical_drop: None,
            num_courses: None,
            longest_course_km: None,
        }
    }

    fn names(table: &RankingTable) -> Vec<&str> {
        table.rows().iter().map(|r| r.display.name.as_str()).collect()
    }

    #[test]
    fn test_request_lifecycle() {
        let mut table = RankingTable::new();
        assert_eq!(table.status(), TableStatus::Hidden);

        table.begin_request();
        assert_eq!(table.status(), TableStatus::Loading);
        assert!(!table.is_visible());

        let rows = ranking_rows_from(Ok(vec![record(1, "Myoko", Some(40.0))]));
        table.finish(rows).unwrap();
        assert!(table.is_visible());
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_resubmit_while_loading_last_finish_wins() {
        let mut table = RankingTable::new();
        table.begin_request();
        table.begin_request();
        assert_eq!(table.status(), TableStatus::Loading);

        table
            .finish(ranking_rows_from(Ok(vec![record(1, "Myoko", None)])))
            .unwrap();
        table
            .finish(ranking_rows_from(Ok(vec![
                record(1, "Hakuba", None),
                record(2, "Zao", None),
            ])))
            .unwrap();
        assert!(table.is_visible());
        assert_eq!(names(&table), vec!["Hakuba", "Zao"]);
    }

    #[test]
    fn test_empty_result_hides_table() {
        let mut table = RankingTable::new();
        table.begin_request();
        let err = table.finish(ranking_rows_from(Ok(Vec::new()))).unwrap_err();
        assert_eq!(err, ControllerError::no_results());
        assert_eq!(table.status(), TableStatus::Hidden);
    }

    #[test]
    fn test_http_error_hides_previous_table() {
        let mut table = RankingTable::new();
        table
            .finish(ranking_rows_from(Ok(vec![record(1, "Myoko", None)])))
            .unwrap();
        table.begin_request();
        let err = table
            .finish(ranking_rows_from(Err(ControllerError::Http { status: 500 })))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert!(!table.is_visible());
    }

    #[test]
    fn test_activate_sorts_and_toggles() {
        let mut table = RankingTable::new();
        table
            .finish(ranking_rows_from(Ok(vec![
                record(1, "Niseko", Some(50.0)),
                record(2, "alps", None),
                record(3, "Hakuba", Some(20.0)),
            ])))
            .unwrap();
        assert_eq!(names(&table), vec!["Niseko", "alps", "Hakuba"]);

        assert_eq!(table.activate(RankingColumn::Name), SortDirection::Ascending);
        assert_eq!(names(&table), vec!["alps", "Hakuba", "Niseko"]);
        assert_eq!(table.activate(RankingColumn::Name), SortDirection::Descending);
        assert_eq!(names(&table), vec!["Niseko", "Hakuba", "alps"]);

        assert_eq!(table.activate(RankingColumn::Snowfall), SortDirection::Ascending);
        assert_eq!(names(&table), vec!["alps", "Hakuba", "Niseko"]);
        assert_eq!(
            table.sort_state().indicator(RankingColumn::Snowfall),
            Some(SortDirection::Ascending)
        );
        assert_eq!(table.sort_state().indicator(RankingColumn::Name), None);
    }

    #[test]
    fn test_new_data_resets_sort_state() {
        let mut table = RankingTable::new();
        table
            .finish(ranking_rows_from(Ok(vec![record(1, "B", None), record(2, "A", None)])))
            .unwrap();
        table.activate(RankingColumn::Name);
        table.begin_request();
        table
            .finish(ranking_rows_from(Ok(vec![record(1, "D", None), record(2, "C", None)])))
            .unwrap();
        assert_eq!(table.sort_state().current(), None);
        assert_eq!(names(&table), vec!["D", "C"]);
        assert_eq!(table.activate(RankingColumn::Name), SortDirection::Ascending);
    }

    #[test]
    fn test_tables_do_not_share_sort_state() {
        let mut ranking = RankingTable::new();
        let peaks = PeakInfoTable::new();
        ranking.activate(RankingColumn::Name);
        assert_eq!(peaks.sort_state().current(), None);
    }

    #[test]
    fn test_peak_table_without_peaks_is_empty_result() {
        let response = PeakInfoResponse::Single(ResortPeaksRecord {
            resort: ResortSummary {
                id: "r".into(),
                name: "Rusutsu".into(),
                prefecture: "hokkaido".into(),
                top_elevation_m: None,
                base_elevation_m: None,
                vertical_m: None,
                num_courses: None,
            },
            peaks: Vec::new(),
        });
        let err = peak_table_from(Ok(response)).unwrap_err();
        assert_eq!(err, ControllerError::no_peaks());
    }

    #[test]
    fn test_peak_table_rows_load_into_controller() {
        let response = PeakInfoResponse::All(vec![ResortPeaksRecord {
            resort: ResortSummary {
                id: "r".into(),
                name: "Rusutsu".into(),
                prefecture: "hokkaido".into(),
                top_elevation_m: Some(994.0),
                base_elevation_m: None,
                vertical_m: None,
                num_courses: Some(37.0),
            },
            peaks: vec![PeakPeriod {
                peak_rank: 1,
                start_date: "01-20".into(),
                end_date: "01-24".into(),
                total_period_snowfall: 180.0,
                avg_daily_snowfall: 36.0,
                confidence_level: ConfidenceLevel::High,
            }],
        }]);
        let table = peak_table_from(Ok(response)).unwrap();
        let mut controller = PeakInfoTable::new();
        controller.begin_request();
        controller.finish(Ok(table.rows)).unwrap();
        assert!(controller.is_visible());
        assert_eq!(controller.rows()[0].display.courses, "37");
    }
}
