//! Row mappers: API responses in, sortable rows out.
//!
//! Both mappers preserve arrival order; that order is what the tables show
//! until a header is activated.

use crate::models::{PeakInfoResponse, PeakPeriod, RankingRecord, ResortPeaksRecord};
use crate::rows::{
    capitalize_first, format_optional, format_snowfall, PeakColumn, PeakDisplay,
    PeakEntryDisplay, PeakRow, RankingColumn, RankingDisplay, RankingRow,
};
use crate::sort::SortKey;

/// Map a ranking response, one row per record.
pub fn map_ranking_rows(records: &[RankingRecord]) -> Vec<RankingRow> {
    records.iter().map(map_ranking_record).collect()
}

pub fn map_ranking_record(record: &RankingRecord) -> RankingRow {
    let display = RankingDisplay {
        rank: record.rank.to_string(),
        rank_class: (1..=3)
            .contains(&record.rank)
            .then(|| format!("rank-{}", record.rank)),
        name: record.name.clone(),
        prefecture: capitalize_first(&record.prefecture),
        snowfall: format_snowfall(record.avg_snowfall),
        years: format_optional(record.years_with_data),
        top: format_optional(record.top_elevation),
        base: format_optional(record.base_elevation),
        vertical: format_optional(record.vertical_drop),
        courses: format_optional(record.num_courses),
    };
    let keys = [
        (RankingColumn::Rank, SortKey::Number(f64::from(record.rank))),
        (RankingColumn::Name, SortKey::text(&record.name)),
        (RankingColumn::Prefecture, SortKey::text(&record.prefecture)),
        (RankingColumn::Snowfall, SortKey::number(record.avg_snowfall)),
        (RankingColumn::Years, SortKey::number(record.years_with_data)),
        (RankingColumn::Top, SortKey::number(record.top_elevation)),
        (RankingColumn::Base, SortKey::number(record.base_elevation)),
        (RankingColumn::Vertical, SortKey::number(record.vertical_drop)),
        (RankingColumn::Courses, SortKey::number(record.num_courses)),
    ];
    RankingRow::new(display, keys)
}

/// A mapped peak-info response: the section title and its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakTable {
    pub title: String,
    pub rows: Vec<PeakRow>,
}

/// Map a peak-info response.
///
/// Resorts without any peak period are dropped; they carry nothing for this
/// view. The all-resorts title counts every resort in the payload.
pub fn map_peak_response(response: PeakInfoResponse) -> PeakTable {
    let title = match &response {
        PeakInfoResponse::All(records) => {
            format!("Peak Snowfall Periods - All Resorts ({})", records.len())
        }
        PeakInfoResponse::Single(record) => {
            format!("Peak Snowfall Periods - {}", record.resort.name)
        }
    };
    let rows = response
        .into_records()
        .iter()
        .filter_map(map_peak_record)
        .collect();
    PeakTable { title, rows }
}

/// Map one resort; `None` when it has no peaks.
pub fn map_peak_record(record: &ResortPeaksRecord) -> Option<PeakRow> {
    // Peaks arrive best first, so the first one stands for the resort.
    let top_peak = record.peaks.first()?;
    let resort = &record.resort;
    let display = PeakDisplay {
        resort_id: resort.id.clone(),
        name: resort.name.clone(),
        prefecture: resort.prefecture.clone(),
        top: format_optional(resort.top_elevation_m),
        base: format_optional(resort.base_elevation_m),
        vertical: format_optional(resort.vertical_m),
        courses: format_optional(resort.num_courses),
        peaks: record.peaks.iter().map(map_peak_entry).collect(),
    };
    let keys = [
        (PeakColumn::Name, SortKey::text(&resort.name)),
        (PeakColumn::Prefecture, SortKey::text(&resort.prefecture)),
        (PeakColumn::Top, SortKey::number(resort.top_elevation_m)),
        (PeakColumn::Base, SortKey::number(resort.base_elevation_m)),
        (PeakColumn::Vertical, SortKey::number(resort.vertical_m)),
        (PeakColumn::Courses, SortKey::number(resort.num_courses)),
        (PeakColumn::Peaks, SortKey::Number(top_peak.total_period_snowfall)),
    ];
    Some(PeakRow::new(display, keys))
}

/// Round to one decimal with ties going up, so 1.25 shows as 1.3.
fn round_half_up_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn map_peak_entry(peak: &PeakPeriod) -> PeakEntryDisplay {
    let dates = if peak.start_date == peak.end_date {
        peak.start_date.clone()
    } else {
        format!("{} - {}", peak.start_date, peak.end_date)
    };
    PeakEntryDisplay {
        rank: format!("#{}", peak.peak_rank),
        dates,
        snowfall: format!(
            "{}cm ({:.1}cm/day)",
            peak.total_period_snowfall.round(),
            round_half_up_tenth(peak.avg_daily_snowfall)
        ),
        confidence: peak.confidence_level.to_string(),
        confidence_class: format!("confidence-{}", peak.confidence_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConfidenceLevel, ResortSummary};
    use crate::sort::{sort_rows, SortDirection, MISSING};

    fn record(rank: u32, name: &str, snowfall: Option<f64>) -> RankingRecord {
        RankingRecord {
            rank,
            name: name.to_string(),
            prefecture: "nagano".to_string(),
            avg_snowfall: snowfall,
            years_with_data: Some(10.0),
            top_elevation: None,
            base_elevation: Some(800.0),
            vertical_drop: None,
            num_courses: Some(12.0),
            longest_course_km: None,
        }
    }

    fn resort(id: &str, name: &str) -> ResortSummary {
        ResortSummary {
            id: id.to_string(),
            name: name.to_string(),
            prefecture: "hokkaido".to_string(),
            top_elevation_m: Some(1308.0),
            base_elevation_m: None,
            vertical_m: Some(940.0),
            num_courses: None,
        }
    }

    fn peak(rank: u32, start: &str, end: &str, total: f64, avg: f64) -> PeakPeriod {
        PeakPeriod {
            peak_rank: rank,
            start_date: start.to_string(),
            end_date: end.to_string(),
            total_period_snowfall: total,
            avg_daily_snowfall: avg,
            confidence_level: ConfidenceLevel::Medium,
        }
    }

    fn ranks(rows: &[RankingRow]) -> Vec<String> {
        rows.iter().map(|r| r.display.rank.clone()).collect()
    }

    #[test]
    fn test_ranking_rows_keep_arrival_order() {
        let records = vec![record(3, "C", None), record(1, "A", None), record(2, "B", None)];
        assert_eq!(ranks(&map_ranking_rows(&records)), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_ranking_display_and_keys() {
        let rows = map_ranking_rows(&[record(1, "Niseko", Some(50.0)), record(4, "x", None)]);
        let first = &rows[0];
        assert_eq!(first.display.rank_class.as_deref(), Some("rank-1"));
        assert_eq!(first.display.snowfall, "50 cm");
        assert_eq!(first.display.prefecture, "Nagano");
        assert_eq!(first.display.top, "-");
        assert_eq!(first.key(RankingColumn::Name), &SortKey::Text("niseko".into()));
        assert_eq!(first.key(RankingColumn::Snowfall), &SortKey::Number(50.0));
        assert_eq!(first.key(RankingColumn::Top), &SortKey::Number(MISSING));

        let fourth = &rows[1];
        assert_eq!(fourth.display.rank_class, None);
        assert_eq!(fourth.display.snowfall, "-");
        assert_eq!(fourth.key(RankingColumn::Snowfall), &SortKey::Number(MISSING));
    }

    #[test]
    fn test_two_row_example() {
        let records = vec![record(1, "B", Some(50.0)), record(2, "A", None)];

        let mut by_snowfall = map_ranking_rows(&records);
        sort_rows(&mut by_snowfall, RankingColumn::Snowfall, SortDirection::Ascending);
        assert_eq!(ranks(&by_snowfall), vec!["2", "1"]);

        let mut by_name = map_ranking_rows(&records);
        sort_rows(&mut by_name, RankingColumn::Name, SortDirection::Ascending);
        assert_eq!(ranks(&by_name), vec!["2", "1"]);
    }

    #[test]
    fn test_empty_peak_lists_are_dropped() {
        let response = PeakInfoResponse::All(vec![
            ResortPeaksRecord {
                resort: resort("a", "Asahidake"),
                peaks: vec![peak(1, "01-10", "01-14", 212.4, 42.48)],
            },
            ResortPeaksRecord {
                resort: resort("b", "Bare"),
                peaks: Vec::new(),
            },
        ]);
        let table = map_peak_response(response);
        assert_eq!(table.title, "Peak Snowfall Periods - All Resorts (2)");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].display.name, "Asahidake");
    }

    #[test]
    fn test_single_resort_title() {
        let response = PeakInfoResponse::Single(ResortPeaksRecord {
            resort: resort("a", "Asahidake"),
            peaks: Vec::new(),
        });
        let table = map_peak_response(response);
        assert_eq!(table.title, "Peak Snowfall Periods - Asahidake");
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_peak_entries_and_top_peak_key() {
        let record = ResortPeaksRecord {
            resort: resort("a", "Asahidake"),
            peaks: vec![
                peak(1, "01-10", "01-14", 212.6, 42.52),
                peak(2, "02-03", "02-03", 300.0, 300.0),
            ],
        };
        let row = map_peak_record(&record).unwrap();
        assert_eq!(row.key(PeakColumn::Peaks), &SortKey::Number(212.6));
        assert_eq!(row.key(PeakColumn::Courses), &SortKey::Number(MISSING));
        assert_eq!(row.display.courses, "-");

        let first = &row.display.peaks[0];
        assert_eq!(first.rank, "#1");
        assert_eq!(first.dates, "01-10 - 01-14");
        assert_eq!(first.snowfall, "213cm (42.5cm/day)");
        assert_eq!(first.confidence, "medium");
        assert_eq!(first.confidence_class, "confidence-medium");

        assert_eq!(row.display.peaks[1].dates, "02-03");
    }

    #[test]
    fn test_daily_rate_ties_round_up() {
        let entry = map_peak_entry(&peak(1, "01-10", "01-13", 5.0, 1.25));
        assert_eq!(entry.snowfall, "5cm (1.3cm/day)");
        let entry = map_peak_entry(&peak(1, "01-10", "01-13", 11.0, 2.75));
        assert_eq!(entry.snowfall, "11cm (2.8cm/day)");
        let entry = map_peak_entry(&peak(1, "01-10", "01-12", 10.0, 3.333));
        assert_eq!(entry.snowfall, "10cm (3.3cm/day)");
    }

    #[test]
    fn test_unrecognized_confidence_keeps_raw_text() {
        let mut period = peak(1, "01-10", "01-13", 5.0, 1.25);
        period.confidence_level = ConfidenceLevel::from("tentative".to_string());
        let entry = map_peak_entry(&period);
        assert_eq!(entry.confidence, "tentative");
        assert_eq!(entry.confidence_class, "confidence-tentative");
    }

    #[test]
    fn test_peak_rows_sort_with_same_convention() {
        let make = |id: &str, total: f64| ResortPeaksRecord {
            resort: resort(id, id),
            peaks: vec![peak(1, "01-01", "01-02", total, total / 2.0)],
        };
        let mut table = map_peak_response(PeakInfoResponse::All(vec![
            make("b", 90.0),
            make("a", 150.0),
            make("c", 30.0),
        ]));
        sort_rows(&mut table.rows, PeakColumn::Peaks, SortDirection::Ascending);
        let names: Vec<_> = table.rows.iter().map(|r| r.display.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        sort_rows(&mut table.rows, PeakColumn::Name, SortDirection::Ascending);
        let names: Vec<_> = table.rows.iter().map(|r| r.display.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
