//! Row records for the two tables: column sets and display projections.

use crate::sort::{ColumnKind, SortableRow, TableColumn};

/// Placeholder shown for absent values.
pub const PLACEHOLDER: &str = "-";

/// Columns of the ranking table, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankingColumn {
    Rank,
    Name,
    Prefecture,
    Snowfall,
    Years,
    Top,
    Base,
    Vertical,
    Courses,
}

impl TableColumn for RankingColumn {
    fn all() -> &'static [Self] {
        &[
            RankingColumn::Rank,
            RankingColumn::Name,
            RankingColumn::Prefecture,
            RankingColumn::Snowfall,
            RankingColumn::Years,
            RankingColumn::Top,
            RankingColumn::Base,
            RankingColumn::Vertical,
            RankingColumn::Courses,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            RankingColumn::Rank => "rank",
            RankingColumn::Name => "name",
            RankingColumn::Prefecture => "prefecture",
            RankingColumn::Snowfall => "snowfall",
            RankingColumn::Years => "years",
            RankingColumn::Top => "top",
            RankingColumn::Base => "base",
            RankingColumn::Vertical => "vertical",
            RankingColumn::Courses => "courses",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RankingColumn::Rank => "Rank",
            RankingColumn::Name => "Resort",
            RankingColumn::Prefecture => "Prefecture",
            RankingColumn::Snowfall => "Avg Snowfall",
            RankingColumn::Years => "Years of Data",
            RankingColumn::Top => "Top (m)",
            RankingColumn::Base => "Base (m)",
            RankingColumn::Vertical => "Vertical (m)",
            RankingColumn::Courses => "Courses",
        }
    }

    fn kind(self) -> ColumnKind {
        match self {
            RankingColumn::Name | RankingColumn::Prefecture => ColumnKind::Text,
            _ => ColumnKind::Numeric,
        }
    }
}

/// Columns of the peak-info table, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeakColumn {
    Name,
    Prefecture,
    Top,
    Base,
    Vertical,
    Courses,
    Peaks,
}

impl TableColumn for PeakColumn {
    fn all() -> &'static [Self] {
        &[
            PeakColumn::Name,
            PeakColumn::Prefecture,
            PeakColumn::Top,
            PeakColumn::Base,
            PeakColumn::Vertical,
            PeakColumn::Courses,
            PeakColumn::Peaks,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            PeakColumn::Name => "name",
            PeakColumn::Prefecture => "prefecture",
            PeakColumn::Top => "top",
            PeakColumn::Base => "base",
            PeakColumn::Vertical => "vertical",
            PeakColumn::Courses => "courses",
            PeakColumn::Peaks => "peaks",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PeakColumn::Name => "Resort",
            PeakColumn::Prefecture => "Prefecture",
            PeakColumn::Top => "Top (m)",
            PeakColumn::Base => "Base (m)",
            PeakColumn::Vertical => "Vertical (m)",
            PeakColumn::Courses => "Courses",
            PeakColumn::Peaks => "Peak Periods",
        }
    }

    fn kind(self) -> ColumnKind {
        match self {
            PeakColumn::Name | PeakColumn::Prefecture => ColumnKind::Text,
            _ => ColumnKind::Numeric,
        }
    }
}

/// Display strings for one ranking row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingDisplay {
    pub rank: String,
    /// `rank-1` .. `rank-3` for the podium, `None` otherwise.
    pub rank_class: Option<String>,
    pub name: String,
    pub prefecture: String,
    pub snowfall: String,
    pub years: String,
    pub top: String,
    pub base: String,
    pub vertical: String,
    pub courses: String,
}

impl RankingDisplay {
    /// Cell text for `column`.
    pub fn cell(&self, column: RankingColumn) -> &str {
        match column {
            RankingColumn::Rank => &self.rank,
            RankingColumn::Name => &self.name,
            RankingColumn::Prefecture => &self.prefecture,
            RankingColumn::Snowfall => &self.snowfall,
            RankingColumn::Years => &self.years,
            RankingColumn::Top => &self.top,
            RankingColumn::Base => &self.base,
            RankingColumn::Vertical => &self.vertical,
            RankingColumn::Courses => &self.courses,
        }
    }
}

/// One peak period rendered inside a peak-table row.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakEntryDisplay {
    /// "#1"
    pub rank: String,
    /// "01-10 - 01-14", or one date when the period is a single day
    pub dates: String,
    /// "212cm (42.5cm/day)"
    pub snowfall: String,
    pub confidence: String,
    /// `confidence-high` etc.
    pub confidence_class: String,
}

/// Display strings for one peak-table row.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDisplay {
    pub resort_id: String,
    pub name: String,
    pub prefecture: String,
    pub top: String,
    pub base: String,
    pub vertical: String,
    pub courses: String,
    pub peaks: Vec<PeakEntryDisplay>,
}

impl PeakDisplay {
    /// Cell text for the scalar columns; the peaks column renders `peaks` instead.
    pub fn cell(&self, column: PeakColumn) -> &str {
        match column {
            PeakColumn::Name => &self.name,
            PeakColumn::Prefecture => &self.prefecture,
            PeakColumn::Top => &self.top,
            PeakColumn::Base => &self.base,
            PeakColumn::Vertical => &self.vertical,
            PeakColumn::Courses => &self.courses,
            PeakColumn::Peaks => "",
        }
    }
}

pub type RankingRow = SortableRow<RankingColumn, RankingDisplay>;
pub type PeakRow = SortableRow<PeakColumn, PeakDisplay>;

/// Render an optional number, or the placeholder when absent.
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Render an optional snowfall with its unit.
pub fn format_snowfall(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{} cm", v))
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
