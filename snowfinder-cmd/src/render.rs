//! Plain text rendering of controller tables.

use snowfinder_core::rows::{PeakColumn, PeakEntryDisplay, PeakRow, RankingColumn, RankingRow};
use snowfinder_core::sort::{SortState, TableColumn};

/// Header label with the active sort arrow appended.
fn header<C: TableColumn>(column: C, sort: &SortState<C>) -> String {
    match sort.indicator(column) {
        Some(direction) => format!("{}{}", column.label(), direction.arrow()),
        None => column.label().to_string(),
    }
}

fn peak_summary(entry: &PeakEntryDisplay) -> String {
    format!(
        "{} {} {} [{}]",
        entry.rank, entry.dates, entry.snowfall, entry.confidence
    )
}

/// Left-aligned columns separated by two spaces, with a dashed rule under the header.
pub fn render_grid(headers: &[String], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for line in body {
        for (i, cell) in line.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(headers));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for line in body {
        out.push_str(&format_line(line));
        out.push('\n');
    }
    out
}

pub fn render_ranking(rows: &[RankingRow], sort: &SortState<RankingColumn>) -> String {
    let headers: Vec<String> = RankingColumn::all()
        .iter()
        .map(|column| header(*column, sort))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            RankingColumn::all()
                .iter()
                .map(|column| row.display.cell(*column).to_string())
                .collect()
        })
        .collect();
    render_grid(&headers, &body)
}

pub fn render_peaks(rows: &[PeakRow], sort: &SortState<PeakColumn>) -> String {
    let headers: Vec<String> = PeakColumn::all()
        .iter()
        .map(|column| header(*column, sort))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            PeakColumn::all()
                .iter()
                .map(|column| match column {
                    PeakColumn::Peaks => row
                        .display
                        .peaks
                        .iter()
                        .map(peak_summary)
                        .collect::<Vec<_>>()
                        .join("; "),
                    other => row.display.cell(*other).to_string(),
                })
                .collect()
        })
        .collect();
    render_grid(&headers, &body)
}
