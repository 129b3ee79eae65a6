//! `search`: rank resorts by average snowfall over a date range.

use crate::apply_sort;
use crate::render::render_ranking;
use log::{info, warn};
use snowfinder_core::client::ApiClient;
use snowfinder_core::config::DEFAULT_LIMIT;
use snowfinder_core::dates::MonthDay;
use snowfinder_core::query::{RegionFilter, SearchQuery};
use snowfinder_core::table::{ranking_rows_from, RankingTable};

pub struct SearchArgs {
    pub start: String,
    pub end: Option<String>,
    pub prefecture: String,
    pub limit: u32,
    pub sort: Option<String>,
    pub desc: bool,
}

/// Validate CLI arguments into a service query. The end day defaults to the start day.
pub fn build_query(args: &SearchArgs) -> anyhow::Result<SearchQuery> {
    let start = MonthDay::parse(&args.start)?;
    let end = match &args.end {
        Some(end) => MonthDay::parse(end)?,
        None => start,
    };
    if end < start {
        warn!("Range {} to {} wraps the year; sent as-is", start, end);
    }
    let limit = if args.limit == 0 {
        warn!("Limit 0 is not positive, using {}", DEFAULT_LIMIT);
        DEFAULT_LIMIT
    } else {
        args.limit
    };
    Ok(SearchQuery::new(
        start,
        end,
        RegionFilter::parse(&args.prefecture),
        limit,
    ))
}

pub async fn run_search(client: &ApiClient, args: &SearchArgs) -> anyhow::Result<()> {
    let query = build_query(args)?;
    info!(
        "Searching {} to {} in {} (limit {})",
        query.start_date,
        query.end_date,
        query.region.display_text(),
        query.limit
    );

    let mut table = RankingTable::new();
    table.begin_request();
    let outcome = client.search(&query).await;
    table.finish(ranking_rows_from(outcome))?;
    apply_sort(&mut table, args.sort.as_deref(), args.desc)?;

    println!(
        "{} to {} · {} · {} resort(s)",
        query.start_date,
        query.end_date,
        query.region.display_text(),
        table.rows().len()
    );
    print!("{}", render_ranking(table.rows(), table.sort_state()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: &str, end: Option<&str>, prefecture: &str, limit: u32) -> SearchArgs {
        SearchArgs {
            start: start.to_string(),
            end: end.map(str::to_string),
            prefecture: prefecture.to_string(),
            limit,
            sort: None,
            desc: false,
        }
    }

    #[test]
    fn end_defaults_to_start() {
        let query = build_query(&args("01-15", None, "all", 10)).unwrap();
        assert_eq!(query.start_date, query.end_date);
        assert_eq!(query.region, RegionFilter::All);
    }

    #[test]
    fn pairs_carry_prefecture_and_limit() {
        let query = build_query(&args("01-15", Some("01-20"), "Nagano", 20)).unwrap();
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("start_date", "01-15".to_string())));
        assert!(pairs.contains(&("end_date", "01-20".to_string())));
        assert!(pairs.contains(&("prefecture", "nagano".to_string())));
        assert!(pairs.contains(&("limit", "20".to_string())));
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!(build_query(&args("1-15", None, "all", 10)).is_err());
        assert!(build_query(&args("02-30", None, "all", 10)).is_err());
        assert!(build_query(&args("01-15", Some("13-01"), "all", 10)).is_err());
    }

    #[test]
    fn zero_limit_falls_back_to_default() {
        let query = build_query(&args("01-15", None, "all", 0)).unwrap();
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn wrapped_range_is_kept() {
        let query = build_query(&args("12-28", Some("01-03"), "all", 10)).unwrap();
        assert_eq!(query.start_date.to_string(), "12-28");
        assert_eq!(query.end_date.to_string(), "01-03");
    }
}
