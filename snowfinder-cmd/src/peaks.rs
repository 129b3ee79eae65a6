//! `peaks` and `resorts`: peak snowfall periods per resort.

use crate::apply_sort;
use crate::render::{render_grid, render_peaks};
use log::info;
use snowfinder_core::client::ApiClient;
use snowfinder_core::mapper::PeakTable;
use snowfinder_core::query::ResortScope;
use snowfinder_core::table::{peak_table_from, PeakInfoTable};

pub async fn run_peaks(
    client: &ApiClient,
    resort: &str,
    sort: Option<&str>,
    desc: bool,
) -> anyhow::Result<()> {
    let scope = ResortScope::parse(resort);
    info!("Fetching peak periods for {}", scope.as_param());

    let mut table = PeakInfoTable::new();
    table.begin_request();
    let PeakTable { title, rows } = peak_table_from(client.peak_info(&scope).await)?;
    table.finish(Ok(rows))?;
    apply_sort(&mut table, sort, desc)?;

    println!("{}", title);
    print!("{}", render_peaks(table.rows(), table.sort_state()));
    Ok(())
}

pub async fn run_resorts(client: &ApiClient) -> anyhow::Result<()> {
    let resorts = client.resorts_with_peaks().await?;
    info!("Loaded {} resorts with peak data", resorts.len());
    let headers = vec!["ID".to_string(), "Name".to_string()];
    let body: Vec<Vec<String>> = resorts
        .into_iter()
        .map(|resort| vec![resort.id, resort.name])
        .collect();
    print!("{}", render_grid(&headers, &body));
    Ok(())
}
