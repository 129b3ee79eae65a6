//! Command implementations for the SnowFinder CLI.
//!
//! Every subcommand goes through the same query builder, row mappers and
//! sort engine as the browser page, then prints a plain text table.

use clap::Subcommand;
use snowfinder_core::client::ApiClient;
use snowfinder_core::config::{ControllerConfig, ALL, DEFAULT_LIMIT};
use std::time::Duration;

pub mod peaks;
pub mod render;
pub mod search;

/// Request timeout for the native client; the browser has none.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Subcommand)]
pub enum Command {
    /// Rank resorts by average snowfall over a date range
    Search {
        /// First day, MM-DD
        #[arg(short = 's', long)]
        start: String,

        /// Last day, MM-DD (defaults to the first day)
        #[arg(short = 'e', long)]
        end: Option<String>,

        /// Prefecture id, or "all"
        #[arg(short = 'p', long, default_value = ALL)]
        prefecture: String,

        /// Maximum number of resorts
        #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Column to sort by (rank, name, prefecture, snowfall, years, top, base, vertical, courses)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Show peak snowfall periods for one resort or all of them
    Peaks {
        /// Resort id, or "all"
        #[arg(short = 'r', long, default_value = ALL)]
        resort: String,

        /// Column to sort by (name, prefecture, top, base, vertical, courses, peaks)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// List resorts that have peak period data
    Resorts,
}

pub async fn run(base_url: &str, command: Command) -> anyhow::Result<()> {
    let config = ControllerConfig::with_api_base(base_url);
    let client = ApiClient::new(&config, REQUEST_TIMEOUT)?;
    match command {
        Command::Search {
            start,
            end,
            prefecture,
            limit,
            sort,
            desc,
        } => {
            let args = search::SearchArgs {
                start,
                end,
                prefecture,
                limit,
                sort,
                desc,
            };
            search::run_search(&client, &args).await
        }
        Command::Peaks { resort, sort, desc } => {
            peaks::run_peaks(&client, &resort, sort.as_deref(), desc).await
        }
        Command::Resorts => peaks::run_resorts(&client).await,
    }
}

/// Apply a `--sort` / `--desc` pair the way header clicks would: one
/// activation sorts ascending, a second flips to descending.
pub fn apply_sort<C, D>(
    table: &mut snowfinder_core::table::TableController<C, D>,
    sort: Option<&str>,
    desc: bool,
) -> anyhow::Result<()>
where
    C: snowfinder_core::sort::TableColumn,
{
    let Some(id) = sort else {
        return Ok(());
    };
    let column = C::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = C::all().iter().map(|c| c.id()).collect();
        anyhow::anyhow!("Unknown sort column '{}' (expected one of: {})", id, known.join(", "))
    })?;
    table.activate(column);
    if desc {
        table.activate(column);
    }
    Ok(())
}
