//! Endpoints of the resort ranking service and decoding of their bodies.
//!
//! Transport lives elsewhere (browser `fetch` in `snowfinder-ui`, `reqwest`
//! in `client`); both go through the helpers here so status handling and JSON
//! shapes are identical on every platform.

use crate::error::{ControllerError, Result};
use crate::models::{PeakInfoResponse, RankingRecord, ResortOption};
use crate::query::ResortScope;
use crate::sort::compare_text;

/// `GET` ranking search, see `SearchQuery::query_pairs`.
pub const SEARCH_PATH: &str = "/api/search";

/// `GET` resorts that have at least one peak period, for the selector.
pub const RESORTS_WITH_PEAKS_PATH: &str = "/api/resorts-with-peaks";

/// `GET` peak periods for one resort or `all`.
pub const PEAK_INFO_PATH: &str = "/api/peak-info";

/// Join the configured base with an endpoint path.
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// Query parameters for the peak-info endpoint.
pub fn peak_info_pairs(scope: &ResortScope) -> Vec<(&'static str, String)> {
    vec![("resort_id", scope.as_param().to_string())]
}

/// Any non-2xx status is a generic HTTP failure; the body is never read.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ControllerError::Http { status })
    }
}

pub fn decode_search(body: &str) -> Result<Vec<RankingRecord>> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the selector list, sorted by name.
pub fn decode_resort_options(body: &str) -> Result<Vec<ResortOption>> {
    let mut options: Vec<ResortOption> =
        serde_json::from_str(body).map_err(|e| ControllerError::ResortList(e.to_string()))?;
    sort_resort_options(&mut options);
    Ok(options)
}

pub fn sort_resort_options(options: &mut [ResortOption]) {
    options.sort_by(|a, b| {
        compare_text(&a.name.to_lowercase(), &b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Decode a peak-info body; its shape follows the requested scope.
pub fn decode_peak_info(body: &str, scope: &ResortScope) -> Result<PeakInfoResponse> {
    Ok(match scope {
        ResortScope::All => PeakInfoResponse::All(serde_json::from_str(body)?),
        ResortScope::Resort(_) => PeakInfoResponse::Single(serde_json::from_str(body)?),
    })
}
