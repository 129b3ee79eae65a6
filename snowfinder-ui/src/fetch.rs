//! Browser `fetch` wrappers for the ranking service.
//!
//! Status and body handling is delegated to `snowfinder_core::api`, so the
//! browser and the CLI report exactly the same errors.

use js_sys::encode_uri_component;
use snowfinder_core::api::{
    check_status, decode_peak_info, decode_resort_options, decode_search, endpoint,
    PEAK_INFO_PATH, RESORTS_WITH_PEAKS_PATH, SEARCH_PATH,
};
use snowfinder_core::error::{ControllerError, Result};
use snowfinder_core::models::{PeakInfoResponse, RankingRecord, ResortOption};
use snowfinder_core::query::{ResortScope, SearchQuery};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, UrlSearchParams};

fn js_error(err: JsValue) -> ControllerError {
    if let Some(message) = err.as_string() {
        return ControllerError::Transport(message);
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return ControllerError::Transport(error.message().into());
    }
    ControllerError::Transport("Request failed".to_string())
}

/// GET `url` and return the body text of a 2xx response.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| ControllerError::Transport("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    check_status(response.status())?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| ControllerError::Decode("response body is not text".to_string()))
}

/// Ranking search.
pub async fn search(api_base: &str, query: &SearchQuery) -> Result<Vec<RankingRecord>> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    for (key, value) in query.query_pairs() {
        params.append(key, &value);
    }
    let url = format!(
        "{}?{}",
        endpoint(api_base, SEARCH_PATH),
        String::from(params.to_string())
    );
    log::info!("Searching {}", url);
    let body = fetch_text(&url).await?;
    decode_search(&body)
}

/// Resort selector entries, sorted by name.
pub async fn resorts_with_peaks(api_base: &str) -> Result<Vec<ResortOption>> {
    let body = fetch_text(&endpoint(api_base, RESORTS_WITH_PEAKS_PATH))
        .await
        .map_err(|e| ControllerError::ResortList(e.to_string()))?;
    decode_resort_options(&body)
}

/// Peak periods for one resort or for all of them.
pub async fn peak_info(api_base: &str, scope: &ResortScope) -> Result<PeakInfoResponse> {
    let url = format!(
        "{}?resort_id={}",
        endpoint(api_base, PEAK_INFO_PATH),
        String::from(encode_uri_component(scope.as_param()))
    );
    log::info!("Fetching peak info {}", url);
    let body = fetch_text(&url).await?;
    decode_peak_info(&body, scope)
}
