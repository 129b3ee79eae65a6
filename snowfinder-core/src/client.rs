//! Native HTTP client for the ranking service (feature `api`).

use crate::api::{
    check_status, decode_peak_info, decode_resort_options, decode_search, endpoint,
    peak_info_pairs, PEAK_INFO_PATH, RESORTS_WITH_PEAKS_PATH, SEARCH_PATH,
};
use crate::config::ControllerConfig;
use crate::error::{ControllerError, Result};
use crate::models::{PeakInfoResponse, RankingRecord, ResortOption};
use crate::query::{ResortScope, SearchQuery};
use log::info;
use std::time::Duration;

/// Thin wrapper over `reqwest::Client` bound to one service base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl ApiClient {
    pub fn new(config: &ControllerConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ControllerError::Transport(e.to_string()))?;
        Ok(ApiClient {
            http,
            api_base: config.api_base.clone(),
        })
    }

    async fn get_text(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<String> {
        let url = endpoint(&self.api_base, path);
        info!("GET {} {:?}", url, pairs);
        let response = self
            .http
            .get(&url)
            .query(pairs)
            .send()
            .await
            .map_err(|e| ControllerError::Transport(e.to_string()))?;
        check_status(response.status().as_u16())?;
        response
            .text()
            .await
            .map_err(|e| ControllerError::Transport(e.to_string()))
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<RankingRecord>> {
        let body = self.get_text(SEARCH_PATH, &query.query_pairs()).await?;
        decode_search(&body)
    }

    /// Resort selector entries, sorted by name.
    pub async fn resorts_with_peaks(&self) -> Result<Vec<ResortOption>> {
        let body = self
            .get_text(RESORTS_WITH_PEAKS_PATH, &[])
            .await
            .map_err(|e| ControllerError::ResortList(e.to_string()))?;
        decode_resort_options(&body)
    }

    pub async fn peak_info(&self, scope: &ResortScope) -> Result<PeakInfoResponse> {
        let body = self.get_text(PEAK_INFO_PATH, &peak_info_pairs(scope)).await?;
        decode_peak_info(&body, scope)
    }
}
