//! Counter Record
//!
//! Read and write the shared counter stored under `TableName`.

use gloo_net::http::Request;

use super::{ensure_success, is_success, ApiError};
use crate::config::PageConfig;
use crate::models::{CounterRecord, CounterResponse};

/// Read the counter record. A non-2xx status means there is no record yet.
pub async fn fetch_counter(config: &PageConfig) -> Result<Option<i64>, ApiError> {
    let resp = Request::get(&config.counter_url()).send().await?;
    if !is_success(resp.status()) {
        return Ok(None);
    }
    let record: CounterResponse = resp.json().await?;
    Ok(Some(record.count_or_zero()))
}

/// Write the counter record, returning the count the server stored if it echoed one
pub async fn update_counter(config: &PageConfig, count: i64) -> Result<Option<i64>, ApiError> {
    let body = CounterRecord { id: &config.counter_id, count };
    let resp = Request::put(&config.counter_url())
        .json(&body)?
        .send()
        .await?;
    ensure_success(&resp)?;
    let record: CounterResponse = resp.json().await?;
    Ok(record.count)
}
