//! Greeting Endpoint

use gloo_net::http::Request;

use super::{ensure_success, ApiError};
use crate::config::PageConfig;
use crate::models::GreetingPayload;

pub async fn fetch_greeting(config: &PageConfig) -> Result<GreetingPayload, ApiError> {
    let resp = Request::get(&config.greeting_url()).send().await?;
    ensure_success(&resp)?;
    Ok(resp.json().await?)
}
