//! Page Configuration
//!
//! Where the demo backend lives and how long transient UI states last.

use std::time::Duration;

use crate::api::ApiError;

/// Path segment appended to the page origin for every API call
pub const BASE_PATH: &str = "/demo-basic";

/// Key of the single shared counter record
pub const COUNTER_ID: &str = "main-counter";

/// How long the Success badge stays up before reverting to Ready
pub const BADGE_RESET_MS: u64 = 2000;

/// Console log level
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Origin plus `BASE_PATH`, without a trailing slash
    pub base_url: String,
    pub counter_id: String,
    pub badge_reset: Duration,
}

impl PageConfig {
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
            counter_id: COUNTER_ID.to_string(),
            badge_reset: Duration::from_millis(BADGE_RESET_MS),
        }
    }

    /// Build from `window.location.origin`
    pub fn from_location() -> Result<Self, ApiError> {
        let window = web_sys::window()
            .ok_or_else(|| ApiError::Location("no window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e: wasm_bindgen::JsValue| ApiError::Location(format!("{:?}", e)))?;
        Ok(Self::with_base(format!("{}{}", origin.trim_end_matches('/'), BASE_PATH)))
    }

    /// Same as `from_location`, falling back to a relative base
    pub fn from_location_or_relative() -> Self {
        Self::from_location().unwrap_or_else(|e| {
            log::warn!("[Config] {}, using relative base {}", e, BASE_PATH);
            Self::with_base(BASE_PATH)
        })
    }

    pub fn counter_url(&self) -> String {
        format!("{}/TableName/{}", self.base_url, self.counter_id)
    }

    pub fn greeting_url(&self) -> String {
        format!("{}/greeting", self.base_url)
    }
}
