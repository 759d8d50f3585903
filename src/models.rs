//! Frontend Models
//!
//! Wire shapes of the demo backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Counter record body sent with PUT
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterRecord<'a> {
    pub id: &'a str,
    pub count: i64,
}

/// Counter record as returned by GET and PUT
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterResponse {
    #[serde(default)]
    pub count: Option<i64>,
}

impl CounterResponse {
    /// Missing or null count reads as zero
    pub fn count_or_zero(&self) -> i64 {
        self.count.unwrap_or(0)
    }
}

/// Arbitrary JSON object returned by `/greeting`
pub type GreetingPayload = Map<String, Value>;
