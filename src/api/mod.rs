//! Backend API
//!
//! HTTP bindings to the demo backend, organized by resource.

mod counter;
mod greeting;

use gloo_net::http::Response;
use thiserror::Error;

pub use counter::*;
pub use greeting::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Page origin unavailable: {0}")]
    Location(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `Err(Status)` unless the status is 2xx
pub fn check_status(status: u16, status_text: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, status_text: status_text.to_string() })
    }
}

fn ensure_success(resp: &Response) -> Result<(), ApiError> {
    check_status(resp.status(), &resp.status_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = check_status(500, "Internal Server Error").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_success_range() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(204, "No Content").is_ok());
        assert!(!is_success(199));
        assert!(!is_success(304));
        assert!(!is_success(404));
    }
}
