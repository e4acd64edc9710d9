// web_app/error.rs - Failures of the catalog fetch
//
// Every failure is caught at the fetch boundary and turned into a single
// line for the page. The full error only ever reaches the tracing log.

use serde::Deserialize;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - Cannot connect to server";
pub const NOT_FOUND_MESSAGE: &str = "API endpoint not found";
pub const SERVER_ERROR_MESSAGE: &str = "Server error - Please try again later";
pub const FALLBACK_MESSAGE: &str = "Failed to fetch products";

/// Why a catalog fetch did not produce a product list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No response reached us: refused connection, DNS, CORS, offline
    #[error("network error: {0}")]
    NetworkUnreachable(String),
    #[error("endpoint not found (HTTP 404)")]
    NotFound,
    #[error("server error (HTTP {status})")]
    ServerError { status: u16 },
    /// Any other non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body was not a JSON array
    #[error("Invalid response from product API: {0}")]
    Decode(String),
    #[error("{}", .0.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Other(Option<String>),
}

/// Error body shape used by the product API (`{"message": "..."}`)
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl FetchError {
    /// Classify an HTTP status. Returns `None` for 2xx.
    ///
    /// 404 and 5xx map to fixed variants; other statuses carry the
    /// `message` of a JSON error body when there is one.
    pub fn from_status(status: u16, body: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(FetchError::NotFound),
            s if s >= 500 => Some(FetchError::ServerError { status: s }),
            s => {
                let message = body_message(body)
                    .unwrap_or_else(|| format!("Request failed with status code {}", s));
                Some(FetchError::Status { status: s, message })
            }
        }
    }

    /// The line shown on the page for this failure
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NetworkUnreachable(_) => NETWORK_ERROR_MESSAGE.to_string(),
            FetchError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            FetchError::ServerError { .. } => SERVER_ERROR_MESSAGE.to_string(),
            FetchError::Status { message, .. } => message.clone(),
            FetchError::Decode(_) => self.to_string(),
            FetchError::Other(message) => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_MESSAGE)
                .to_string(),
        }
    }
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}
