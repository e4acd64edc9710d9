// web_app/api/http.rs - reqwest transport
//
// reqwest compiles to a `fetch` call on wasm32 and to hyper natively, so the
// browser bundle and the native tests share this code.

use reqwest::header::ACCEPT;

use super::{CatalogTransport, HttpReply};
use crate::web_app::error::FetchError;

#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| body_read_failure(status, FetchError::from(e)))?;

        Ok(HttpReply { status, body })
    }
}

/// A status that already arrived outranks a failure reading its body
fn body_read_failure(status: u16, err: FetchError) -> FetchError {
    FetchError::from_status(status, "").unwrap_or(err)
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if is_network(&err) {
            FetchError::NetworkUnreachable(err.to_string())
        } else {
            FetchError::Other(Some(err.to_string()))
        }
    }
}

// The browser reports refused connections, DNS and CORS failures alike as
// a failed request with no response.
#[cfg(target_arch = "wasm32")]
fn is_network(err: &reqwest::Error) -> bool {
    err.is_request()
}

#[cfg(not(target_arch = "wasm32"))]
fn is_network(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request()
}
