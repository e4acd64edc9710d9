// web_app/api/mod.rs - The catalog request
//
// `fetch_catalog` is the only network operation of the app. It is generic
// over `CatalogTransport` so the page uses reqwest while tests can script
// replies.

pub mod http;

use crate::web_app::config::ApiBase;
use crate::web_app::error::FetchError;
use crate::web_app::model::CatalogPage;

pub use http::HttpTransport;

/// Status and body of one HTTP response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a GET and hands back whatever the server answered.
///
/// Implementations return `Err` only when no response was received;
/// non-2xx statuses come back as `Ok` and are classified by the caller.
#[allow(async_fn_in_trait)]
pub trait CatalogTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError>;
}

/// Fetch `GET {base}/api/products` and decode it.
pub async fn fetch_catalog<T>(transport: &T, base: &ApiBase) -> Result<CatalogPage, FetchError>
where
    T: CatalogTransport,
{
    let url = base.products_url();
    tracing::debug!(url = %url, "Fetching products");

    let result = match transport.get(&url).await {
        Ok(reply) => match FetchError::from_status(reply.status, &reply.body) {
            Some(err) => Err(err),
            None => CatalogPage::from_json(&reply.body),
        },
        Err(err) => Err(err),
    };

    match &result {
        Ok(page) => tracing::debug!(
            count = page.items.len(),
            rejected = page.rejected,
            "Products received"
        ),
        Err(e) => tracing::error!(error = ?e, url = %url, "Error fetching products"),
    }

    result
}
