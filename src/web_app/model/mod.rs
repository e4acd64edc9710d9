// web_app/model/mod.rs - Shared data models for client and server
//
// The product API is external, so its payload is decoded here, at the
// boundary, instead of being trusted downstream.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::web_app::error::FetchError;

/// Shown in place of a product image that is missing or failed to load
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=No+Image";

/// One catalog item as returned by `GET /api/products`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "ProductWire")]
pub struct ProductRecord {
    /// Opaque identifier; the API sends it as `_id`, sometimes also as `id`
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub count_in_stock: u32,
    pub image: String,
}

/// Record as it appears on the wire. Mongoose with virtuals emits both
/// `_id` and `id`; either one is enough.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductWire {
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    id: Option<String>,
    name: String,
    price: Decimal,
    description: String,
    brand: String,
    category: String,
    count_in_stock: u32,
    image: String,
}

impl TryFrom<ProductWire> for ProductRecord {
    type Error = String;

    fn try_from(wire: ProductWire) -> Result<Self, Self::Error> {
        let id = wire
            .underscore_id
            .or(wire.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;

        Ok(ProductRecord {
            id,
            name: wire.name,
            price: wire.price,
            description: wire.description,
            brand: wire.brand,
            category: wire.category,
            count_in_stock: wire.count_in_stock,
            image: wire.image,
        })
    }
}

impl ProductRecord {
    /// Price prefixed with the currency symbol, as received (`$89.99`, `$100`)
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Products from one successful fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<ProductRecord>,
    /// Records in the response that did not match the product schema
    pub rejected: usize,
}

impl CatalogPage {
    /// Decode a response body.
    ///
    /// The body must be a JSON array. Each element is decoded on its own;
    /// malformed elements are dropped and counted rather than failing the
    /// whole page.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let mut page = CatalogPage {
            items: Vec::with_capacity(values.len()),
            rejected: 0,
        };

        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<ProductRecord>(value) {
                Ok(record) => page.items.push(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Rejected malformed product record");
                    page.rejected += 1;
                }
            }
        }

        Ok(page)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What the product page is showing. Exactly one at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Failed(String),
    Loaded(CatalogPage),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn page(&self) -> Option<&CatalogPage> {
        match self {
            ViewState::Loaded(page) => Some(page),
            _ => None,
        }
    }
}

impl From<Result<CatalogPage, FetchError>> for ViewState {
    fn from(outcome: Result<CatalogPage, FetchError>) -> Self {
        match outcome {
            Ok(page) => ViewState::Loaded(page),
            Err(e) => ViewState::Failed(e.user_message()),
        }
    }
}

/// Image source for one product card.
///
/// Swaps to [`PLACEHOLDER_IMAGE`] once the original fails to load. The swap
/// happens at most once, so a failing placeholder cannot loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    original: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            failed: false,
        }
    }

    pub fn current(&self) -> &str {
        if self.is_fallback() {
            PLACEHOLDER_IMAGE
        } else {
            &self.original
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed || self.original.trim().is_empty()
    }

    /// Record a load failure. Returns true if the source changed.
    pub fn fail(&mut self) -> bool {
        let changed = !self.is_fallback();
        self.failed = true;
        changed
    }
}
