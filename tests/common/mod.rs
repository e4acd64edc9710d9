// common/mod.rs - Shared test fixtures
//
// Sample catalog payloads and a transport that replays a scripted reply
// instead of touching the network.

#![allow(dead_code)]

use std::sync::Mutex;

use mymart_catalog::web_app::api::{CatalogTransport, HttpReply};
use mymart_catalog::web_app::error::FetchError;
use mymart_catalog::web_app::model::ProductRecord;
use rust_decimal::Decimal;

/// Three well-formed records in the shape the product API sends
pub const THREE_PRODUCTS_JSON: &str = r#"[
    {
        "_id": "6501a1",
        "name": "Airpods Wireless Bluetooth Headphones",
        "image": "/images/airpods.jpg",
        "description": "Bluetooth technology lets you connect it with compatible devices",
        "brand": "Apple",
        "category": "Electronics",
        "price": 89.99,
        "countInStock": 10
    },
    {
        "_id": "6501a2",
        "name": "iPhone 11 Pro 256GB Memory",
        "image": "/images/phone.jpg",
        "description": "Introducing the iPhone 11 Pro",
        "brand": "Apple",
        "category": "Electronics",
        "price": 599.99,
        "countInStock": 7
    },
    {
        "_id": "6501a3",
        "name": "Logitech G-Series Gaming Mouse",
        "image": "",
        "description": "Get a better handle on your games",
        "brand": "Logitech",
        "category": "Electronics",
        "price": 49.99,
        "countInStock": 0
    }
]"#;

pub fn sample_product(id: &str, name: &str) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::new(2450, 2),
        description: format!("{} description", name),
        brand: "Acme".to_string(),
        category: "Gadgets".to_string(),
        count_in_stock: 12,
        image: format!("/images/{}.jpg", id),
    }
}

/// Replays one reply for every request and records the URLs asked for
pub struct ScriptedTransport {
    reply: Result<HttpReply, FetchError>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn reply(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply::new(status, body)),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(error: FetchError) -> Self {
        Self {
            reply: Err(error),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl CatalogTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.reply.clone()
    }
}
