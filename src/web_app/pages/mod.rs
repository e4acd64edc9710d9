// web_app/pages/mod.rs - Page components module
//
// - ProductPage: the product listing

pub mod products;

// Re-export page components
pub use products::{CatalogView, ProductPage};
