// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay)
// - product.rs: Product display components (ProductImage, ProductCard, ProductList)

pub mod common;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
