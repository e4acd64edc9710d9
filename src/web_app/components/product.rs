// web_app/components/product.rs - Product display components
//
// - ProductImage: <img> that swaps to a placeholder when loading fails
// - ProductCard: one catalog item
// - ProductList: the cards, or a placeholder when the catalog is empty

use leptos::prelude::*;
use crate::web_app::model::{CatalogPage, ImageSource, ProductRecord};

/// Product image with fallback
///
/// A load error only touches this image's own signal; the page state and
/// the other cards are unaffected.
#[component]
pub fn ProductImage(
    /// Image URI from the product record
    src: String,
    /// Alt text, the product name
    alt: String,
) -> impl IntoView {
    let image = RwSignal::new(ImageSource::new(src));

    view! {
        <img
            class="product-image"
            src=move || image.with(|i| i.current().to_string())
            alt=alt
            width="150"
            on:error=move |_| {
                image.update(|i| {
                    if i.fail() {
                        tracing::debug!("Product image failed to load, using placeholder");
                    }
                });
            }
        />
    }
}

/// Card for one catalog item
#[component]
pub fn ProductCard(
    /// The product to display
    product: ProductRecord,
) -> impl IntoView {
    let price_display = product.price_label();

    view! {
        <div class="product-card" data-product-id=product.id.clone()>
            <ProductImage src=product.image.clone() alt=product.name.clone() />
            <h3 class="product-name">{product.name.clone()}</h3>
            <p><strong>"Price:"</strong> " " <span class="product-price">{price_display}</span></p>
            <p><strong>"Description:"</strong> " " {product.description.clone()}</p>
            <p><strong>"Brand:"</strong> " " {product.brand.clone()}</p>
            <p><strong>"Category:"</strong> " " {product.category.clone()}</p>
            <p><strong>"Stock:"</strong> " " {product.count_in_stock}</p>
        </div>
    }
}

/// All cards of a loaded catalog
#[component]
pub fn ProductList(
    /// Products from the last successful fetch
    page: CatalogPage,
) -> impl IntoView {
    let CatalogPage { items, rejected } = page;

    let cards = if items.is_empty() {
        view! { <p class="product-list-empty">"No products available."</p> }.into_any()
    } else {
        items
            .into_iter()
            .map(|product| view! { <ProductCard product=product /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="product-list">{cards}</div>
        {rejected_notice(rejected).map(|notice| view! {
            <p class="product-list-rejected">{notice}</p>
        })}
    }
}

/// Note shown under the list when some records failed validation
pub fn rejected_notice(rejected: usize) -> Option<String> {
    match rejected {
        0 => None,
        1 => Some("1 product could not be displayed.".to_string()),
        n => Some(format!("{} products could not be displayed.", n)),
    }
}
