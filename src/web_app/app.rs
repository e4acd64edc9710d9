// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet, and routing. Configuration comes in as
// a prop from whichever entry point mounted the app.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::CatalogConfig;
use crate::web_app::pages::ProductPage;

pub const APP_TITLE: &str = "MyMart Products";
pub const STYLESHEET_HREF: &str = "/pkg/mymart_catalog.css";

/// Root application component
#[component]
pub fn App(
    /// Resolved configuration (API base address)
    config: CatalogConfig,
) -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let api_base = RwSignal::new(config.api_base);

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="MyMart product catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href=STYLESHEET_HREF />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=move || view! { <ProductPage api_base=api_base /> } />
                    <Route path=path!("/products") view=move || view! { <ProductPage api_base=api_base /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go to Products"</a>
        </div>
    }
}
