// web_app/pages/products.rs - Product listing page
//
// Fetches the catalog when the page is displayed, and again whenever the
// API base address changes, then renders one of loading, error or list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{fetch_catalog, HttpTransport};
use crate::web_app::components::*;
use crate::web_app::config::ApiBase;
use crate::web_app::model::ViewState;
use crate::web_app::state::CatalogController;

/// Product listing page
///
/// The fetch runs in the browser only. Effects do not run during SSR, so the
/// server renders the initial `Loading` state and hydration takes over.
#[component]
pub fn ProductPage(
    /// Base address of the product API
    #[prop(into)]
    api_base: Signal<ApiBase>,
) -> impl IntoView {
    let controller = RwSignal::new(CatalogController::new());
    let view_state = Memo::new(move |_| controller.with(|c| c.state().clone()));

    Effect::new(move || {
        let base = api_base.get();
        let Some(ticket) = controller.try_update(|c| c.begin(&base)).flatten() else {
            return;
        };

        spawn_local(async move {
            let transport = HttpTransport::new();
            let outcome = fetch_catalog(&transport, ticket.base()).await;
            // None once the page is gone; the response is simply dropped
            let _ = controller.try_update(|c| c.complete(&ticket, outcome));
        });
    });

    view! {
        {move || view! {
            <CatalogView state=view_state.get() api_base=api_base.get() />
        }}
    }
}

/// Renders one `ViewState`
///
/// Loading wins over everything, then the error, then the list.
#[component]
pub fn CatalogView(
    /// What to show
    state: ViewState,
    /// Base address, shown alongside errors
    api_base: ApiBase,
) -> impl IntoView {
    let body = match state {
        ViewState::Loading => view! { <Loading message="Loading products..." /> }.into_any(),
        ViewState::Failed(error) => view! {
            <ErrorDisplay error=error api_base=api_base.to_string() />
        }
        .into_any(),
        ViewState::Loaded(page) => view! { <ProductList page=page /> }.into_any(),
    };

    view! {
        <div class="product-page">
            <h2>"Product List"</h2>
            {body}
        </div>
    }
}
