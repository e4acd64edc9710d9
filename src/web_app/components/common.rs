// web_app/components/common.rs - Reusable UI components
//
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading placeholder
///
/// Displays a spinner with a message below it.
#[component]
pub fn Loading(
    /// Message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="loading-spinner"></div>
            <p class="loading-message">{message}</p>
        </div>
    }
}

/// Error display component
///
/// Shows the one-line failure summary and the API address that was used,
/// so a misconfigured deployment can be spotted from the page itself.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    /// Base address of the product API
    api_base: String,
) -> impl IntoView {
    view! {
        <div class="error-box" role="alert">
            <p><strong>"Error:"</strong> " " {error}</p>
            <p><small>"API URL: " {api_base}</small></p>
            <p><small>"Check browser console for more details"</small></p>
        </div>
    }
}
