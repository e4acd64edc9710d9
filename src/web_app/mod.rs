// web_app/mod.rs - Root module for the Leptos product listing application
//
// Architecture:
// - model/: Product records and the page's view state (client and server)
// - config.rs: Explicit API base address, injected into the app
// - error.rs: Fetch failure taxonomy and the messages users see
// - api/: The catalog request and its HTTP transport
// - state.rs: Supersession of stale fetches
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod error;
pub mod api;
pub mod state;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
