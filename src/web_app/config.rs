// web_app/config.rs - Configuration injected into the app
//
// The product API address is an explicit value handed to `App`, never read
// from ambient state inside components.

use std::fmt;

/// Used when `CATALOG_API_URL` is not set
pub const DEFAULT_API_BASE: &str = "https://myprojects-16nt.onrender.com/";

/// Environment variable holding the product API base address
pub const API_BASE_ENV: &str = "CATALOG_API_URL";

/// Path of the catalog endpoint, relative to the base address
pub const PRODUCTS_PATH: &str = "/api/products";

/// Root URL of the external product API
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into().trim().to_string())
    }

    /// Treat a missing or blank setting as unset
    pub fn from_setting(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ApiBase::new)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/api/products`, with trailing slashes on the base trimmed
    pub fn products_url(&self) -> String {
        format!("{}{}", self.0.trim_end_matches('/'), PRODUCTS_PATH)
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the app needs from its environment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_base: ApiBase,
}

impl CatalogConfig {
    pub fn new(api_base: ApiBase) -> Self {
        Self { api_base }
    }

    /// Build from any key lookup (env, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(API_BASE_ENV);
        Self::new(ApiBase::from_setting(value.as_deref()))
    }

    /// Read the process environment at run time
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the value baked in when the crate was compiled
    pub fn from_build_env() -> Self {
        Self::new(ApiBase::from_setting(option_env!("CATALOG_API_URL")))
    }

    /// The server reads its environment; the browser bundle can only use
    /// what was set at build time.
    pub fn resolve() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                Self::from_build_env()
            } else {
                Self::from_env()
            }
        }
    }
}
