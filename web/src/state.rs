//! Application state shared across HTTP handlers.

use podium_core::Catalog;
use std::sync::Arc;

/// State injected into every handler: the catalog instance.
///
/// The catalog is an explicitly constructed dependency, not a module-level
/// singleton, so tests build isolated instances freely. Cloning is cheap
/// (one `Arc` bump per request).
#[derive(Clone)]
pub struct AppState {
    /// The authoritative event catalog.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Build state around an existing catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::new()))
    }
}
