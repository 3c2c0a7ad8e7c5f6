//! Application state for the HTTP server.

use std::sync::Arc;

use crate::fetcher::ContributionFetcher;
use crate::layout::LayoutConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached contribution fetcher
    pub fetcher: Arc<ContributionFetcher>,
    /// Arc geometry used by every layout endpoint
    pub layout: Arc<LayoutConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(fetcher: ContributionFetcher, layout: LayoutConfig) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            layout: Arc::new(layout),
        }
    }
}
