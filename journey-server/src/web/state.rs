//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::LineSequenceCache;
use crate::planner::PlannerConfig;
use crate::tfl::TflClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// TfL API client
    pub tfl: Arc<TflClient>,

    /// Line stop sequences, shared across requests
    pub cache: Arc<LineSequenceCache>,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(tfl: TflClient, cache: LineSequenceCache, config: PlannerConfig) -> Self {
        Self {
            tfl: Arc::new(tfl),
            cache: Arc::new(cache),
            config: Arc::new(config),
        }
    }
}
