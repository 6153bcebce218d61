//! Web layer for the journey planner.
//!
//! Provides the JSON journey search endpoint and a health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
