//! Web layer for the freight route analytics service.
//!
//! Provides HTTP endpoints for route lookup, city listings and
//! competitiveness analysis, plus the static frontend.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LoadStatus};
