//! In-memory dataset: row store, route index, and city registry.
//!
//! Populated once from the ingestion layer and read-only afterwards.

mod cities;
mod context;
mod index;
mod rows;

pub use cities::CityRegistry;
pub use context::{DataContext, RouteMatch};
pub use index::RouteIndex;
pub use rows::{RowStore, Schema};
