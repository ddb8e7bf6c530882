//! CSV ingestion of the route dataset and the city coordinate table.
//!
//! Both files are spreadsheet exports: `;`-delimited, decimal commas,
//! Latin-1 unless configured otherwise.

mod cities;
mod error;
mod routes;
mod table;

use std::path::Path;

pub use cities::{load_cities_if_present, load_cities_reader};
pub use error::IngestError;
pub use routes::{load_routes, load_routes_reader};
pub use table::TextEncoding;

use crate::competitiveness::EngineConfig;
use crate::store::DataContext;

/// Load both files and build the data context.
///
/// Blocking; call from a blocking task when running inside the server.
pub fn load_context(
    routes_path: &Path,
    cities_path: &Path,
    encoding: TextEncoding,
    engine: EngineConfig,
) -> Result<DataContext, IngestError> {
    let coords = load_cities_if_present(cities_path, encoding)?;
    let rows = load_routes(routes_path, encoding)?;
    Ok(DataContext::new(rows, coords, engine))
}
