//! City coordinate table loader.
//!
//! ```csv
//! nodeName;nodeLat;nodeLon;nodeUf
//! Manaus - AM;-3,119;-60,021;AM
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{CityCoord, columns::city};

use super::error::IngestError;
use super::table::{Columns, TextEncoding, reader};

/// Load the coordinate table, or an empty table if the file does not exist.
///
/// Coordinates only enrich responses, so a missing file is not fatal.
pub fn load_cities_if_present(
    path: &Path,
    encoding: TextEncoding,
) -> Result<HashMap<String, CityCoord>, IngestError> {
    if !path.exists() {
        warn!(path = %path.display(), "city coordinate file not found; continuing without coordinates");
        return Ok(HashMap::new());
    }

    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let coords = load_cities_reader(file, encoding)?;
    info!(path = %path.display(), cities = coords.len(), "city coordinates read");
    Ok(coords)
}

/// Parse a coordinate table from any `Read` source.
///
/// Names are trimmed. Rows with a blank name or unparseable coordinates are
/// skipped. A later row for the same name replaces an earlier one.
pub fn load_cities_reader<R: Read>(
    source: R,
    encoding: TextEncoding,
) -> Result<HashMap<String, CityCoord>, IngestError> {
    let mut csv_reader = reader(source);
    let headers = csv_reader.byte_headers()?.clone();
    let cols = Columns::from_headers(&headers, encoding);

    for column in [city::NAME, city::LAT, city::LON] {
        if !cols.contains(column) {
            return Err(IngestError::MissingColumn { column });
        }
    }

    let mut coords = HashMap::new();

    for result in csv_reader.byte_records() {
        let record = result?;
        let Some(name) = cols.text(&record, city::NAME) else {
            continue;
        };
        let lat = cols.number(&record, city::LAT);
        let lon = cols.number(&record, city::LON);
        let (Some(latitude), Some(longitude)) = (lat, lon) else {
            debug!(city = %name, "skipping city with unparseable coordinates");
            continue;
        };
        let region = cols.text(&record, city::UF).unwrap_or_default();

        coords.insert(name, CityCoord::new(latitude, longitude, region));
    }

    Ok(coords)
}
