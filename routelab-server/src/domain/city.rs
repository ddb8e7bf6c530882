//! City coordinates.

use serde::Serialize;

/// Geographic position and region of a city.
///
/// Serialized in the short form the map frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCoord {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Region (UF) code, e.g. "AM".
    #[serde(rename = "uf")]
    pub region: String,
}

impl CityCoord {
    pub fn new(latitude: f64, longitude: f64, region: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            region: region.into(),
        }
    }
}
