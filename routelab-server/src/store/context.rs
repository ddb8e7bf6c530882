//! The loaded dataset and the operations served from it.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::competitiveness::{
    CompetitivenessError, CompetitivenessSummary, EngineConfig, compute_competitiveness,
};
use crate::domain::{CityCoord, RouteRecord};

use super::cities::CityRegistry;
use super::index::RouteIndex;
use super::rows::RowStore;

/// A route record with the coordinates of both ends, when known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMatch<'a> {
    pub record: &'a RouteRecord,
    pub origin: Option<&'a CityCoord>,
    pub destination: Option<&'a CityCoord>,
}

/// Everything derived from one load of the dataset.
///
/// Built once at startup and read-only afterwards, so it can be shared across
/// request handlers without locking.
#[derive(Debug, Clone)]
pub struct DataContext {
    rows: RowStore,
    index: RouteIndex,
    cities: CityRegistry,
    engine: EngineConfig,
}

impl DataContext {
    /// Derive the route index and city registry from the loaded data.
    pub fn new(rows: RowStore, coords: HashMap<String, CityCoord>, engine: EngineConfig) -> Self {
        let index = RouteIndex::build(&rows);
        let cities = CityRegistry::build(&rows, coords);

        let without_coords: Vec<&str> = cities.without_coordinates().collect();
        for name in &without_coords {
            debug!(city = %name, "no coordinates for city");
        }
        if !without_coords.is_empty() {
            warn!(
                count = without_coords.len(),
                "cities without coordinates; map enrichment will be partial"
            );
        }

        info!(
            rows = rows.len(),
            routes = index.len(),
            cities = cities.len(),
            "dataset loaded"
        );

        Self {
            rows,
            index,
            cities,
            engine,
        }
    }

    /// Exact (origin, destination) lookup with coordinate enrichment.
    pub fn lookup_route(&self, origin: &str, destination: &str) -> Option<RouteMatch<'_>> {
        let pos = self.index.get(origin, destination)?;
        let record = &self.rows.rows()[pos];

        Some(RouteMatch {
            record,
            origin: self.cities.coordinates_of(&record.origin_name),
            destination: self.cities.coordinates_of(&record.destination_name),
        })
    }

    /// Competitiveness analysis for an origin.
    pub fn competitiveness(
        &self,
        origin: &str,
    ) -> Result<CompetitivenessSummary, CompetitivenessError> {
        compute_competitiveness(&self.rows, origin, &self.engine)
    }

    /// Sorted names of every city in the dataset.
    pub fn cities(&self) -> Vec<&str> {
        self.cities.list_cities()
    }

    /// All known city coordinates.
    pub fn city_coords(&self) -> &HashMap<String, CityCoord> {
        self.cities.coordinates()
    }
}
