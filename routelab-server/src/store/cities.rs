//! City name registry and coordinate lookup.

use std::collections::{BTreeSet, HashMap};

use crate::domain::CityCoord;

use super::rows::RowStore;

/// Every city named in the dataset, plus the coordinates we know about.
///
/// A city may appear in routes without having coordinates; that only
/// degrades map enrichment.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    names: BTreeSet<String>,
    coords: HashMap<String, CityCoord>,
}

impl CityRegistry {
    /// Build the registry from the routes and a name → coordinate table.
    pub fn build(store: &RowStore, coords: HashMap<String, CityCoord>) -> Self {
        let names = store
            .rows()
            .iter()
            .flat_map(|r| [r.origin_name.clone(), r.destination_name.clone()])
            .collect();

        Self { names, coords }
    }

    /// All city names, sorted and deduplicated.
    pub fn list_cities(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Coordinates of a city, if known.
    pub fn coordinates_of(&self, name: &str) -> Option<&CityCoord> {
        self.coords.get(name)
    }

    /// The whole coordinate table.
    pub fn coordinates(&self) -> &HashMap<String, CityCoord> {
        &self.coords
    }

    /// Cities that appear in routes but have no coordinates.
    pub fn without_coordinates(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .filter(|n| !self.coords.contains_key(n.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteRecord;
    use crate::store::Schema;

    fn registry() -> CityRegistry {
        let rows = vec![
            RouteRecord::new("Manaus - AM", "Belém - PA"),
            RouteRecord::new("Belém - PA", "Manaus - AM"),
            RouteRecord::new("Manaus - AM", "Curitiba - PR"),
        ];
        let mut coords = HashMap::new();
        coords.insert(
            "Manaus - AM".to_string(),
            CityCoord::new(-3.1, -60.0, "AM"),
        );
        CityRegistry::build(&RowStore::new(rows, Schema::default()), coords)
    }

    #[test]
    fn lists_sorted_unique_names() {
        let reg = registry();
        assert_eq!(
            reg.list_cities(),
            vec!["Belém - PA", "Curitiba - PR", "Manaus - AM"]
        );
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn coordinate_lookup() {
        let reg = registry();
        assert_eq!(reg.coordinates_of("Manaus - AM").unwrap().region, "AM");
        assert!(reg.coordinates_of("Belém - PA").is_none());
        assert_eq!(reg.coordinates().len(), 1);
    }

    #[test]
    fn reports_cities_without_coordinates() {
        let reg = registry();
        let missing: Vec<_> = reg.without_coordinates().collect();
        assert_eq!(missing, vec!["Belém - PA", "Curitiba - PR"]);
    }
}
