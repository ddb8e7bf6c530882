//! Exact-match route index.

use std::collections::HashMap;

use super::rows::RowStore;

/// Maps (origin, destination) to the position of a record in the row store.
///
/// Keys are the trimmed names exactly as stored, case-sensitive. When the
/// dataset holds the same pair more than once, the last row wins.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    by_origin: HashMap<String, HashMap<String, usize>>,
    len: usize,
}

impl RouteIndex {
    /// Build the index over every row of the store.
    pub fn build(store: &RowStore) -> Self {
        let mut by_origin: HashMap<String, HashMap<String, usize>> = HashMap::new();
        let mut len = 0;

        for (pos, row) in store.rows().iter().enumerate() {
            let previous = by_origin
                .entry(row.origin_name.clone())
                .or_default()
                .insert(row.destination_name.clone(), pos);
            if previous.is_none() {
                len += 1;
            }
        }

        Self { by_origin, len }
    }

    /// Row position for an exact (origin, destination) pair.
    pub fn get(&self, origin: &str, destination: &str) -> Option<usize> {
        self.by_origin.get(origin)?.get(destination).copied()
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
