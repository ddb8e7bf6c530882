//! The row store: every parsed route record, in dataset order.

use std::collections::BTreeSet;

use crate::domain::RouteRecord;

/// The set of column names present in the dataset header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: BTreeSet<String>,
}

impl Schema {
    /// Create a schema from header names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the column was present in the header.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    /// The first column from `required` that is absent, if any.
    pub fn first_missing<'a>(&self, required: &[&'a str]) -> Option<&'a str> {
        required.iter().copied().find(|c| !self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// All route records loaded from the dataset.
///
/// Duplicates are kept: the engine aggregates over every row.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    rows: Vec<RouteRecord>,
    schema: Schema,
}

impl RowStore {
    pub fn new(rows: Vec<RouteRecord>, schema: Schema) -> Self {
        Self { rows, schema }
    }

    pub fn rows(&self) -> &[RouteRecord] {
        &self.rows
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
