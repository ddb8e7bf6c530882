//! Route dataset loader.
//!
//! # CSV format
//!
//! `;`-delimited with a header row, decimal commas, Latin-1 by default:
//!
//! ```csv
//! originName;destinationName;originUf;destinationUf;pathTotalCostWithoutBR319;pathTotalCost2;...
//! Manaus - AM;Belém - PA;AM;PA;1234,5;980,0;...
//! ```
//!
//! Only `originName` and `destinationName` are mandatory. Any other known
//! column may be absent; its values are then missing, and the returned
//! schema records which columns were present.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ByteRecord;
use tracing::{debug, info};

use crate::domain::{FlagValue, RouteRecord, columns, parse_flag};
use crate::store::{RowStore, Schema};

use super::error::IngestError;
use super::table::{Columns, TextEncoding, reader};

/// Load the route dataset from a file.
pub fn load_routes(path: &Path, encoding: TextEncoding) -> Result<RowStore, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = load_routes_reader(file, encoding)?;
    info!(path = %path.display(), rows = store.len(), "route dataset read");
    Ok(store)
}

/// Like [`load_routes`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(
    source: R,
    encoding: TextEncoding,
) -> Result<RowStore, IngestError> {
    let mut csv_reader = reader(source);
    let headers = csv_reader.byte_headers()?.clone();
    let cols = Columns::from_headers(&headers, encoding);

    for column in [columns::ORIGIN_NAME, columns::DESTINATION_NAME] {
        if !cols.contains(column) {
            return Err(IngestError::MissingColumn { column });
        }
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in csv_reader.byte_records() {
        let record = result?;
        match parse_row(&cols, &record) {
            Some(row) => rows.push(row),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "rows without origin or destination dropped");
    }

    Ok(RowStore::new(rows, Schema::new(cols.names())))
}

/// Build a record from one CSV row, or `None` if either name is blank.
fn parse_row(cols: &Columns, record: &ByteRecord) -> Option<RouteRecord> {
    let origin_name = cols.text(record, columns::ORIGIN_NAME)?;
    let destination_name = cols.text(record, columns::DESTINATION_NAME)?;

    let num = |column| cols.number(record, column);
    let flag = |column| {
        cols.text(record, column)
            .is_some_and(|s| parse_flag(FlagValue::from_cell(&s)))
    };

    Some(RouteRecord {
        origin_name,
        destination_name,
        origin_uf: cols.text(record, columns::ORIGIN_UF),
        destination_uf: cols.text(record, columns::DESTINATION_UF),
        distance_baseline: num(columns::DISTANCE_BASELINE),
        transit_baseline: num(columns::TRANSIT_BASELINE),
        transit_al: num(columns::TRANSIT_AL),
        transit_lg: num(columns::TRANSIT_LG),
        transit_ml: num(columns::TRANSIT_ML),
        transit_nc: num(columns::TRANSIT_NC),
        emission_baseline: num(columns::EMISSION_BASELINE),
        emission_al: num(columns::EMISSION_AL),
        emission_lg: num(columns::EMISSION_LG),
        emission_ml: num(columns::EMISSION_ML),
        emission_nc: num(columns::EMISSION_NC),
        cost_baseline: num(columns::COST_BASELINE),
        cost_al: num(columns::COST_AL),
        cost_lg: num(columns::COST_LG),
        cost_ml: num(columns::COST_ML),
        cost_nc: num(columns::COST_NC),
        original_cost: num(columns::ORIGINAL_COST),
        with_br319_cost: num(columns::WITH_BR319_COST),
        is_al10: flag(columns::FLAG_AL),
        is_lg10: flag(columns::FLAG_LG),
        is_ml10: flag(columns::FLAG_ML),
        is_nc10: flag(columns::FLAG_NC),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "originName;destinationName;originUf;destinationUf;\
pathDistanceWithoutBR319;pathTransitTimeWithoutBR319;pathEmissionWithoutBR319;\
pathEmissionAL;pathEmissionLG;pathEmissionML;pathEmissionNC;isAL10%;isLG10%;isML10%;isNC10%;\
pathTotalCostWithoutBR319;pathTotalCost2;pathTotalCostLG;pathTotalCostML;pathTotalCostNC;\
originalCost;withBR319Cost";

    fn load(body: &str) -> RowStore {
        let data = format!("{HEADER}\n{body}");
        load_routes_reader(data.as_bytes(), TextEncoding::Utf8).unwrap()
    }

    #[test]
    fn parses_full_row() {
        let store = load(
            " Manaus - AM ;Belém - PA;AM;PA;1500,5;72;900;100;200;300;400;Y;0;SIM;;\
1000;800;850,25;;abc;1200;1000\n",
        );

        assert_eq!(store.len(), 1);
        let r = &store.rows()[0];
        assert_eq!(r.origin_name, "Manaus - AM");
        assert_eq!(r.destination_name, "Belém - PA");
        assert_eq!(r.origin_uf.as_deref(), Some("AM"));
        assert_eq!(r.distance_baseline, Some(1500.5));
        assert_eq!(r.transit_baseline, Some(72.0));
        assert_eq!(r.emission_baseline, Some(900.0));
        assert_eq!(r.emission_nc, Some(400.0));
        assert_eq!(r.cost_baseline, Some(1000.0));
        assert_eq!(r.cost_al, Some(800.0));
        assert_eq!(r.cost_lg, Some(850.25));
        assert_eq!(r.cost_ml, None);
        assert_eq!(r.cost_nc, None);
        assert_eq!(r.original_cost, Some(1200.0));
        assert_eq!(r.with_br319_cost, Some(1000.0));
        assert!(r.is_al10);
        assert!(!r.is_lg10);
        assert!(r.is_ml10);
        assert!(!r.is_nc10);
        assert_eq!(r.transit_al, None);
    }

    #[test]
    fn drops_rows_without_names() {
        let store = load(
            "A;B;;;;;;;;;;;;;;1;;;;;;\n\
             ;B;;;;;;;;;;;;;;1;;;;;;\n\
             A;  ;;;;;;;;;;;;;;1;;;;;;\n\
             C;D;;;;;;;;;;;;;;1;;;;;;\n",
        );

        let names: Vec<_> = store
            .rows()
            .iter()
            .map(|r| (r.origin_name.as_str(), r.destination_name.as_str()))
            .collect();
        assert_eq!(names, [("A", "B"), ("C", "D")]);
    }

    #[test]
    fn nan_cells_are_missing_and_infinities_kept() {
        let store = load("A;B;;;;;NaN;;;;;;;;;inf;;;;;;\n");
        let r = &store.rows()[0];
        assert_eq!(r.emission_baseline, None);
        assert!(r.cost_baseline.is_some_and(f64::is_infinite));
    }

    #[test]
    fn schema_records_present_columns() {
        let data = "originName;destinationName;pathTotalCostWithoutBR319\nA;B;10\n";
        let store = load_routes_reader(data.as_bytes(), TextEncoding::Utf8).unwrap();

        assert!(store.schema().contains(columns::COST_BASELINE));
        assert!(!store.schema().contains(columns::WITH_BR319_COST));
        assert_eq!(store.schema().len(), 3);
        assert_eq!(store.rows()[0].cost_baseline, Some(10.0));
        assert_eq!(store.rows()[0].cost_al, None);
    }

    #[test]
    fn missing_name_column_is_an_error() {
        let data = "originName;pathTotalCostWithoutBR319\nA;10\n";
        let err = load_routes_reader(data.as_bytes(), TextEncoding::Utf8).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: "destinationName"
            }
        ));
    }

    #[test]
    fn reads_latin1_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dados.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"originName;destinationName\nManaus - AM;Bel\xe9m - PA\n")
            .unwrap();
        drop(file);

        let store = load_routes(&path, TextEncoding::Latin1).unwrap();
        assert_eq!(store.rows()[0].destination_name, "Belém - PA");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_routes(Path::new("/nonexistent/dados.csv"), TextEncoding::Latin1)
            .unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
