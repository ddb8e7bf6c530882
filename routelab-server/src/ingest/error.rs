//! Ingestion error types.

use std::path::PathBuf;

/// Errors that can occur when loading dataset files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be opened
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV stream is malformed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column we cannot do without is absent from the header
    #[error("required column missing: {column}")]
    MissingColumn { column: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::MissingColumn {
            column: "originName",
        };
        assert_eq!(err.to_string(), "required column missing: originName");

        let err = IngestError::Io {
            path: PathBuf::from("data/dados.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read data/dados.csv: no such file");
    }
}
