//! Shared CSV plumbing: dialect, text decoding, and header lookup.

use std::collections::HashMap;
use std::io::Read;

use csv::{ByteRecord, Reader, ReaderBuilder};

use crate::domain::parse_decimal;

/// Text encoding of the dataset files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1, the encoding of the spreadsheet exports.
    #[default]
    Latin1,
    Utf8,
}

impl TextEncoding {
    /// Parse an encoding name such as `latin1` or `utf-8`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Some(TextEncoding::Latin1),
            "utf8" | "utf-8" => Some(TextEncoding::Utf8),
            _ => None,
        }
    }

    /// Decode raw field bytes.
    ///
    /// Latin-1 maps every byte to the code point of the same value, so it
    /// never fails. Invalid UTF-8 is replaced rather than rejected.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Open a `;`-delimited reader with a header row.
pub(super) fn reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

/// Column positions from a header row.
#[derive(Debug)]
pub(super) struct Columns {
    positions: HashMap<String, usize>,
    encoding: TextEncoding,
}

impl Columns {
    pub(super) fn from_headers(headers: &ByteRecord, encoding: TextEncoding) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(pos, raw)| {
                let name = encoding.decode(raw);
                let name = name.trim_start_matches('\u{feff}').trim().to_string();
                (name, pos)
            })
            .collect();

        Self {
            positions,
            encoding,
        }
    }

    pub(super) fn contains(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    pub(super) fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// Decoded, trimmed text of a cell; `None` when the column or cell is
    /// absent or blank.
    pub(super) fn text(&self, record: &ByteRecord, column: &str) -> Option<String> {
        let pos = *self.positions.get(column)?;
        let raw = record.get(pos)?;
        let text = self.encoding.decode(raw);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Numeric value of a cell. Unparseable and NaN cells are `None`;
    /// infinities are kept.
    pub(super) fn number(&self, record: &ByteRecord, column: &str) -> Option<f64> {
        self.text(record, column)
            .and_then(|s| parse_decimal(&s))
            .filter(|v| !v.is_nan())
    }
}
