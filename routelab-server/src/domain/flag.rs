//! Sustainability flag parsing.
//!
//! The `isXX10%` columns arrive in whatever shape the spreadsheet export
//! produced: blanks, `0`/`1`, `1,0`, `TRUE`, `Sim`, `Y`... This module folds all
//! of them into a plain `bool`.

use super::route::parse_decimal;

/// Tokens accepted as "true" when a flag cell holds text.
const TRUTHY: [&str; 5] = ["Y", "1", "TRUE", "SIM", "YES"];

/// A scalar value as it may appear in a flag column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagValue<'a> {
    /// No value at all.
    Missing,
    /// Already a boolean.
    Bool(bool),
    /// A number; only exact zero is false.
    Number(f64),
    /// Free text, matched against the truthy tokens.
    Text(&'a str),
}

impl<'a> FlagValue<'a> {
    /// Classify a raw CSV cell.
    ///
    /// Blank cells are `Missing`, cells that parse as a (decimal-comma) number
    /// are `Number`, everything else is `Text`. A NaN cell is `Missing`.
    pub fn from_cell(cell: &'a str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return FlagValue::Missing;
        }
        match parse_decimal(trimmed) {
            Some(n) if n.is_nan() => FlagValue::Missing,
            Some(n) => FlagValue::Number(n),
            None => FlagValue::Text(trimmed),
        }
    }
}

/// Parse a flag value into a boolean.
///
/// Never fails: anything unrecognised is `false`.
pub fn parse_flag(value: FlagValue<'_>) -> bool {
    match value {
        FlagValue::Missing => false,
        FlagValue::Bool(b) => b,
        FlagValue::Number(n) => !n.is_nan() && n != 0.0,
        FlagValue::Text(s) => {
            let upper = s.trim().to_uppercase();
            TRUTHY.contains(&upper.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_text_tokens() {
        assert!(parse_flag(FlagValue::Text("Y")));
        assert!(parse_flag(FlagValue::Text("yes")));
        assert!(parse_flag(FlagValue::Text("SIM")));
        assert!(parse_flag(FlagValue::Text("sim")));
        assert!(parse_flag(FlagValue::Text(" True ")));
        assert!(parse_flag(FlagValue::Text("1")));
    }

    #[test]
    fn falsy_text_tokens() {
        assert!(!parse_flag(FlagValue::Text("0")));
        assert!(!parse_flag(FlagValue::Text("N")));
        assert!(!parse_flag(FlagValue::Text("não")));
        assert!(!parse_flag(FlagValue::Text("")));
        assert!(!parse_flag(FlagValue::Text("yess")));
    }

    #[test]
    fn numbers() {
        assert!(parse_flag(FlagValue::Number(2.5)));
        assert!(parse_flag(FlagValue::Number(-1.0)));
        assert!(!parse_flag(FlagValue::Number(0.0)));
        assert!(!parse_flag(FlagValue::Number(-0.0)));
        assert!(!parse_flag(FlagValue::Number(f64::NAN)));
    }

    #[test]
    fn missing_and_bool() {
        assert!(!parse_flag(FlagValue::Missing));
        assert!(parse_flag(FlagValue::Bool(true)));
        assert!(!parse_flag(FlagValue::Bool(false)));
    }

    #[test]
    fn cell_classification() {
        assert_eq!(FlagValue::from_cell(""), FlagValue::Missing);
        assert_eq!(FlagValue::from_cell("   "), FlagValue::Missing);
        assert_eq!(FlagValue::from_cell("NaN"), FlagValue::Missing);
        assert_eq!(FlagValue::from_cell("1,0"), FlagValue::Number(1.0));
        assert_eq!(FlagValue::from_cell("0"), FlagValue::Number(0.0));
        assert_eq!(FlagValue::from_cell(" Sim "), FlagValue::Text("Sim"));
    }

    #[test]
    fn cells_end_to_end() {
        assert!(parse_flag(FlagValue::from_cell("1")));
        assert!(parse_flag(FlagValue::from_cell("1,0")));
        assert!(parse_flag(FlagValue::from_cell("YES")));
        assert!(!parse_flag(FlagValue::from_cell("0")));
        assert!(!parse_flag(FlagValue::from_cell("0,0")));
        assert!(!parse_flag(FlagValue::from_cell("")));
    }
}
