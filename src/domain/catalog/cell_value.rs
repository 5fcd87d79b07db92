// ============================================================
// CELL VALUE
// ============================================================
// Scalar cell decoded from a CSV record or a workbook sheet

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Longest leading decimal literal, the way a lenient float parse reads "46 EGP"
static LEADING_FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// A single decoded cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Build a text cell, collapsing whitespace-only input to `Empty`
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    /// Whether the cell carries no usable content
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Empty => true,
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Trimmed textual form, `None` for blank cells
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Empty => None,
        }
    }

    /// Numeric reading of the cell.
    ///
    /// Numbers pass through, text is read up to its longest numeric prefix,
    /// everything else (and unparsable text) yields 0.
    pub fn as_price(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_leading_float(s).unwrap_or(0.0),
            CellValue::Bool(_) | CellValue::Empty => 0.0,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Parse the leading decimal literal of `input`, ignoring any trailing text
pub fn parse_leading_float(input: &str) -> Option<f64> {
    LEADING_FLOAT_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
