// ============================================================
// RAW ROW
// ============================================================
// One decoded record keyed by its source column header

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::CellValue;

/// Header given to columns whose header cell is blank
pub const EMPTY_HEADER: &str = "__EMPTY";

/// A single decoded data row.
///
/// Fields keep the file's column order, which is the order header
/// inference walks when looking for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Row index among data rows (0-based, header excluded)
    pub index: usize,

    fields: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new(index: usize, fields: Vec<(String, CellValue)>) -> Self {
        Self { index, fields }
    }

    /// Build a row from header/text pairs
    pub fn from_text<I, K, V>(index: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(header, value)| (header.into(), CellValue::text(value)))
            .collect();
        Self::new(index, fields)
    }

    /// Headers in column order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(header, _)| header.as_str())
    }

    /// Cell stored under `header`
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> &[(String, CellValue)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every cell is blank
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_blank())
    }
}

/// Make a decoded header row usable as row keys.
///
/// Blank headers become `__EMPTY`, and repeated headers get `_1`, `_2`, ...
/// suffixes so no two columns collide.
pub fn unique_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut taken: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();

    for header in raw {
        let trimmed = header.as_ref().trim();
        let base = if trimmed.is_empty() {
            EMPTY_HEADER.to_string()
        } else {
            trimmed.to_string()
        };

        let mut candidate = base.clone();
        while taken.contains(&candidate) {
            let suffix = suffixes.entry(base.clone()).or_insert(0);
            *suffix += 1;
            candidate = format!("{}_{}", base, suffix);
        }
        taken.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
