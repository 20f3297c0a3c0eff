//! Header validation and field helpers shared by the table parsers.

use crate::error::{OlympicsError, Result};
use csv::StringRecord;

/// Resolves named columns to positions in a CSV header.
///
/// Construction fails with [`OlympicsError::Schema`] on the first required
/// column that is absent. Optional columns resolve to `None`.
#[derive(Debug)]
pub struct HeaderIndex {
    table: &'static str,
    positions: Vec<(&'static str, Option<usize>)>,
}

impl HeaderIndex {
    pub fn new(
        table: &'static str,
        headers: &StringRecord,
        required: &[&'static str],
        optional: &[&'static str],
    ) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let mut positions = Vec::with_capacity(required.len() + optional.len());
        for &column in required {
            match find(column) {
                Some(idx) => positions.push((column, Some(idx))),
                None => return Err(OlympicsError::Schema { table, column }),
            }
        }
        for &column in optional {
            positions.push((column, find(column)));
        }
        Ok(Self { table, positions })
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.positions
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, idx)| *idx)
    }

    /// Trimmed field text, or `""` when the column or field is absent.
    pub fn text<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.position(column)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }

    /// Field text with the dataset's missing markers (`NA`, empty) mapped to `None`.
    pub fn optional_text(&self, record: &StringRecord, column: &str) -> Option<String> {
        let value = self.text(record, column);
        if is_missing(value) {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Numeric field; missing or unparseable values become `None`.
    pub fn optional_f64(&self, record: &StringRecord, column: &str) -> Option<f64> {
        let value = self.text(record, column);
        if is_missing(value) {
            return None;
        }
        value.parse().ok()
    }

    /// Integer field that must be present.
    pub fn required_i32(
        &self,
        record: &StringRecord,
        column: &'static str,
    ) -> Result<i32> {
        let value = self.text(record, column);
        value.parse().map_err(|_| OlympicsError::InvalidValue {
            table: self.table,
            line: record.position().map(|p| p.line()).unwrap_or(0),
            column,
            value: value.to_string(),
        })
    }
}

/// `NA` is the dataset's null marker.
pub fn is_missing(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "NA"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn resolves_columns_regardless_of_order() {
        let idx = HeaderIndex::new("t", &headers(&["b", "a"]), &["a", "b"], &[]).unwrap();
        let row = StringRecord::from(vec!["2", "1"]);
        assert_eq!(idx.text(&row, "a"), "1");
        assert_eq!(idx.text(&row, "b"), "2");
    }

    #[test]
    fn missing_required_column_is_schema_error() {
        let err = HeaderIndex::new("events", &headers(&["a"]), &["a", "Year"], &[]).unwrap_err();
        match err {
            OlympicsError::Schema { table, column } => {
                assert_eq!(table, "events");
                assert_eq!(column, "Year");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn optional_column_may_be_absent() {
        let idx = HeaderIndex::new("t", &headers(&["a"]), &["a"], &["notes"]).unwrap();
        let row = StringRecord::from(vec!["x"]);
        assert_eq!(idx.optional_text(&row, "notes"), None);
    }

    #[test]
    fn na_marker_is_missing() {
        let idx = HeaderIndex::new("t", &headers(&["Age"]), &["Age"], &[]).unwrap();
        assert_eq!(idx.optional_f64(&StringRecord::from(vec!["NA"]), "Age"), None);
        assert_eq!(idx.optional_f64(&StringRecord::from(vec!["24"]), "Age"), Some(24.0));
        assert!(is_missing(" "));
    }
}
