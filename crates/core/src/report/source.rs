//! Field projection for report rows.
//!
//! The renderer reads every cell through [`FieldSource`]. Typed records
//! implement it by matching on their field names; map-backed records look
//! the name up. Both shapes can be mixed in one report via
//! `Box<dyn FieldSource>`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Value;

/// Something the report renderer can read named fields from.
pub trait FieldSource {
    /// Display text for `name`, or `None` when the record has no such field
    /// or the value is null. `None` renders as an empty cell.
    fn field(&self, name: &str) -> Option<String>;
}

/// Project `record` onto `columns`, substituting empty text for missing
/// values.
pub fn project<R: FieldSource + ?Sized>(record: &R, columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .map(|column| record.field(column).unwrap_or_default())
        .collect()
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for Box<T> {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

impl FieldSource for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<String> {
        self.as_object()?.field(name)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
