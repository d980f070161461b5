//! Core translation lookup.
//!
//! Core translations are the strings that ship with the application. They are
//! distinct from the custom translations mapping a language carries: language
//! variables may never shadow a core string, so `create` consults this lookup
//! before inserting a new key.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Built-in panel strings. A representative subset; the full set is shipped
/// with the application.
const BUILTIN_STRINGS: &[(&str, &str)] = &[
    ("add", "Add"),
    ("cancel", "Cancel"),
    ("change", "Change"),
    ("close", "Close"),
    ("confirm", "Ok"),
    ("copy", "Copy"),
    ("create", "Create"),
    ("delete", "Delete"),
    ("discard", "Discard"),
    ("duplicate", "Duplicate"),
    ("edit", "Edit"),
    ("insert", "Insert"),
    ("open", "Open"),
    ("remove", "Remove"),
    ("rename", "Rename"),
    ("replace", "Replace"),
    ("save", "Save"),
    ("search", "Search"),
];

/// Read-only lookup over the application's built-in translation strings.
///
/// Cheap to clone; the underlying table is shared.
#[derive(Debug, Clone, Default)]
pub struct CoreTranslations {
    strings: Arc<BTreeMap<String, String>>,
}

impl CoreTranslations {
    /// Build a lookup over an explicit string table.
    pub fn new(strings: BTreeMap<String, String>) -> Self {
        Self {
            strings: Arc::new(strings),
        }
    }

    /// The built-in panel string set.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_STRINGS
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Look up a core string by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}
