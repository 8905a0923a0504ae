use plist::{Dictionary, Value};
use std::path::Path;

use crate::bundle::error::BundleError;

/// Read access to one node of a parsed summary document.
///
/// Every accessor answers a missing or mistyped key with an absent value, never an error.
pub trait Node: Sized {
    fn get_string(&self, key: &str) -> Option<&str>;

    fn get_double(&self, key: &str) -> Option<f64>;

    fn get_integer(&self, key: &str) -> Option<i64>;

    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Child nodes under `key` in document order. Elements that are not nodes are skipped.
    fn get_list(&self, key: &str) -> Vec<&Self>;

    fn get_owned_string(&self, key: &str) -> Option<String> {
        self.get_string(key).map(str::to_owned)
    }
}

impl Node for Dictionary {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_string)
    }

    fn get_double(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Real(value) => Some(*value),
            Value::Integer(value) => value
                .as_signed()
                .map(|v| v as f64)
                .or_else(|| value.as_unsigned().map(|v| v as f64)),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    fn get_integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Integer(value) => value.as_signed(),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Boolean(value)) => *value,
            Some(Value::String(value)) => value.parse().unwrap_or(default),
            _ => default,
        }
    }

    fn get_list(&self, key: &str) -> Vec<&Self> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_dictionary).collect())
            .unwrap_or_default()
    }
}

/// Reads a summary file, XML or binary, whose root must be a dictionary.
pub fn load_document(path: &Path) -> Result<Dictionary, BundleError> {
    Value::from_file(path)?
        .into_dictionary()
        .ok_or_else(|| BundleError::InvalidRoot(path.to_path_buf()))
}

#[cfg(test)]
mod test {
    use super::*;

    fn node() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("Title".to_owned(), Value::from("Start Test"));
        dict.insert("Start".to_owned(), Value::from(12.5));
        dict.insert("Line".to_owned(), Value::from(42i64));
        dict.insert("Text".to_owned(), Value::from("1.25"));
        dict.insert("Flag".to_owned(), Value::from(true));
        dict.insert(
            "Items".to_owned(),
            Value::Array(vec![
                Value::Dictionary(Dictionary::new()),
                Value::from("not a node"),
                Value::Dictionary(Dictionary::new()),
            ]),
        );
        dict
    }

    #[test]
    fn test_typed_access() {
        let node = node();
        assert_eq!(node.get_string("Title"), Some("Start Test"));
        assert_eq!(node.get_double("Start"), Some(12.5));
        assert_eq!(node.get_double("Line"), Some(42.0));
        assert_eq!(node.get_double("Text"), Some(1.25));
        assert_eq!(node.get_integer("Line"), Some(42));
        assert!(node.get_bool("Flag", false));
        assert_eq!(node.get_list("Items").len(), 2);
    }

    #[test]
    fn test_missing_or_mistyped_keys_are_absent() {
        let node = node();
        assert_eq!(node.get_string("Missing"), None);
        assert_eq!(node.get_string("Start"), None);
        assert_eq!(node.get_double("Title"), None);
        assert_eq!(node.get_integer("Start"), None);
        assert!(!node.get_bool("Missing", false));
        assert!(node.get_bool("Title", true));
        assert!(node.get_list("Title").is_empty());
        assert!(node.get_list("Missing").is_empty());
    }

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Run_TestSummaries.plist");
        Value::Dictionary(node()).to_file_xml(&path).unwrap();

        let loaded = load_document(&path).unwrap();

        assert_eq!(loaded.get_string("Title"), Some("Start Test"));
    }

    #[test]
    fn test_load_document_rejects_non_dictionary_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Run_TestSummaries.plist");
        Value::Array(vec![]).to_file_xml(&path).unwrap();

        match load_document(&path) {
            Err(BundleError::InvalidRoot(root)) => assert_eq!(root, path),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_load_document_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Run_TestSummaries.plist");
        std::fs::write(&path, "<plist><dict><key>Broken</key>").unwrap();

        assert!(load_document(&path).is_err());
    }
}
