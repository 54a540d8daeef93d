//! JSON input loading from local files and URLs.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Load a JSON object from a local file.
///
/// Fails if the file cannot be read, does not contain valid JSON, or
/// its top-level value is not an object.
pub fn load_json_from_file(path: impl AsRef<Path>) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| Error::parse(path.display().to_string(), e))?;
    into_object(value, path.display().to_string())
}

/// Load a JSON object from a URL.
///
/// Fails if the request fails, the response is not valid JSON, or its
/// top-level value is not an object.
pub fn load_json_from_url(url: &str) -> Result<Map<String, Value>> {
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|e| Error::http(url, e))?;
    let content = response.text().map_err(|e| Error::http(url, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| Error::parse(url, e))?;
    into_object(value, url.to_string())
}

fn into_object(value: Value, origin: String) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::not_an_object(origin, value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.json");
        fs::write(&path, r#"{"id": 1, "name": "ada"}"#).unwrap();

        let data = load_json_from_file(&path).unwrap();

        assert_eq!(data["id"], 1);
        assert_eq!(data["name"], "ada");
    }

    #[test]
    fn test_load_preserves_key_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ordered.json");
        fs::write(&path, r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();

        let data = load_json_from_file(&path).unwrap();

        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        let err = load_json_from_file(&path).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_json_from_file(&path).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load_json_from_file(&path).unwrap_err();
        match *err {
            Error::NotAnObject { found, .. } => assert_eq!(found, "an array"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
