//! Reading and writing the project manifest
//!
//! The manifest is a JSON object (`composer.json` by default) whose `version`
//! field holds the persisted version. Key order, number spelling and the
//! trailing newline are kept when the document is written back.

use crate::error::{Result, VersionBumpError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Version used when the manifest has no usable `version` field
pub const DEFAULT_VERSION: &str = "1.0.0";

const VERSION_KEY: &str = "version";

/// Where the current version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Read from the manifest
    Manifest,
    /// Field absent, null or empty; the default was used
    Defaulted,
}

/// A loaded manifest document
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
    trailing_newline: bool,
}

impl Manifest {
    /// Load and parse a manifest file
    ///
    /// # Returns
    /// * `Ok(Manifest)` - Parsed document
    /// * `Err` - If the file cannot be read, is not JSON, or is not a JSON object
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            VersionBumpError::manifest(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let mut manifest = Self::parse(&contents)?;
        manifest.path = path.to_path_buf();
        debug!(path = %path.display(), "loaded manifest");
        Ok(manifest)
    }

    /// Parse a manifest from JSON text, without a backing file path
    pub fn parse(contents: &str) -> Result<Self> {
        let document = match serde_json::from_str::<Value>(contents)? {
            Value::Object(map) => map,
            other => {
                return Err(VersionBumpError::manifest(format!(
                    "Manifest must be a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(Manifest {
            path: PathBuf::new(),
            document,
            trailing_newline: contents.ends_with('\n'),
        })
    }

    /// Current version, or `default_version` when the field is absent, null or blank
    pub fn version_or(&self, default_version: &str) -> Result<(String, VersionSource)> {
        match self.document.get(VERSION_KEY) {
            None | Some(Value::Null) => Ok((default_version.to_string(), VersionSource::Defaulted)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Ok((default_version.to_string(), VersionSource::Defaulted))
            }
            Some(Value::String(s)) => Ok((s.trim().to_string(), VersionSource::Manifest)),
            Some(other) => Err(VersionBumpError::manifest(format!(
                "Field '{}' must be a string, found {}",
                VERSION_KEY,
                json_kind(other)
            ))),
        }
    }

    /// Current version, defaulting to [`DEFAULT_VERSION`]
    pub fn version(&self) -> Result<(String, VersionSource)> {
        self.version_or(DEFAULT_VERSION)
    }

    /// Replace or insert the `version` field
    pub fn set_version(&mut self, version: &str) {
        self.document
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
    }

    /// Serialize with four-space indentation
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.document.serialize(&mut serializer)?;

        let mut out = String::from_utf8(buf)
            .map_err(|e| VersionBumpError::manifest(format!("Invalid UTF-8 output: {}", e)))?;
        if self.trailing_newline {
            out.push('\n');
        }
        Ok(out)
    }

    /// Write the document back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(VersionBumpError::manifest(
                "Manifest has no file path to save to",
            ));
        }
        fs::write(&self.path, self.to_json_string()?)?;
        debug!(path = %self.path.display(), "wrote manifest");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
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
    use super::*;

    #[test]
    fn test_version_read() {
        let manifest = Manifest::parse(r#"{"name": "acme/pkg", "version": "1.4.2"}"#).unwrap();
        assert_eq!(
            manifest.version().unwrap(),
            ("1.4.2".to_string(), VersionSource::Manifest)
        );
    }

    #[test]
    fn test_version_missing_defaults() {
        let manifest = Manifest::parse(r#"{"name": "acme/pkg"}"#).unwrap();
        assert_eq!(
            manifest.version().unwrap(),
            ("1.0.0".to_string(), VersionSource::Defaulted)
        );
    }

    #[test]
    fn test_version_empty_or_null_defaults() {
        for doc in [r#"{"version": ""}"#, r#"{"version": "   "}"#, r#"{"version": null}"#] {
            let manifest = Manifest::parse(doc).unwrap();
            assert_eq!(manifest.version().unwrap().1, VersionSource::Defaulted);
        }
    }

    #[test]
    fn test_version_custom_default() {
        let manifest = Manifest::parse("{}").unwrap();
        assert_eq!(manifest.version_or("0.1.0").unwrap().0, "0.1.0");
    }

    #[test]
    fn test_version_not_a_string() {
        let manifest = Manifest::parse(r#"{"version": 3}"#).unwrap();
        let err = manifest.version().unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Manifest::parse("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            Manifest::parse("{").unwrap_err(),
            VersionBumpError::Json(_)
        ));
    }

    #[test]
    fn test_set_version_keeps_key_order() {
        let mut manifest = Manifest::parse(
            r#"{"name": "acme/pkg", "version": "1.0.0", "require": {"php": ">=8.1"}}"#,
        )
        .unwrap();
        manifest.set_version("1.0.1");
        let out = manifest.to_json_string().unwrap();
        let expected = "{\n    \"name\": \"acme/pkg\",\n    \"version\": \"1.0.1\",\n    \"require\": {\n        \"php\": \">=8.1\"\n    }\n}";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_set_version_inserts_missing_field() {
        let mut manifest = Manifest::parse("{\"name\": \"acme/pkg\"}\n").unwrap();
        manifest.set_version("1.0.1");
        let out = manifest.to_json_string().unwrap();
        assert!(out.ends_with("\"version\": \"1.0.1\"\n}\n"));
    }

    #[test]
    fn test_slashes_not_escaped() {
        let manifest = Manifest::parse(r#"{"name": "acme/pkg"}"#).unwrap();
        assert!(manifest.to_json_string().unwrap().contains("acme/pkg"));
    }

    #[test]
    fn test_save_without_path_fails() {
        let manifest = Manifest::parse("{}").unwrap();
        assert!(manifest.save().is_err());
    }

    #[test]
    fn test_numbers_written_back_as_read() {
        let mut manifest = Manifest::parse(
            r#"{"version":"1.0.0","extra":{"ratio":1.10,"big":123456789012345678901234,"exp":1e3,"neg":-0.50}}"#,
        )
        .unwrap();
        manifest.set_version("1.0.1");
        let out = manifest.to_json_string().unwrap();

        assert!(out.contains("\"ratio\": 1.10"), "{}", out);
        assert!(out.contains("\"big\": 123456789012345678901234"), "{}", out);
        assert!(out.contains("\"exp\": 1e3"), "{}", out);
        assert!(out.contains("\"neg\": -0.50"), "{}", out);
        assert!(out.contains("\"version\": \"1.0.1\""), "{}", out);
    }
}
