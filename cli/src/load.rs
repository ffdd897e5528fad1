#![deny(missing_docs)]

//! # Document Loader
//!
//! Reads an OpenAPI file from disk and decodes it into the tree the resolver
//! core consumes. `.yaml`/`.yml` files go through `serde_yaml`, anything else
//! is read as JSON.

use crate::error::{CliError, CliResult};
use oas_resolver_core::OpenApiDocument;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads and decodes the document at `path`.
pub fn load_document(path: &Path) -> CliResult<OpenApiDocument> {
    if !path.exists() {
        return Err(CliError::General(format!(
            "OpenAPI file not found: {:?}",
            path
        )));
    }

    let content = fs::read_to_string(path)?;
    let tree = decode(path, &content)?;
    tracing::info!(path = %path.display(), "loaded OpenAPI file");
    Ok(OpenApiDocument::from_value(tree)?)
}

fn decode(path: &Path, content: &str) -> CliResult<Value> {
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml_and_json() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("openapi.yaml");
        fs::write(
            &yaml_path,
            "openapi: 3.0.0\ninfo: {title: T, version: '1'}\npaths:\n  /widgets: {}\n",
        )
        .unwrap();
        let doc = load_document(&yaml_path).unwrap();
        assert!(doc.path_item("/widgets").is_some());

        let json_path = dir.path().join("openapi.json");
        fs::write(&json_path, r#"{"openapi": "3.1.0", "paths": {"/users": {}}}"#).unwrap();
        let doc = load_document(&json_path).unwrap();
        assert_eq!(doc.version(), Some("3.1.0"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CliError::General(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        fs::write(&path, "openapi: 3.0.0").unwrap();
        assert!(matches!(load_document(&path), Err(CliError::Json(_))));
    }
}
