#![deny(missing_docs)]

//! # Document
//!
//! The decoded OpenAPI document as the resolver sees it: the raw JSON tree that
//! references are walked against, plus the typed shim view of its `paths`.
//! Both are built once and only ever read afterwards.

use crate::error::{AppError, AppResult};
use crate::oas::models::{HttpMethod, ShimOpenApi, ShimOperation, ShimPathItem};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// A decoded OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    root: JsonValue,
    model: ShimOpenApi,
}

impl OpenApiDocument {
    /// Builds a document from an already decoded JSON/YAML tree.
    ///
    /// Fails when the tree has no `paths`, when a path item does not have the
    /// shape of a Path Item Object, or when `openapi` names a non-3.x version.
    pub fn from_value(root: JsonValue) -> AppResult<Self> {
        if root.get("paths").is_none() {
            return Err(AppError::General(
                "Invalid OpenAPI document: missing 'paths'".into(),
            ));
        }

        let model = ShimOpenApi::deserialize(&root)
            .map_err(|e| AppError::General(format!("Failed to read OpenAPI document: {}", e)))?;

        if let Some(version) = &model.openapi {
            if !version.starts_with("3.") {
                return Err(AppError::General(format!(
                    "Unsupported OpenAPI version: {}. Only 3.x is supported.",
                    version
                )));
            }
        }

        tracing::debug!(paths = model.paths.len(), "loaded OpenAPI document");
        Ok(Self { root, model })
    }

    /// The raw tree references are resolved against.
    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    /// The declared `openapi` version, if any.
    pub fn version(&self) -> Option<&str> {
        self.model.openapi.as_deref()
    }

    /// Iterates `(template, path item)` pairs in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &ShimPathItem)> {
        self.model
            .paths
            .items
            .iter()
            .map(|(path, item)| (path.as_str(), item))
    }

    /// Looks up a path item by its exact template.
    pub fn path_item(&self, path: &str) -> Option<&ShimPathItem> {
        self.model.paths.items.get(path)
    }

    /// Looks up an operation by path template and method.
    pub fn operation(&self, path: &str, method: HttpMethod) -> Option<&ShimOperation> {
        self.path_item(path)?.operation(method)
    }
}
