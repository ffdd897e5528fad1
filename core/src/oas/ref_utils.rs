#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Resolution of `$ref` strings against the document they appear in.
//!
//! Only local references (`#/...`) are followed. Nothing is ever fetched: a
//! relative or remote reference fails with `UnsupportedReferenceKind`.

use crate::error::{ResolveError, ResolveResult};
use crate::oas::document::OpenApiDocument;
use crate::oas::pointer::{split_reference, walk};
use derive_more::Display;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use url::Url;

/// Prefix shared by every component schema reference.
pub const SCHEMA_PREFIX: &str = "#/components/schemas/";

/// What the document part of a `$ref` points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ReferenceKind {
    /// Same document, JSON Pointer fragment (`#/...`).
    #[display("local")]
    Local,
    /// Same document, but the fragment is not a pointer (`#components`).
    #[display("plain-name fragment")]
    PlainFragment,
    /// A path relative to the current document (`common.yaml#/...`).
    #[display("relative")]
    Relative,
    /// An absolute URI (`https://example.com/api.yaml#/...`).
    #[display("remote")]
    Remote,
}

/// Classifies a reference by its document part (everything before `#`).
pub fn classify_reference(reference: &str) -> ReferenceKind {
    let (document, fragment) = reference.split_once('#').unwrap_or((reference, ""));

    if document.is_empty() {
        if fragment.is_empty() || fragment.starts_with('/') {
            ReferenceKind::Local
        } else {
            ReferenceKind::PlainFragment
        }
    } else if Url::parse(document).is_ok() {
        ReferenceKind::Remote
    } else {
        ReferenceKind::Relative
    }
}

/// Resolves `reference` against `document`, returning the value it points at.
///
/// # Errors
///
/// * `UnsupportedReferenceKind` if the reference does not start with `#`.
/// * `DanglingReference` if any segment is missing along the way.
pub fn resolve_ref<'a>(
    document: &'a OpenApiDocument,
    reference: &str,
) -> ResolveResult<&'a JsonValue> {
    resolve_in(document.root(), reference)
}

/// Resolves `reference` against an arbitrary tree.
pub fn resolve_in<'a>(root: &'a JsonValue, reference: &str) -> ResolveResult<&'a JsonValue> {
    let segments = split_reference(reference)?;
    tracing::debug!(reference, depth = segments.len(), "resolving reference");

    walk(root, segments).ok_or_else(|| ResolveError::DanglingReference {
        reference: reference.to_string(),
    })
}

/// Resolves `reference` and reads the target as `T`.
///
/// A target that exists but does not fit `T` fails with `MalformedTarget`.
pub fn resolve_ref_as<T: DeserializeOwned>(
    document: &OpenApiDocument,
    reference: &str,
) -> ResolveResult<T> {
    let value = resolve_ref(document, reference)?;
    <T as serde::Deserialize>::deserialize(value).map_err(|e| ResolveError::MalformedTarget {
        reference: reference.to_string(),
        detail: e.to_string(),
    })
}

/// Builds a component schema reference from a schema name.
pub fn prefix_schema(name: &str) -> String {
    format!("{}{}", SCHEMA_PREFIX, name)
}

/// Strips the first occurrence of `#/components/schemas/` from a reference.
///
/// References into other sections are returned unchanged.
pub fn remove_schema_prefix(reference: &str) -> String {
    reference.replacen(SCHEMA_PREFIX, "", 1)
}
