#![deny(missing_docs)]

//! # Pointer Walking
//!
//! A generic "walk by path segments" primitive over a JSON tree, and the
//! splitting of local `$ref` strings into those segments.
//!
//! Segments are used verbatim. JSON Pointer escapes (`~0`, `~1`) are *not*
//! decoded, so a key containing `/` cannot be addressed.

use crate::error::{ResolveError, ResolveResult};
use crate::oas::ref_utils::classify_reference;
use serde_json::Value as JsonValue;

/// The leading segment every supported reference must carry.
pub const ROOT_MARKER: &str = "#";

/// Indexes one level into `node`: objects by key, arrays by decimal position.
///
/// Scalars cannot be indexed and yield `None`.
pub fn step<'a>(node: &'a JsonValue, segment: &str) -> Option<&'a JsonValue> {
    match node {
        JsonValue::Object(map) => map.get(segment),
        JsonValue::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Walks `root` by successive `segments`, returning `None` at the first miss.
pub fn walk<'a, 'b, I>(root: &'a JsonValue, segments: I) -> Option<&'a JsonValue>
where
    I: IntoIterator<Item = &'b str>,
{
    segments.into_iter().try_fold(root, |node, segment| {
        let next = step(node, segment);
        tracing::trace!(segment, found = next.is_some(), "pointer step");
        next
    })
}

/// Splits a reference on `/`, checking the `#` root marker.
///
/// `"#/components/schemas/User"` yields `["components", "schemas", "User"]`;
/// a bare `"#"` yields no segments and therefore addresses the root.
pub fn split_reference(reference: &str) -> ResolveResult<Vec<&str>> {
    let mut parts = reference.split('/');
    match parts.next() {
        Some(ROOT_MARKER) => Ok(parts.collect()),
        _ => Err(ResolveError::UnsupportedReferenceKind {
            reference: reference.to_string(),
            kind: classify_reference(reference),
        }),
    }
}

// Array positions are plain decimal digits; "+1" or "01" style forms are not indices.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0" || (!segment.starts_with('0') && !segment.is_empty());
    if canonical && segment.bytes().all(|b| b.is_ascii_digit()) {
        segment.parse().ok()
    } else {
        None
    }
}
