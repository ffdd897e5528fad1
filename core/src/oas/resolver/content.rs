#![deny(missing_docs)]

//! # Content Resolution
//!
//! The media-type step shared by request bodies and responses.

use crate::error::{ResolveError, ResolveResult};
use crate::oas::models::ContentMap;
use utoipa::openapi::RefOr;

/// Returns the `$ref` of the schema declared for `content_type` in `content`.
///
/// # Errors
///
/// * `UnknownContentType` if `content_type` is not a key of `content`.
/// * `MissingSchema` if the media type declares no schema.
/// * `SchemaNotAReference` if the schema is written inline.
pub fn content_schema_ref(content: &ContentMap, content_type: &str) -> ResolveResult<String> {
    let media = content
        .get(content_type)
        .ok_or_else(|| ResolveError::UnknownContentType {
            content_type: content_type.to_string(),
        })?;

    match &media.schema {
        Some(RefOr::Ref(r)) => Ok(r.ref_location.clone()),
        Some(RefOr::T(_)) => Err(ResolveError::SchemaNotAReference {
            content_type: content_type.to_string(),
        }),
        None => Err(ResolveError::MissingSchema {
            content_type: content_type.to_string(),
        }),
    }
}
