#![deny(missing_docs)]

//! # Response Resolution
//!
//! Locates the schema reference of one response payload.

use crate::error::{ResolveError, ResolveResult};
use crate::oas::document::OpenApiDocument;
use crate::oas::models::{ShimOperation, ShimResponse};
use crate::oas::ref_utils::resolve_ref_as;
use crate::oas::resolver::content::content_schema_ref;
use utoipa::openapi::RefOr;

/// Returns the schema `$ref` for `status` / `content_type` of `operation`.
///
/// A response written as a `$ref` is not followed and reports
/// `MissingResponseContent`; use [`schema_ref_for_response_with_document`]
/// when such responses should be resolved.
///
/// # Errors
///
/// * `MissingResponses` if the operation declares no responses.
/// * `UnknownStatusCode` if `status` is not declared.
/// * `MissingResponseContent` if the response has no `content`.
/// * `UnknownContentType`, `MissingSchema`, `SchemaNotAReference` from the media type.
pub fn schema_ref_for_response(
    operation: &ShimOperation,
    status: &str,
    content_type: &str,
) -> ResolveResult<String> {
    match lookup_response(operation, status)? {
        RefOr::T(response) => response_schema_ref(response, status, content_type),
        RefOr::Ref(_) => Err(ResolveError::MissingResponseContent {
            status: status.to_string(),
        }),
    }
}

/// Same as [`schema_ref_for_response`], but follows a referenced response
/// through `document` before inspecting its content.
pub fn schema_ref_for_response_with_document(
    document: &OpenApiDocument,
    operation: &ShimOperation,
    status: &str,
    content_type: &str,
) -> ResolveResult<String> {
    match lookup_response(operation, status)? {
        RefOr::T(response) => response_schema_ref(response, status, content_type),
        RefOr::Ref(r) => {
            let response: ShimResponse = resolve_ref_as(document, &r.ref_location)?;
            response_schema_ref(&response, status, content_type)
        }
    }
}

fn lookup_response<'a>(
    operation: &'a ShimOperation,
    status: &str,
) -> ResolveResult<&'a RefOr<ShimResponse>> {
    let responses = operation
        .responses
        .as_ref()
        .filter(|responses| !responses.is_empty())
        .ok_or(ResolveError::MissingResponses)?;

    responses
        .get(status)
        .ok_or_else(|| ResolveError::UnknownStatusCode {
            status: status.to_string(),
        })
}

fn response_schema_ref(
    response: &ShimResponse,
    status: &str,
    content_type: &str,
) -> ResolveResult<String> {
    let content = response
        .content
        .as_ref()
        .ok_or_else(|| ResolveError::MissingResponseContent {
            status: status.to_string(),
        })?;
    content_schema_ref(content, content_type)
}
