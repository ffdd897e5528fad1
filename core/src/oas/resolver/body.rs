#![deny(missing_docs)]

//! # Body Resolution
//!
//! Locates the schema reference of an operation's request body.

use crate::error::{ResolveError, ResolveResult};
use crate::oas::models::ShimOperation;
use crate::oas::resolver::content::content_schema_ref;
use utoipa::openapi::RefOr;

/// Returns the schema `$ref` of the request body declared for `content_type`.
///
/// # Errors
///
/// * `MissingRequestBody` if there is no request body, it is itself a
///   `$ref` (unsupported), or it has no `content`.
/// * `UnknownContentType`, `MissingSchema`, `SchemaNotAReference` from the media type.
pub fn schema_ref_for_request_body(
    operation: &ShimOperation,
    content_type: &str,
) -> ResolveResult<String> {
    let body = match &operation.request_body {
        Some(RefOr::T(body)) => body,
        Some(RefOr::Ref(_)) => {
            return Err(ResolveError::MissingRequestBody {
                reason: "referenced request bodies are not supported",
            })
        }
        None => {
            return Err(ResolveError::MissingRequestBody {
                reason: "no requestBody declared",
            })
        }
    };

    let content = body
        .content
        .as_ref()
        .ok_or(ResolveError::MissingRequestBody {
            reason: "requestBody has no content",
        })?;
    content_schema_ref(content, content_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn op(value: serde_json::Value) -> ShimOperation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_json_body() {
        let op = op(json!({
            "requestBody": {
                "content": {
                    "application/json": { "schema": { "$ref": "#/components/schemas/WidgetCreateInput" } }
                }
            }
        }));
        assert_eq!(
            schema_ref_for_request_body(&op, "application/json").unwrap(),
            "#/components/schemas/WidgetCreateInput"
        );
    }

    #[test]
    fn test_missing_request_body_variants() {
        let cases = [
            json!({}),
            json!({ "requestBody": { "$ref": "#/components/requestBodies/Widget" } }),
            json!({ "requestBody": { "description": "no content" } }),
        ];
        for case in cases {
            assert!(matches!(
                schema_ref_for_request_body(&op(case), "application/json"),
                Err(ResolveError::MissingRequestBody { .. })
            ));
        }
    }

    #[test]
    fn test_inline_body_schema_is_rejected() {
        let op = op(json!({
            "requestBody": {
                "content": { "application/json": { "schema": { "type": "object" } } }
            }
        }));
        assert_eq!(
            schema_ref_for_request_body(&op, "application/json"),
            Err(ResolveError::SchemaNotAReference {
                content_type: "application/json".into()
            })
        );
        assert!(matches!(
            schema_ref_for_request_body(&op, "multipart/form-data"),
            Err(ResolveError::UnknownContentType { .. })
        ));
    }
}
