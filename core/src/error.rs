//! # Error Handling
//!
//! Provides the resolver failure kinds (`ResolveError`) and the unified
//! `AppError` enum used across the workspace.

use crate::oas::ref_utils::ReferenceKind;
use derive_more::{Display, From};

/// A convention violation found while resolving a document.
///
/// Every variant names the key or reference that could not be satisfied so the
/// generation pipeline can report which part of the document is at fault.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ResolveError {
    /// The reference does not start with the `#` root marker.
    #[display("Unsupported {kind} reference '{reference}': only references starting with #/ are supported")]
    UnsupportedReferenceKind {
        /// The reference as written in the document.
        reference: String,
        /// What the reference looked like instead.
        kind: ReferenceKind,
    },

    /// Pointer traversal reached a missing key or index.
    #[display("Invalid ref: {reference}")]
    DanglingReference {
        /// The reference as written in the document.
        reference: String,
    },

    /// The operation declares no `responses`.
    #[display("operation.responses must be defined")]
    MissingResponses,

    /// The requested status code is not a key of `responses`.
    #[display("No response is defined for code {status}")]
    UnknownStatusCode {
        /// The status code that was looked up.
        status: String,
    },

    /// The matched response has no `content`.
    #[display("Operation response {status} has no content")]
    MissingResponseContent {
        /// The status code of the matched response.
        status: String,
    },

    /// The operation has no usable `requestBody`.
    #[display("Operation must have requestBody.content defined: {reason}")]
    MissingRequestBody {
        /// Which part of the request body was missing or unsupported.
        reason: &'static str,
    },

    /// The requested MIME type is not a key of the content map.
    #[display("No content is defined for {content_type}")]
    UnknownContentType {
        /// The MIME type that was looked up.
        content_type: String,
    },

    /// The matched media type has no `schema`.
    #[display("Schema is not defined for {content_type} content")]
    MissingSchema {
        /// The MIME type of the matched media type.
        content_type: String,
    },

    /// The matched schema is a literal object where a `$ref` is required.
    #[display("Schema for {content_type} content is not a reference")]
    SchemaNotAReference {
        /// The MIME type of the matched media type.
        content_type: String,
    },

    /// A reference resolved, but its target does not have the expected shape.
    #[display("Reference '{reference}' does not point at the expected object: {detail}")]
    MalformedTarget {
        /// The reference as written in the document.
        reference: String,
        /// Deserializer message describing the mismatch.
        detail: String,
    },
}

impl std::error::Error for ResolveError {}

/// Helper type alias for Result using ResolveError.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A document convention violation.
    #[display("Resolve Error: {_0}")]
    Resolve(ResolveError),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
