#![deny(missing_docs)]

//! # Resolver Module
//!
//! Answers the structural questions a code generator asks of one operation.
//!
//! Handles:
//! - Locating the `$ref` of a response or request body schema.
//! - Parameter resolution (Inline and Reference).
//!
//! Schemas are never resolved here: callers receive the reference string and
//! decide whether they need more than its name.

pub mod body;
pub mod content;
pub mod params;
pub mod responses;

pub use body::schema_ref_for_request_body;
pub use content::content_schema_ref;
pub use params::{resolve_effective_parameters, resolve_parameter, resolve_parameters};
pub use responses::{schema_ref_for_response, schema_ref_for_response_with_document};
