#![deny(missing_docs)]

//! # OpenAPI Resolution Module
//!
//! - **document**: The decoded document and its typed view.
//! - **models**: Shim definitions for the objects the resolver reads.
//! - **pointer**: Walk-by-segments primitive over the raw tree.
//! - **ref_utils**: `$ref` resolution and schema-name helpers.
//! - **resolver**: Schema locators and parameter resolution.
//! - **routes**: Resource grouping, operation flattening, routing templates.

pub mod document;
pub mod models;
pub mod pointer;
pub mod ref_utils;
pub mod resolver;
pub mod routes;

pub use document::OpenApiDocument;
pub use models::{
    ContentMap, HttpMethod, ParameterLocation, ShimMediaType, ShimOperation, ShimParameter,
    ShimPathItem, ShimRequestBody, ShimResponse,
};
pub use ref_utils::{
    classify_reference, prefix_schema, remove_schema_prefix, resolve_ref, resolve_ref_as,
    ReferenceKind, SCHEMA_PREFIX,
};
pub use resolver::{
    content_schema_ref, resolve_effective_parameters, resolve_parameters,
    schema_ref_for_request_body, schema_ref_for_response, schema_ref_for_response_with_document,
};
pub use routes::{
    flatten_operations, group_by_resource, to_routing_template, OperationEntry, ResourceGroups,
};
