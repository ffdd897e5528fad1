#![deny(missing_docs)]

//! # OAS Resolver Core
//!
//! Pure, read-only resolution over a decoded OpenAPI 3.x document: which
//! resource a path belongs to, which schema a body or response references, and
//! what the concrete parameters of an operation are.

/// Shared error types.
pub mod error;

/// Lookup keys passed into the pipeline.
pub mod config;

/// OpenAPI (OAS) resolution utilities.
pub mod oas;

/// Resource/operation planning for code generators.
pub mod plan;

pub use config::{LookupConfig, JSON_MIME, STATUS_CREATED, STATUS_OK};
pub use error::{AppError, AppResult, ResolveError, ResolveResult};
pub use oas::{
    content_schema_ref, flatten_operations, group_by_resource, prefix_schema,
    remove_schema_prefix, resolve_effective_parameters, resolve_parameters, resolve_ref,
    resolve_ref_as, schema_ref_for_request_body, schema_ref_for_response,
    schema_ref_for_response_with_document, to_routing_template, HttpMethod, OpenApiDocument,
    OperationEntry, ParameterLocation, ReferenceKind, ResourceGroups, ShimOperation,
    ShimParameter, ShimPathItem,
};
pub use plan::{plan_resources, ResourcePlan, RoutePlan};
