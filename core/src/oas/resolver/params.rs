#![deny(missing_docs)]

//! # Parameter Resolution
//!
//! Replaces referenced parameters with the Parameter Objects they point at,
//! keeping declaration order.

use crate::error::ResolveResult;
use crate::oas::document::OpenApiDocument;
use crate::oas::models::{ParameterLocation, ShimOperation, ShimParameter, ShimPathItem};
use crate::oas::ref_utils::resolve_ref_as;
use std::collections::HashSet;
use utoipa::openapi::RefOr;

/// Resolves one declared parameter.
pub fn resolve_parameter(
    document: &OpenApiDocument,
    param: &RefOr<ShimParameter>,
) -> ResolveResult<ShimParameter> {
    match param {
        RefOr::T(param) => Ok(param.clone()),
        RefOr::Ref(r) => resolve_ref_as(document, &r.ref_location),
    }
}

/// Returns the operation's parameters with every `$ref` entry resolved.
///
/// An operation without `parameters` yields an empty list. The first failing
/// reference aborts the whole call.
pub fn resolve_parameters(
    document: &OpenApiDocument,
    operation: &ShimOperation,
) -> ResolveResult<Vec<ShimParameter>> {
    operation
        .parameters
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|param| resolve_parameter(document, param))
        .collect()
}

/// Resolves operation parameters followed by the path-level ones.
///
/// A path-level parameter is dropped when the operation declares one with the
/// same `(name, in)` pair.
pub fn resolve_effective_parameters(
    document: &OpenApiDocument,
    path_item: &ShimPathItem,
    operation: &ShimOperation,
) -> ResolveResult<Vec<ShimParameter>> {
    let mut params = resolve_parameters(document, operation)?;
    let mut seen: HashSet<(String, ParameterLocation)> = params
        .iter()
        .map(|p| (p.name.clone(), p.location))
        .collect();

    for param in path_item.parameters.as_deref().unwrap_or_default() {
        let param = resolve_parameter(document, param)?;
        if seen.insert((param.name.clone(), param.location)) {
            params.push(param);
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::oas::models::HttpMethod;
    use crate::oas::ref_utils::{resolve_ref, ReferenceKind};

    fn doc() -> OpenApiDocument {
        let yaml = r#"
openapi: 3.0.3
info: {title: T, version: "1"}
paths:
  /widgets:
    parameters:
      - name: tenant
        in: header
      - name: limit
        in: query
        schema: {type: integer}
    get:
      parameters:
        - name: limit
          in: query
          required: true
          schema: {type: integer, maximum: 50}
        - $ref: '#/components/parameters/PageSize'
      responses:
        '200': {description: OK}
    post:
      parameters:
        - $ref: '#/components/parameters/Missing'
      responses:
        '201': {description: Created}
    put:
      parameters:
        - $ref: 'common.yaml#/components/parameters/Tenant'
      responses:
        '200': {description: OK}
    delete:
      responses:
        '204': {description: Deleted}
components:
  parameters:
    PageSize:
      name: pageSize
      in: query
      required: false
      schema: {$ref: '#/components/schemas/Size', nullable: true, example: 20}
"#;
        OpenApiDocument::from_value(serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_parameters_preserves_order() {
        let doc = doc();
        let op = doc.operation("/widgets", HttpMethod::Get).unwrap();
        let params = resolve_parameters(&doc, op).unwrap();

        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["limit", "pageSize"]);
        assert!(params[0].is_required());
        assert_eq!(params[1].location, ParameterLocation::Query);
    }

    #[test]
    fn test_resolved_parameter_equals_target() {
        let doc = doc();
        let op = doc.operation("/widgets", HttpMethod::Get).unwrap();
        let params = resolve_parameters(&doc, op).unwrap();

        let target = resolve_ref(&doc, "#/components/parameters/PageSize").unwrap();
        assert_eq!(serde_json::to_value(&params[1]).unwrap(), *target);
        assert_eq!(params[1].required, Some(false));
    }

    #[test]
    fn test_external_parameter_reference_propagates() {
        let doc = doc();
        let op = doc.operation("/widgets", HttpMethod::Put).unwrap();
        assert_eq!(
            resolve_parameters(&doc, op),
            Err(ResolveError::UnsupportedReferenceKind {
                reference: "common.yaml#/components/parameters/Tenant".into(),
                kind: ReferenceKind::Relative,
            })
        );
    }

    #[test]
    fn test_no_parameters_is_empty() {
        let doc = doc();
        let op = doc.operation("/widgets", HttpMethod::Delete).unwrap();
        assert!(resolve_parameters(&doc, op).unwrap().is_empty());
    }

    #[test]
    fn test_dangling_parameter_reference_propagates() {
        let doc = doc();
        let op = doc.operation("/widgets", HttpMethod::Post).unwrap();
        assert_eq!(
            resolve_parameters(&doc, op),
            Err(ResolveError::DanglingReference {
                reference: "#/components/parameters/Missing".into()
            })
        );
    }

    #[test]
    fn test_effective_parameters_operation_overrides_path() {
        let doc = doc();
        let item = doc.path_item("/widgets").unwrap();
        let op = item.get.as_ref().unwrap();
        let params = resolve_effective_parameters(&doc, item, op).unwrap();

        let keys: Vec<(&str, ParameterLocation)> =
            params.iter().map(|p| (p.name.as_str(), p.location)).collect();
        assert_eq!(
            keys,
            [
                ("limit", ParameterLocation::Query),
                ("pageSize", ParameterLocation::Query),
                ("tenant", ParameterLocation::Header),
            ]
        );
        // the operation-level `limit` wins
        assert!(params[0].is_required());
    }
}
