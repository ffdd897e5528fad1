#![deny(missing_docs)]

//! # Resource Planning
//!
//! The walk the generation pipeline performs over a document: group paths by
//! resource, flatten each group into operations, then ask the resolvers for
//! parameters and body/response schema names of every operation.

use crate::config::LookupConfig;
use crate::error::{AppResult, ResolveError, ResolveResult};
use crate::oas::document::OpenApiDocument;
use crate::oas::models::{HttpMethod, ShimParameter};
use crate::oas::ref_utils::remove_schema_prefix;
use crate::oas::resolver::{
    resolve_effective_parameters, schema_ref_for_request_body,
    schema_ref_for_response_with_document,
};
use crate::oas::routes::{
    flatten_operations, group_by_resource, to_routing_template, OperationEntry, PathGroup,
};
use serde::Serialize;

/// Everything the generator needs for one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcePlan {
    /// Resource name (first path segment).
    pub resource: String,
    /// One entry per operation, in path then method order.
    pub routes: Vec<RoutePlan>,
}

/// Everything the generator needs for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// OpenAPI path template, e.g. `/widgets/{id}`.
    pub path: String,
    /// Colon-style template for the routing layer, e.g. `/widgets/:id`.
    pub routing_path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// `operationId`, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Resolved parameters, operation-level first.
    pub parameters: Vec<ShimParameter>,
    /// Name of the request body schema, when a request body is declared.
    pub request_schema: Option<String>,
    /// Name of the response schema, when the expected status has a body.
    pub response_schema: Option<String>,
}

/// Plans every resource of `document`.
///
/// The first convention violation aborts the run with its typed error.
pub fn plan_resources(
    document: &OpenApiDocument,
    config: &LookupConfig,
) -> AppResult<Vec<ResourcePlan>> {
    group_by_resource(document)
        .iter()
        .map(|(resource, paths)| plan_resource(document, config, resource, paths))
        .collect()
}

/// Plans one resource group.
pub fn plan_resource(
    document: &OpenApiDocument,
    config: &LookupConfig,
    resource: &str,
    paths: &PathGroup<'_>,
) -> AppResult<ResourcePlan> {
    let mut routes = Vec::new();
    for entry in flatten_operations(paths.iter().map(|(path, item)| (*path, *item))) {
        let route = plan_route(document, config, &entry).map_err(|e| {
            tracing::warn!(
                resource,
                path = entry.path,
                method = %entry.method,
                error = %e,
                "resolution failed"
            );
            e
        })?;
        routes.push(route);
    }

    tracing::debug!(resource, routes = routes.len(), "planned resource");
    Ok(ResourcePlan {
        resource: resource.to_string(),
        routes,
    })
}

/// The response status whose schema describes the result of `method`.
pub fn response_status(config: &LookupConfig, method: HttpMethod) -> &str {
    match method {
        HttpMethod::Post => &config.created_status,
        _ => &config.ok_status,
    }
}

fn plan_route(
    document: &OpenApiDocument,
    config: &LookupConfig,
    entry: &OperationEntry<'_>,
) -> ResolveResult<RoutePlan> {
    let operation = entry.operation;
    let parameters = resolve_effective_parameters(document, entry.path_item, operation)?;

    let request_schema = match &operation.request_body {
        Some(_) => Some(remove_schema_prefix(&schema_ref_for_request_body(
            operation,
            &config.json_mime,
        )?)),
        None => None,
    };

    // A missing status or a body-less response just means there is nothing to map.
    let response_schema = match schema_ref_for_response_with_document(
        document,
        operation,
        response_status(config, entry.method),
        &config.json_mime,
    ) {
        Ok(reference) => Some(remove_schema_prefix(&reference)),
        Err(ResolveError::UnknownStatusCode { .. } | ResolveError::MissingResponseContent { .. }) => {
            None
        }
        Err(e) => return Err(e),
    };

    Ok(RoutePlan {
        path: entry.path.to_string(),
        routing_path: to_routing_template(entry.path),
        method: entry.method,
        operation_id: operation.operation_id.clone(),
        parameters,
        request_schema,
        response_schema,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn doc(yaml: &str) -> OpenApiDocument {
        OpenApiDocument::from_value(serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    const WIDGETS: &str = r#"
openapi: 3.0.3
info: {title: Widgets, version: "1"}
paths:
  /widgets:
    get:
      operationId: listWidgets
      parameters:
        - $ref: '#/components/parameters/PageSize'
      responses:
        '200':
          description: OK
          content:
            application/json:
              schema: {$ref: '#/components/schemas/WidgetList'}
    post:
      operationId: createWidget
      requestBody:
        content:
          application/json:
            schema: {$ref: '#/components/schemas/WidgetCreateInput'}
      responses:
        '201':
          description: Created
          content:
            application/json:
              schema: {$ref: '#/components/schemas/Widget'}
  /widgets/{id}:
    parameters:
      - name: id
        in: path
        required: true
        schema: {type: string}
    delete:
      responses:
        '204': {description: Deleted}
  /users:
    get:
      responses:
        '200': {$ref: '#/components/responses/Users'}
components:
  parameters:
    PageSize: {name: pageSize, in: query, schema: {type: integer}}
  responses:
    Users:
      description: OK
      content:
        application/json:
          schema: {$ref: '#/components/schemas/UserList'}
"#;

    #[test]
    fn test_plan_resources() {
        let plans = plan_resources(&doc(WIDGETS), &LookupConfig::default()).unwrap();
        assert_eq!(plans.len(), 2);

        let widgets = &plans[0];
        assert_eq!(widgets.resource, "widgets");
        assert_eq!(widgets.routes.len(), 3);

        let list = &widgets.routes[0];
        assert_eq!(list.method, HttpMethod::Get);
        assert_eq!(list.parameters[0].name, "pageSize");
        assert_eq!(list.request_schema, None);
        assert_eq!(list.response_schema.as_deref(), Some("WidgetList"));

        let create = &widgets.routes[1];
        assert_eq!(create.method, HttpMethod::Post);
        assert_eq!(create.request_schema.as_deref(), Some("WidgetCreateInput"));
        assert_eq!(create.response_schema.as_deref(), Some("Widget"));

        let delete = &widgets.routes[2];
        assert_eq!(delete.routing_path, "/widgets/:id");
        assert_eq!(delete.parameters[0].name, "id");
        assert_eq!(delete.response_schema, None);

        let users = &plans[1];
        assert_eq!(users.routes[0].response_schema.as_deref(), Some("UserList"));
    }

    #[test]
    fn test_config_is_honoured() {
        let config = LookupConfig {
            ok_status: "201".into(),
            ..LookupConfig::default()
        };
        let plans = plan_resources(&doc(WIDGETS), &config).unwrap();
        assert_eq!(plans[0].routes[0].response_schema, None);
        assert_eq!(response_status(&config, HttpMethod::Get), "201");
    }

    #[test]
    fn test_violation_aborts_plan() {
        let yaml = r#"
paths:
  /widgets:
    post:
      requestBody:
        content:
          application/json:
            schema: {type: object}
      responses:
        '201': {description: Created}
"#;
        let err = plan_resources(&doc(yaml), &LookupConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::SchemaNotAReference { .. })
        ));
    }
}
