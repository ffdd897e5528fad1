#![deny(missing_docs)]

//! # Resource Grouping
//!
//! Partitions the declared paths by their first path segment.

use crate::oas::document::OpenApiDocument;
use crate::oas::models::ShimPathItem;
use indexmap::IndexMap;

/// Path items of one resource, keyed by template, in declaration order.
pub type PathGroup<'a> = IndexMap<&'a str, &'a ShimPathItem>;

/// All resources of a document, in order of first appearance.
pub type ResourceGroups<'a> = IndexMap<&'a str, PathGroup<'a>>;

/// The resource a path template belongs to: its first segment after the leading `/`.
///
/// `"/"` (and any template without a second segment) belongs to `""`.
pub fn resource_name(path: &str) -> &str {
    path.split('/').nth(1).unwrap_or_default()
}

/// Groups every path of `document` under its resource name.
///
/// Every path lands in exactly one group; resources are compared by exact
/// string equality.
pub fn group_by_resource(document: &OpenApiDocument) -> ResourceGroups<'_> {
    let mut resources = ResourceGroups::new();
    for (path, item) in document.paths() {
        // TODO: group nested resources (`/users/{id}/posts`) under their deepest collection.
        resources
            .entry(resource_name(path))
            .or_default()
            .insert(path, item);
    }
    tracing::debug!(resources = resources.len(), "grouped paths by resource");
    resources
}
