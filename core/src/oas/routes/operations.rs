#![deny(missing_docs)]

//! # Operation Flattening
//!
//! Turns `(path, path item)` pairs into one entry per declared operation.

use crate::oas::models::{HttpMethod, ShimOperation, ShimPathItem};

/// One operation together with where it was declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationEntry<'a> {
    /// Path template the operation sits under.
    pub path: &'a str,
    /// HTTP method the operation is declared for.
    pub method: HttpMethod,
    /// The path item holding the operation (for path-level parameters).
    pub path_item: &'a ShimPathItem,
    /// The operation itself.
    pub operation: &'a ShimOperation,
}

/// Flattens path items into operations: path order first, then method order.
pub fn flatten_operations<'a, I>(paths: I) -> Vec<OperationEntry<'a>>
where
    I: IntoIterator<Item = (&'a str, &'a ShimPathItem)>,
{
    paths
        .into_iter()
        .flat_map(|(path, path_item)| {
            path_item
                .operations()
                .map(move |(method, operation)| OperationEntry {
                    path,
                    method,
                    path_item,
                    operation,
                })
        })
        .collect()
}
