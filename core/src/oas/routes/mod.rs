#![deny(missing_docs)]

//! # Routes Module
//!
//! Partitioning of `paths` into resources, flattening of path items into
//! operations, and path-template rewriting for the routing layer.

pub mod grouping;
pub mod naming;
pub mod operations;

pub use grouping::{group_by_resource, resource_name, PathGroup, ResourceGroups};
pub use naming::to_routing_template;
pub use operations::{flatten_operations, OperationEntry};
