#![deny(missing_docs)]

//! # Route Command
//!
//! Prints the routing-layer form of a path template.

use oas_resolver_core::to_routing_template;

/// Arguments for the route command.
#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// OpenAPI path template, e.g. `/users/{id}`.
    pub path: String,
}

/// Executes the route command.
pub fn execute(args: &RouteArgs) {
    println!("{}", to_routing_template(&args.path));
}
