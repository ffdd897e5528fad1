#![deny(missing_docs)]

//! # Resources Command
//!
//! Lists every resource of a document with the paths grouped under it.

use crate::args::DocumentArgs;
use crate::error::CliResult;
use crate::load::load_document;
use oas_resolver_core::{group_by_resource, OpenApiDocument};

/// Arguments for the resources command.
#[derive(clap::Args, Debug, Clone)]
pub struct ResourcesArgs {
    /// Document to read.
    #[clap(flatten)]
    pub document: DocumentArgs,
}

/// Renders one line per resource followed by its indented paths.
pub fn render(document: &OpenApiDocument) -> String {
    let mut out = String::new();
    for (resource, paths) in group_by_resource(document) {
        let name = if resource.is_empty() { "(root)" } else { resource };
        out.push_str(&format!("{}\n", name));
        for path in paths.keys() {
            out.push_str(&format!("  {}\n", path));
        }
    }
    out
}

/// Executes the resources command.
pub fn execute(args: &ResourcesArgs) -> CliResult<()> {
    let document = load_document(&args.document.openapi_path)?;
    print!("{}", render(&document));
    Ok(())
}
