#![deny(missing_docs)]

//! # Resolve Command
//!
//! Prints the value a local `$ref` points at.

use crate::args::{DocumentArgs, OutputFormat};
use crate::error::CliResult;
use crate::load::load_document;
use oas_resolver_core::resolve_ref;

/// Arguments for the resolve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Document to read.
    #[clap(flatten)]
    pub document: DocumentArgs,

    /// Reference to resolve, e.g. `#/components/schemas/User`.
    pub reference: String,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Executes the resolve command.
pub fn execute(args: &ResolveArgs) -> CliResult<()> {
    let document = load_document(&args.document.openapi_path)?;
    let value = resolve_ref(&document, &args.reference)?;
    println!("{}", args.format.render(value)?);
    Ok(())
}
