#![deny(missing_docs)]

//! # OAS Resolve CLI
//!
//! Command Line Interface over the OpenAPI resolver core.
//!
//! Supported Commands:
//! - `resources`: Lists resources and the paths grouped under them.
//! - `plan`: Prints routes, resolved parameters and schema names per resource.
//! - `resolve`: Prints the value a local `$ref` points at.
//! - `route`: Rewrites a path template into routing-layer syntax.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod args;
mod error;
mod load;
mod logging;
mod plan;
mod resolve;
mod resources;
mod route;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI resolver CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List resources and their paths.
    Resources(resources::ResourcesArgs),
    /// Print the generation plan for every resource.
    Plan(plan::PlanArgs),
    /// Resolve a local `$ref` against the document.
    Resolve(resolve::ResolveArgs),
    /// Rewrite a path template into routing-layer syntax.
    Route(route::RouteArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Resources(args) => resources::execute(args)?,
        Commands::Plan(args) => plan::execute(args)?,
        Commands::Resolve(args) => resolve::execute(args)?,
        Commands::Route(args) => route::execute(args),
    }

    Ok(())
}
