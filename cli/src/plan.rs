#![deny(missing_docs)]

//! # Plan Command
//!
//! Prints the per-resource generation plan: routes, resolved parameters and
//! schema names.

use crate::args::{DocumentArgs, LookupArgs, OutputFormat};
use crate::error::CliResult;
use crate::load::load_document;
use oas_resolver_core::{plan_resources, LookupConfig};

/// Arguments for the plan command.
#[derive(clap::Args, Debug, Clone)]
pub struct PlanArgs {
    /// Document to read.
    #[clap(flatten)]
    pub document: DocumentArgs,

    /// Lookup keys.
    #[clap(flatten)]
    pub lookup: LookupArgs,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Executes the plan command.
pub fn execute(args: &PlanArgs) -> CliResult<()> {
    let document = load_document(&args.document.openapi_path)?;
    let config = LookupConfig::from(&args.lookup);
    let plans = plan_resources(&document, &config)?;
    println!("{}", args.format.render(&plans)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn lookup() -> LookupArgs {
        LookupArgs {
            ok_status: "200".into(),
            created_status: "201".into(),
            json_mime: "application/json".into(),
        }
    }

    #[test]
    fn test_execute_plans_document() {
        let dir = tempdir().unwrap();
        let openapi_path = dir.path().join("openapi.yaml");
        let yaml = r#"
openapi: 3.0.0
info: {title: T, version: '1'}
paths:
  /widgets/{id}:
    get:
      responses:
        '200':
          description: OK
          content:
            application/json:
              schema: {$ref: '#/components/schemas/Widget'}
"#;
        fs::write(&openapi_path, yaml).unwrap();

        let args = PlanArgs {
            document: DocumentArgs { openapi_path },
            lookup: lookup(),
            format: OutputFormat::Yaml,
        };
        execute(&args).unwrap();
    }

    #[test]
    fn test_execute_reports_violation() {
        let dir = tempdir().unwrap();
        let openapi_path = dir.path().join("openapi.json");
        fs::write(
            &openapi_path,
            r#"{"paths": {"/widgets": {"get": {"responses": {}}}}}"#,
        )
        .unwrap();

        let args = PlanArgs {
            document: DocumentArgs { openapi_path },
            lookup: lookup(),
            format: OutputFormat::Json,
        };
        let err = execute(&args).unwrap_err();
        assert!(err.to_string().contains("operation.responses must be defined"));
    }
}
