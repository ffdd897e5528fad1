#![deny(missing_docs)]

//! # Shared Arguments
//!
//! Argument groups reused by several subcommands.

use crate::error::CliResult;
use oas_resolver_core::{LookupConfig, JSON_MIME, STATUS_CREATED, STATUS_OK};
use serde::Serialize;
use std::path::PathBuf;

/// Location of the OpenAPI document.
#[derive(clap::Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Path to the OpenAPI document (`.yaml`, `.yml` or `.json`).
    #[clap(long, default_value = "docs/openapi.yaml")]
    pub openapi_path: PathBuf,
}

/// Keys used when looking up request and response schemas.
#[derive(clap::Args, Debug, Clone)]
pub struct LookupArgs {
    /// Status code read for non-create operations.
    #[clap(long, env = "OAS_RESOLVE_OK_STATUS", default_value = STATUS_OK)]
    pub ok_status: String,

    /// Status code read for `post` operations.
    #[clap(long, env = "OAS_RESOLVE_CREATED_STATUS", default_value = STATUS_CREATED)]
    pub created_status: String,

    /// Content type read for request and response bodies.
    #[clap(long, env = "OAS_RESOLVE_JSON_MIME", default_value = JSON_MIME)]
    pub json_mime: String,
}

impl From<&LookupArgs> for LookupConfig {
    fn from(args: &LookupArgs) -> Self {
        Self {
            ok_status: args.ok_status.clone(),
            created_status: args.created_status.clone(),
            json_mime: args.json_mime.clone(),
        }
    }
}

/// Output encoding for structured reports.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Encodes `value` in this format.
    pub fn render<T: Serialize>(self, value: &T) -> CliResult<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}
