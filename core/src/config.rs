#![deny(missing_docs)]

//! # Lookup Configuration
//!
//! The conventional keys the generation pipeline asks the schema locators for.
//! They travel as an explicit value so no resolver carries a hidden default.

/// Status code of a successful read/update response.
pub const STATUS_OK: &str = "200";

/// Status code of a successful create response.
pub const STATUS_CREATED: &str = "201";

/// MIME type of JSON payloads.
pub const JSON_MIME: &str = "application/json";

/// Keys used when locating request and response schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Response status read for every method but `post`.
    pub ok_status: String,
    /// Response status read for `post`.
    pub created_status: String,
    /// Content type read for both request and response bodies.
    pub json_mime: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            ok_status: STATUS_OK.to_string(),
            created_status: STATUS_CREATED.to_string(),
            json_mime: JSON_MIME.to_string(),
        }
    }
}
