#![deny(missing_docs)]

//! # OpenAPI Shims
//!
//! Typed, read-only views over the parts of an OpenAPI 3.x document the resolver
//! inspects. They act as an intermediate deserialization layer: fields the
//! resolver never reads are ignored, and every "object or reference" slot the
//! resolver branches on is a `RefOr<T>` so callers match on the tag instead of
//! probing for `$ref`.

use derive_more::Display;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use utoipa::openapi::RefOr;

/// A MIME-type keyed map of media types (`content`).
pub type ContentMap = IndexMap<String, ShimMediaType>;

/// HTTP methods that may carry an Operation inside a Path Item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `get`
    #[display("get")]
    Get,
    /// `put`
    #[display("put")]
    Put,
    /// `post`
    #[display("post")]
    Post,
    /// `delete`
    #[display("delete")]
    Delete,
    /// `options`
    #[display("options")]
    Options,
    /// `head`
    #[display("head")]
    Head,
    /// `patch`
    #[display("patch")]
    Patch,
    /// `trace`
    #[display("trace")]
    Trace,
}

impl HttpMethod {
    /// All methods, in the order Path Item Objects list them.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];
}

/// Location of a parameter (`in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Query string parameter.
    #[display("query")]
    Query,
    /// Request header.
    #[display("header")]
    Header,
    /// Templated path segment.
    #[display("path")]
    Path,
    /// Cookie value.
    #[display("cookie")]
    Cookie,
}

/// Root document view: version marker and `paths`.
///
/// `components` is deliberately absent; it is only ever reached through
/// reference resolution against the raw tree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShimOpenApi {
    /// OpenAPI version (e.g. "3.0.3").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    /// Path items keyed by template.
    pub paths: ShimPaths,
}

/// Represents the Paths Object with support for specification extensions.
///
/// `x-` keys are kept apart so they are never mistaken for path templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShimPaths {
    /// Path items keyed by path template, in declaration order.
    pub items: IndexMap<String, ShimPathItem>,
    /// Spec extensions attached to the Paths Object (x-...).
    pub extensions: IndexMap<String, JsonValue>,
}

impl ShimPaths {
    /// Returns true when no concrete path items are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of concrete path items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'de> Deserialize<'de> for ShimPaths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, JsonValue>::deserialize(deserializer)?;
        let mut items = IndexMap::with_capacity(raw.len());
        let mut extensions = IndexMap::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                extensions.insert(key, value);
                continue;
            }
            let path_item = serde_json::from_value::<ShimPathItem>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse path item '{}': {}", key, e))
            })?;
            items.insert(key, path_item);
        }

        Ok(Self { items, extensions })
    }
}

impl Serialize for ShimPaths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A Path Item: the operations available under one path template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShimPathItem {
    /// Short summary for all operations in this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description for all operations in this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameters shared by every operation under this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<ShimParameter>>>,
    /// GET operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<ShimOperation>,
    /// PUT operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<ShimOperation>,
    /// POST operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<ShimOperation>,
    /// DELETE operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<ShimOperation>,
    /// OPTIONS operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ShimOperation>,
    /// HEAD operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<ShimOperation>,
    /// PATCH operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<ShimOperation>,
    /// TRACE operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<ShimOperation>,
}

impl ShimPathItem {
    /// Returns the operation declared for `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&ShimOperation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Iterates the declared operations in `HttpMethod::ALL` order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &ShimOperation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

/// An Operation: one HTTP method entry under a path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShimOperation {
    /// Unique operation identifier.
    #[serde(rename = "operationId", default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Tags used for logical grouping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Declared parameters, literal or referenced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<ShimParameter>>>,
    /// Request body, literal or referenced.
    #[serde(rename = "requestBody", default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RefOr<ShimRequestBody>>,
    /// Responses keyed by status code string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, RefOr<ShimResponse>>>,
    /// Whether the operation is deprecated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

/// A Request Body Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShimRequestBody {
    /// Description of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Body content keyed by MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentMap>,
    /// Whether the body is required.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

/// A Response Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShimResponse {
    /// Description of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Response content keyed by MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentMap>,
}

/// A Media Type Object. Only `schema` matters here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShimMediaType {
    /// The payload schema: a `$ref` or a literal schema tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<JsonValue>>,
}

/// A Parameter Object.
///
/// Serializes back to exactly the object it was read from: flags keep their
/// explicit `false`, `schema` stays a raw tree (a `$ref` keeps its sibling
/// keys), and fields the resolver does not interpret (style, explode,
/// examples, ...) are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShimParameter {
    /// Name of the parameter.
    pub name: String,
    /// Location of the parameter.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// A brief description of the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `required`, as declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// `deprecated`, as declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Value schema, untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonValue>,
    /// Remaining keys of the parameter object.
    #[serde(flatten)]
    pub extra: IndexMap<String, JsonValue>,
}

impl ShimParameter {
    /// Whether the parameter is required (absent means `false`).
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Whether the parameter is deprecated (absent means `false`).
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }
}
