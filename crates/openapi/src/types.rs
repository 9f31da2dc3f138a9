//! OpenAPI 3.0 type definitions
//!
//! Output-side representation built by the converter. Maps are ordered by key
//! so the JSON and YAML encodings are stable.

use crate::operation::Method;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenAPI document root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (e.g., "3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Servers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Tag declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// API paths (endpoints), keyed by path template
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

/// API information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Contact information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// License information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    /// API version
    pub version: String,
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name
    pub name: String,

    /// Contact URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License name
    pub name: String,

    /// License URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    pub url: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tag declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Path item (operations for a path)
///
/// Holds at most one operation per method; see [`crate::set_operation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    /// PUT operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    /// POST operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    /// DELETE operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    /// OPTIONS operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    /// HEAD operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    /// PATCH operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// TRACE operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// The operation registered for `method`, if any
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Trace => self.trace.as_ref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, method: Method) -> &mut Option<Operation> {
        match method {
            Method::Get => &mut self.get,
            Method::Put => &mut self.put,
            Method::Post => &mut self.post,
            Method::Delete => &mut self.delete,
            Method::Options => &mut self.options,
            Method::Head => &mut self.head,
            Method::Patch => &mut self.patch,
            Method::Trace => &mut self.trace,
        }
    }

    /// Methods with a registered operation, in [`Method::ALL`] order
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|method| self.operation(*method).is_some())
            .collect()
    }

    /// Whether no method slot is filled
    pub fn is_empty(&self) -> bool {
        self.methods().is_empty()
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Tags (for grouping)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Request body
    #[serde(
        rename = "requestBody",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code string ("200", "404", ...)
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,

    /// Deprecated flag, omitted when false
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

/// Parameter location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Templated path segment
    Path,
    /// Query string
    Query,
    /// Request header
    Header,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location (path, query, header)
    #[serde(rename = "in")]
    pub location: ParameterIn,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Required flag
    #[serde(default)]
    pub required: bool,

    /// Absent for header parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// Request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content types
    pub content: BTreeMap<String, MediaType>,
}

/// Response
///
/// Repeated declarations of one status code merge into the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response headers keyed by name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,

    /// Content types
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,
}

/// Response header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Media type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Body schema
    pub schema: Schema,

    /// Examples keyed by their content type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,
}

/// Example payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Example value, as written in the source
    pub value: String,
}

/// Schema node
///
/// Wraps the shared type descriptor; serializes as the descriptor itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(pub apidoc_common::Schema);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_location_is_lowercase() {
        let param = Parameter {
            name: "id".to_string(),
            location: ParameterIn::Path,
            description: None,
            required: true,
            schema: None,
        };
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            serde_json::json!({ "name": "id", "in": "path", "required": true })
        );
    }

    #[test]
    fn test_empty_path_item_omits_all_methods() {
        let item = PathItem::default();
        assert!(item.is_empty());
        assert_eq!(serde_json::to_value(&item).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_operation_field_names() {
        let op = Operation {
            request_body: Some(RequestBody::default()),
            ..Default::default()
        };
        let json = serde_json::to_value(&op).unwrap();
        assert!(json.get("requestBody").is_some());
        assert_eq!(json["responses"], serde_json::json!({}));
        assert!(json.get("deprecated").is_none());
    }
}
