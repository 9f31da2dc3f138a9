//! Source documentation model
//!
//! This is the native apidoc representation produced by the documentation
//! parser. It is serialized as-is by the `apidoc+json` and `apidoc+yaml`
//! output types and mapped onto OpenAPI by `apidoc-openapi`.

use crate::{ApidocError, Result, Schema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root of a parsed documentation set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Documented endpoints, in declaration order
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Server the API is reachable on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tag used to group endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One documented (method, path) pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// HTTP method, compared case-insensitively
    pub method: String,

    /// Path template, e.g. `/users/{id}`
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    /// Path parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,

    /// Query parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<Param>,

    /// Accepted request bodies, one per content type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<RequestVariant>,

    /// Declared responses, one per status code and content type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<ResponseVariant>,
}

/// Path or query parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,

    #[serde(rename = "type", default)]
    pub schema: Schema,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

/// Request or response header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

/// Example body for a content type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub mimetype: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    pub value: String,
}

/// Request body accepted for one content type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestVariant {
    pub mimetype: String,

    #[serde(rename = "type", default)]
    pub schema: Schema,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

/// Response returned for one status code and content type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseVariant {
    pub status: u16,

    pub mimetype: String,

    #[serde(rename = "type", default)]
    pub schema: Schema,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl Document {
    /// Load a document from a file
    ///
    /// `.yaml` and `.yml` files are decoded as YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ApidocError::Parse(format!("Failed to read document {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ApidocError::Parse(format!("Failed to parse document JSON: {}", e)))
    }

    /// Parse a document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ApidocError::Parse(format!("Failed to parse document YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = Document::from_json(r#"{ "title": "Test API", "version": "1.0.0" }"#).unwrap();
        assert_eq!(doc.title, "Test API");
        assert!(doc.contact.is_none());
        assert!(doc.endpoints.is_empty());
    }

    #[test]
    fn test_parse_endpoint_defaults() {
        let yaml = r#"
title: Test
version: "1"
endpoints:
  - method: get
    path: /users/{id}
    params:
      - name: id
        type: { type: integer }
"#;
        let doc = Document::from_yaml(yaml).unwrap();
        let endpoint = &doc.endpoints[0];
        assert_eq!(endpoint.method, "get");
        assert!(!endpoint.deprecated);
        assert!(!endpoint.params[0].optional);
        assert_eq!(endpoint.params[0].schema, Schema::of_type("integer"));
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = Document::from_json("[]").unwrap_err();
        assert!(matches!(err, ApidocError::Parse(_)));
    }
}
