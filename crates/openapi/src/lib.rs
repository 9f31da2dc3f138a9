//! OpenAPI 3.0 output for apidoc documents
//!
//! Projects the flat endpoint list of a [`Document`] into OpenAPI's nested
//! `paths → methods → parameters/requestBody/responses` structure.
//!
//! ## Mapping Rules
//!
//! - One path item per distinct path template; at most one operation per
//!   method on it. A second endpoint with the same (path, method) fails the
//!   whole conversion with
//!   [`DuplicateOperation`](apidoc_common::ApidocError::DuplicateOperation).
//! - Parameters are path parameters (always required), then query
//!   parameters, then the headers of the first request variant.
//! - Responses declared more than once for a status code are merged: headers
//!   and content accumulate, equal keys keep the later declaration.
//! - Endpoints with a method outside GET, PUT, POST, DELETE, OPTIONS, HEAD,
//!   PATCH, TRACE are skipped.
//!
//! ## Usage
//! ```rust
//! use apidoc_common::{Document, Endpoint};
//!
//! let doc = Document {
//!     title: "Pet Store".to_string(),
//!     version: "1.0.0".to_string(),
//!     endpoints: vec![Endpoint {
//!         method: "GET".to_string(),
//!         path: "/pets".to_string(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let openapi = apidoc_openapi::convert_document(&doc)?;
//! assert!(openapi.paths["/pets"].get.is_some());
//!
//! let yaml = apidoc_openapi::to_yaml(&doc)?;
//! assert!(!yaml.is_empty());
//! # Ok::<(), apidoc_common::ApidocError>(())
//! ```

mod content;
mod converter;
mod metadata;
mod operation;
mod schema;
mod types;

pub use content::{build_request_body, merge_response, merge_responses};
pub use converter::convert_document;
pub use operation::{build_parameters, set_operation, Method};
pub use schema::project;
pub use types::*;

use apidoc_common::{Document, Result};

/// OpenAPI version written to the `openapi` field
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Convert a document and encode it as JSON
pub fn to_json(doc: &Document) -> Result<Vec<u8>> {
    let openapi = convert_document(doc)?;
    Ok(serde_json::to_vec_pretty(&openapi)?)
}

/// Convert a document and encode it as YAML
pub fn to_yaml(doc: &Document) -> Result<Vec<u8>> {
    let openapi = convert_document(doc)?;
    Ok(serde_yaml::to_string(&openapi)?.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_common::{ApidocError, Endpoint};

    #[test]
    fn test_version_field() {
        let doc = Document {
            title: "t".to_string(),
            version: "1".to_string(),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::from_slice(&to_json(&doc).unwrap()).unwrap();
        assert_eq!(json["openapi"], OPENAPI_VERSION);
        assert_eq!(json["paths"], serde_json::json!({}));
    }

    #[test]
    fn test_encoders_surface_duplicate_error() {
        let endpoint = Endpoint {
            method: "GET".to_string(),
            path: "/x".to_string(),
            ..Default::default()
        };
        let doc = Document {
            endpoints: vec![endpoint.clone(), endpoint],
            ..Default::default()
        };
        assert!(matches!(
            to_json(&doc),
            Err(ApidocError::DuplicateOperation { .. })
        ));
        assert!(matches!(
            to_yaml(&doc),
            Err(ApidocError::DuplicateOperation { .. })
        ));
    }
}
