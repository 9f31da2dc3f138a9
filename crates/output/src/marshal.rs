//! Marshalers for each output type

use apidoc_common::{Document, Result};

/// Encodes a document into an output format
#[cfg_attr(test, mockall::automock)]
pub trait Marshaler {
    fn marshal(&self, doc: &Document) -> Result<Vec<u8>>;
}

/// Native document as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct ApidocJson;

/// Native document as YAML
#[derive(Debug, Clone, Copy, Default)]
pub struct ApidocYaml;

/// OpenAPI 3 document as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenapiJson;

/// OpenAPI 3 document as YAML
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenapiYaml;

impl Marshaler for ApidocJson {
    fn marshal(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(doc)?)
    }
}

impl Marshaler for ApidocYaml {
    fn marshal(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(serde_yaml::to_string(doc)?.into_bytes())
    }
}

impl Marshaler for OpenapiJson {
    fn marshal(&self, doc: &Document) -> Result<Vec<u8>> {
        apidoc_openapi::to_json(doc)
    }
}

impl Marshaler for OpenapiYaml {
    fn marshal(&self, doc: &Document) -> Result<Vec<u8>> {
        apidoc_openapi::to_yaml(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_common::Endpoint;

    fn document() -> Document {
        Document {
            title: "Test API".to_string(),
            version: "1.0.0".to_string(),
            endpoints: vec![Endpoint {
                method: "GET".to_string(),
                path: "/ping".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_native_json_passthrough() {
        let bytes = ApidocJson.marshal(&document()).unwrap();
        let back: Document = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, document());
    }

    #[test]
    fn test_native_yaml_passthrough() {
        let bytes = ApidocYaml.marshal(&document()).unwrap();
        let back: Document = serde_yaml::from_slice(&bytes).unwrap();
        assert_eq!(back, document());
    }

    #[test]
    fn test_openapi_marshalers_map_document() {
        let json: serde_json::Value =
            serde_json::from_slice(&OpenapiJson.marshal(&document()).unwrap()).unwrap();
        assert!(json["paths"]["/ping"]["get"].is_object());

        let yaml: serde_json::Value =
            serde_yaml::from_slice(&OpenapiYaml.marshal(&document()).unwrap()).unwrap();
        assert_eq!(json, yaml);
    }
}
