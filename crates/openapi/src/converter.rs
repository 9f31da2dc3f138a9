//! Converts an apidoc Document to an OpenAPI document

use crate::content::{build_request_body, merge_responses};
use crate::metadata::{new_info, new_servers, new_tags};
use crate::operation::{build_parameters, set_operation};
use crate::types::{OpenApiDocument, Operation, PathItem};
use crate::OPENAPI_VERSION;
use apidoc_common::{Document, Endpoint, Result};
use std::collections::BTreeMap;

/// Convert a Document into an OpenAPI document
///
/// The first duplicate (path, method) aborts the whole conversion; no
/// partial document is returned.
pub fn convert_document(doc: &Document) -> Result<OpenApiDocument> {
    Ok(OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: new_info(doc),
        servers: new_servers(&doc.servers),
        tags: new_tags(&doc.tags),
        paths: build_paths(&doc.endpoints)?,
    })
}

fn build_paths(endpoints: &[Endpoint]) -> Result<BTreeMap<String, PathItem>> {
    let mut paths: BTreeMap<String, PathItem> = BTreeMap::new();

    for endpoint in endpoints {
        tracing::debug!(
            method = %endpoint.method,
            path = %endpoint.path,
            "mapping endpoint"
        );

        let item = paths.entry(endpoint.path.clone()).or_default();
        // An unrecognised method still leaves its path item in place.
        let Some(operation) = set_operation(item, &endpoint.path, &endpoint.method)? else {
            continue;
        };

        fill_operation(operation, endpoint);
    }

    Ok(paths)
}

fn fill_operation(operation: &mut Operation, endpoint: &Endpoint) {
    operation.tags = endpoint.tags.clone();
    operation.summary = endpoint.summary.clone();
    operation.description = endpoint.description.clone();
    operation.deprecated = endpoint.deprecated;
    operation.parameters = build_parameters(endpoint);
    operation.request_body = build_request_body(&endpoint.requests);
    operation.responses = merge_responses(&endpoint.responses);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;
    use apidoc_common::{ApidocError, ResponseVariant, Schema};

    fn endpoint(method: &str, path: &str) -> Endpoint {
        Endpoint {
            method: method.to_string(),
            path: path.to_string(),
            ..Default::default()
        }
    }

    fn document(endpoints: Vec<Endpoint>) -> Document {
        Document {
            title: "Test API".to_string(),
            version: "1.0.0".to_string(),
            endpoints,
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_methods_by_path() {
        let doc = document(vec![
            endpoint("GET", "/users"),
            endpoint("post", "/users"),
            endpoint("GET", "/users/{id}"),
            endpoint("DELETE", "/users/{id}"),
            endpoint("PATCH", "/users/{id}"),
        ]);

        let openapi = convert_document(&doc).unwrap();
        assert_eq!(openapi.paths.len(), 2);
        assert_eq!(
            openapi.paths["/users"].methods(),
            vec![Method::Get, Method::Post]
        );
        assert_eq!(
            openapi.paths["/users/{id}"].methods(),
            vec![Method::Get, Method::Delete, Method::Patch]
        );
    }

    #[test]
    fn test_duplicate_aborts_conversion() {
        let doc = document(vec![
            endpoint("GET", "/users"),
            endpoint("PUT", "/users"),
            endpoint("get", "/users"),
        ]);

        match convert_document(&doc) {
            Err(ApidocError::DuplicateOperation { field, path }) => {
                assert_eq!(field, "paths.get");
                assert_eq!(path, "/users");
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_method_on_different_paths_is_fine() {
        let doc = document(vec![endpoint("GET", "/a"), endpoint("GET", "/b")]);
        assert_eq!(convert_document(&doc).unwrap().paths.len(), 2);
    }

    #[test]
    fn test_unknown_method_keeps_empty_path() {
        let doc = document(vec![
            endpoint("CONNECT", "/tunnel"),
            endpoint("LINK", "/users"),
            endpoint("GET", "/users"),
        ]);

        let openapi = convert_document(&doc).unwrap();
        assert_eq!(openapi.paths.keys().collect::<Vec<_>>(), vec!["/tunnel", "/users"]);
        assert!(openapi.paths["/tunnel"].is_empty());
        assert_eq!(openapi.paths["/users"].methods(), vec![Method::Get]);

        let json: serde_json::Value = serde_json::to_value(&openapi).unwrap();
        assert_eq!(json["paths"]["/tunnel"], serde_json::json!({}));
    }

    #[test]
    fn test_operation_fields_copied() {
        let mut ep = endpoint("GET", "/users");
        ep.tags = vec!["users".to_string()];
        ep.summary = Some("List users".to_string());
        ep.description = Some("Returns every user".to_string());
        ep.deprecated = true;
        ep.responses = vec![ResponseVariant {
            status: 200,
            mimetype: "application/json".to_string(),
            schema: Schema::array_of(Schema::of_type("object")),
            ..Default::default()
        }];

        let openapi = convert_document(&document(vec![ep])).unwrap();
        let op = openapi.paths["/users"].get.as_ref().unwrap();
        assert_eq!(op.tags, vec!["users".to_string()]);
        assert_eq!(op.summary.as_deref(), Some("List users"));
        assert_eq!(op.description.as_deref(), Some("Returns every user"));
        assert!(op.deprecated);
        assert!(op.request_body.is_none());
        assert!(op.responses.contains_key("200"));
    }
}
