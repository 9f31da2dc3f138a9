//! Integration test for loading documents from disk

use apidoc_common::{ApidocError, Document};
use std::fs;
use tempfile::TempDir;

const YAML_DOC: &str = r#"
title: Pet Store
version: 1.0.0
contact:
  name: API Support
  email: support@example.com
servers:
  - url: https://api.example.com
tags:
  - name: pets
endpoints:
  - method: GET
    path: /pets
    tags: [pets]
    responses:
      - status: 200
        mimetype: application/json
        type:
          type: array
          items:
            type: string
"#;

#[test]
fn test_load_yaml_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.yml");
    fs::write(&path, YAML_DOC).unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.title, "Pet Store");
    assert_eq!(doc.contact.as_ref().unwrap().email.as_deref(), Some("support@example.com"));
    assert_eq!(doc.servers[0].url, "https://api.example.com");
    assert_eq!(doc.endpoints[0].responses[0].status, 200);
}

#[test]
fn test_load_json_round_trips_native_form() {
    let original = Document::from_yaml(YAML_DOC).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");
    fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

    assert_eq!(Document::load(&path).unwrap(), original);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Document::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ApidocError::Parse(msg) if msg.contains("missing.json")));
}
