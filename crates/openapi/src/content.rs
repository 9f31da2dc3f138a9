//! Request bodies and response merging
//!
//! Keys collide by content type (request bodies, response content, examples)
//! or header name (response headers). Collisions resolve to the later
//! declaration.

use crate::schema::project;
use crate::types::{Example, Header, MediaType, RequestBody, Response};
use apidoc_common::{RequestVariant, ResponseVariant};
use std::collections::BTreeMap;

/// Build the request body from an endpoint's request variants
///
/// Returns `None` when the endpoint accepts no body.
pub fn build_request_body(requests: &[RequestVariant]) -> Option<RequestBody> {
    if requests.is_empty() {
        return None;
    }

    let mut content = BTreeMap::new();
    for request in requests {
        let media = new_media_type(&request.schema, &request.examples);
        if content.insert(request.mimetype.clone(), media).is_some() {
            tracing::warn!(
                mimetype = %request.mimetype,
                "request content type declared twice, keeping the later one"
            );
        }
    }

    Some(RequestBody { content })
}

/// Fold response variants into one response per status code
pub fn merge_responses(responses: &[ResponseVariant]) -> BTreeMap<String, Response> {
    let mut merged = BTreeMap::new();
    for variant in responses {
        merge_response(&mut merged, variant);
    }
    merged
}

/// Merge one response variant into the responses map
///
/// Headers and content are added to any response already present for the
/// same status code; only entries with the same key are replaced.
pub fn merge_response(responses: &mut BTreeMap<String, Response>, variant: &ResponseVariant) {
    let status = variant.status.to_string();
    let response = responses.entry(status).or_default();

    for header in &variant.headers {
        response.headers.insert(
            header.name.clone(),
            Header {
                description: header.summary.clone(),
            },
        );
    }

    let media = new_media_type(&variant.schema, &variant.examples);
    if response.content.insert(variant.mimetype.clone(), media).is_some() {
        tracing::warn!(
            status = variant.status,
            mimetype = %variant.mimetype,
            "response content declared twice, keeping the later one"
        );
    }
}

fn new_media_type(
    schema: &apidoc_common::Schema,
    examples: &[apidoc_common::Example],
) -> MediaType {
    MediaType {
        schema: project(schema),
        examples: new_examples(examples),
    }
}

/// Examples keyed by their content type
fn new_examples(examples: &[apidoc_common::Example]) -> BTreeMap<String, Example> {
    let mut out = BTreeMap::new();
    for example in examples {
        let previous = out.insert(
            example.mimetype.clone(),
            Example {
                summary: example.summary.clone(),
                value: example.value.clone(),
            },
        );
        if previous.is_some() {
            tracing::debug!(mimetype = %example.mimetype, "example content type collapsed");
        }
    }
    out
}
