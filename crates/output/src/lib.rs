//! Rendering apidoc documents to files
//!
//! This crate resolves output [`Options`] into a render [`Target`]: the
//! destination path, the [`OutputType`] and the [`Marshaler`] strategy that
//! encodes it. Native types (`apidoc+json`, `apidoc+yaml`) serialize the
//! source document directly; OpenAPI types go through `apidoc-openapi`.

mod marshal;
mod options;

pub use marshal::{ApidocJson, ApidocYaml, Marshaler, OpenapiJson, OpenapiYaml};
pub use options::{Options, OutputType};

use apidoc_common::{Document, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A validated destination with its selected marshaler
pub struct Target {
    path: PathBuf,
    output_type: OutputType,
    groups: Vec<String>,
    marshaler: Box<dyn Marshaler>,
}

/// Outcome of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub path: PathBuf,
    pub output_type: OutputType,
    pub endpoints: usize,
    pub bytes: usize,
    pub elapsed: Duration,
}

impl Target {
    pub fn new(
        path: PathBuf,
        output_type: OutputType,
        groups: Vec<String>,
        marshaler: Box<dyn Marshaler>,
    ) -> Self {
        Self {
            path,
            output_type,
            groups,
            marshaler,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// Encode the document without writing it
    pub fn marshal(&self, doc: &Document) -> Result<Vec<u8>> {
        let filtered = filter_groups(doc, &self.groups);
        self.marshaler.marshal(&filtered)
    }

    /// Encode the document and write it to the target path
    pub fn render(&self, doc: &Document) -> Result<Rendered> {
        let start = Instant::now();

        let filtered = filter_groups(doc, &self.groups);
        tracing::debug!(
            output_type = %self.output_type,
            endpoints = filtered.endpoints.len(),
            skipped = doc.endpoints.len() - filtered.endpoints.len(),
            "rendering document"
        );

        let bytes = self.marshaler.marshal(&filtered)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &bytes)?;

        Ok(Rendered {
            path: self.path.clone(),
            output_type: self.output_type,
            endpoints: filtered.endpoints.len(),
            bytes: bytes.len(),
            elapsed: start.elapsed(),
        })
    }
}

/// Validate `options` and render `doc` to the configured path
pub fn render(doc: &Document, options: &Options) -> Result<Rendered> {
    options.sanitize()?.render(doc)
}

/// Whether `group` is selected by `groups`; an empty selection selects all
pub fn contains_group(groups: &[String], group: &str) -> bool {
    groups.is_empty() || groups.iter().any(|g| g == group)
}

/// Copy of `doc` keeping only endpoints in the selected groups
///
/// An endpoint is kept if any of its tags is selected. Untagged endpoints
/// are kept only when no groups are selected.
pub fn filter_groups(doc: &Document, groups: &[String]) -> Document {
    if groups.is_empty() {
        return doc.clone();
    }

    Document {
        endpoints: doc
            .endpoints
            .iter()
            .filter(|endpoint| endpoint.tags.iter().any(|tag| contains_group(groups, tag)))
            .cloned()
            .collect(),
        ..doc.clone()
    }
}
