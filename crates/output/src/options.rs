//! Output options and type selection

use crate::marshal::{ApidocJson, ApidocYaml, Marshaler, OpenapiJson, OpenapiYaml};
use crate::Target;
use apidoc_common::{ApidocError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported output types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputType {
    #[default]
    ApidocJson,
    ApidocYaml,
    OpenapiJson,
    OpenapiYaml,
    /// Recognised, but no marshaler exists for it
    RamlJson,
}

impl OutputType {
    pub const ALL: [OutputType; 5] = [
        OutputType::ApidocJson,
        OutputType::ApidocYaml,
        OutputType::OpenapiJson,
        OutputType::OpenapiYaml,
        OutputType::RamlJson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::ApidocJson => "apidoc+json",
            OutputType::ApidocYaml => "apidoc+yaml",
            OutputType::OpenapiJson => "openapi+json",
            OutputType::OpenapiYaml => "openapi+yaml",
            OutputType::RamlJson => "raml+json",
        }
    }

    /// File name used when the output path is a directory
    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputType::ApidocJson => "apidoc.json",
            OutputType::ApidocYaml => "apidoc.yaml",
            OutputType::OpenapiJson => "openapi.json",
            OutputType::OpenapiYaml => "openapi.yaml",
            OutputType::RamlJson => "raml.json",
        }
    }

    /// Select the marshaler for this type
    pub fn marshaler(&self) -> Result<Box<dyn Marshaler>> {
        match self {
            OutputType::ApidocJson => Ok(Box::new(ApidocJson)),
            OutputType::ApidocYaml => Ok(Box::new(ApidocYaml)),
            OutputType::OpenapiJson => Ok(Box::new(OpenapiJson)),
            OutputType::OpenapiYaml => Ok(Box::new(OpenapiYaml)),
            OutputType::RamlJson => Err(ApidocError::UnsupportedFormat(self.to_string())),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = ApidocError;

    fn from_str(s: &str) -> Result<Self> {
        OutputType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ApidocError::field("type", format!("invalid value {}", s)))
    }
}

/// Rendering options
///
/// Typically loaded from the `output` section of a project config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Destination file, or a directory to write the default file name into
    #[serde(default)]
    pub path: PathBuf,

    /// Only render endpoints tagged with one of these groups; empty means all
    ///
    /// Names that match nothing have no effect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Output type, e.g. `openapi+yaml`; empty means `apidoc+json`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub output_type: String,
}

impl Options {
    /// Load options from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ApidocError::Parse(format!("Failed to read options file {:?}: {}", path, e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ApidocError::Parse(format!("Failed to parse options YAML from {:?}: {}", path, e))
        })
    }

    /// Validate the options and resolve the render target
    ///
    /// An empty `type` falls back to `apidoc+json`.
    pub fn sanitize(&self) -> Result<Target> {
        if self.path.as_os_str().is_empty() {
            return Err(ApidocError::field("path", "required"));
        }

        let output_type = if self.output_type.is_empty() {
            OutputType::default()
        } else {
            self.output_type.parse()?
        };
        let marshaler = output_type.marshaler()?;

        let path = if self.path.is_dir() {
            self.path.join(output_type.default_filename())
        } else {
            self.path.clone()
        };

        Ok(Target::new(path, output_type, self.groups.clone(), marshaler))
    }

    /// Whether `group` is selected for output
    pub fn contains(&self, group: &str) -> bool {
        crate::contains_group(&self.groups, group)
    }
}
