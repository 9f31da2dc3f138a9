//! Operation building
//!
//! Registers one operation per (path, method) and assembles its parameter
//! list from the endpoint's path, query, and request header declarations.

use crate::schema::project;
use crate::types::{Operation, Parameter, ParameterIn, PathItem};
use apidoc_common::{ApidocError, Endpoint, Result};
use std::fmt;
use std::str::FromStr;

/// HTTP methods an OpenAPI path item can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    /// Field name of the method in a path item
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }

    /// Look up a method by name, ignoring case
    pub fn from_name(name: &str) -> Option<Method> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApidocError;

    /// Parse a method name, ignoring case
    ///
    /// # Examples
    /// ```
    /// use apidoc_openapi::Method;
    ///
    /// assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
    /// assert_eq!("Patch".parse::<Method>().unwrap(), Method::Patch);
    /// assert!("CONNECT".parse::<Method>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        Method::from_name(s)
            .ok_or_else(|| ApidocError::field("method", format!("unrecognized HTTP method {}", s)))
    }
}

/// Register a new, empty operation for `method` on a path item
///
/// Fails with [`ApidocError::DuplicateOperation`] (field `paths.<method>`) if
/// the slot is already taken. Returns `Ok(None)` for a method name outside
/// [`Method::ALL`]; nothing is stored in that case.
pub fn set_operation<'a>(
    item: &'a mut PathItem,
    path: &str,
    method: &str,
) -> Result<Option<&'a mut Operation>> {
    let Some(method) = Method::from_name(method) else {
        tracing::warn!(path, method, "skipping endpoint with unrecognized HTTP method");
        return Ok(None);
    };

    let slot = item.slot_mut(method);
    if slot.is_some() {
        return Err(ApidocError::DuplicateOperation {
            field: format!("paths.{}", method),
            path: path.to_string(),
        });
    }

    Ok(Some(slot.insert(Operation::default())))
}

/// Build the parameter list for an endpoint
///
/// Order is path parameters, then query parameters, then the headers of the
/// first request variant. Source order is kept within each group.
pub fn build_parameters(endpoint: &Endpoint) -> Vec<Parameter> {
    let headers = endpoint
        .requests
        .first()
        .map(|request| request.headers.as_slice())
        .unwrap_or_default();

    let mut parameters =
        Vec::with_capacity(endpoint.params.len() + endpoint.queries.len() + headers.len());

    // Path parameters are always required, whatever the source says.
    parameters.extend(endpoint.params.iter().map(|param| Parameter {
        name: param.name.clone(),
        location: ParameterIn::Path,
        description: param.summary.clone(),
        required: true,
        schema: Some(project(&param.schema)),
    }));

    parameters.extend(endpoint.queries.iter().map(|param| Parameter {
        name: param.name.clone(),
        location: ParameterIn::Query,
        description: param.summary.clone(),
        required: !param.optional,
        schema: Some(project(&param.schema)),
    }));

    parameters.extend(headers.iter().map(|header| Parameter {
        name: header.name.clone(),
        location: ParameterIn::Header,
        description: header.summary.clone(),
        required: !header.optional,
        schema: None,
    }));

    parameters
}
