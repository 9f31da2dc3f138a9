//! Schema projection
//!
//! Input and output share the type descriptor, so projecting is a copy into
//! the output envelope. The source document is never aliased or modified.

use crate::types::Schema;

/// Project a documented type into an output schema node
pub fn project(ty: &apidoc_common::Schema) -> Schema {
    Schema(ty.clone())
}

impl From<&apidoc_common::Schema> for Schema {
    fn from(ty: &apidoc_common::Schema) -> Self {
        project(ty)
    }
}
