//
//  input_value.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};
use std::fmt;

use super::name::{normalize_description, validate_name};
use super::type_ref::TypeRef;
use crate::error::Result;

/// A named, typed argument or input object field (`__InputValue`).
///
/// Arguments are fully known when they are discovered, so an `InputValue`
/// exposes no mutators once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValue {
    name: String,
    description: Option<String>,
    ty: TypeRef,
    /// Default value as a GraphQL literal, e.g. `"\"No longer supported\""` or `10`.
    default_value: Option<String>,
}

impl InputValue {
    pub fn new(
        name: impl Into<String>,
        description: Option<&str>,
        ty: TypeRef,
        default_value: Option<&str>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            description: normalize_description(description),
            ty,
            default_value: default_value.map(str::to_string),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Required inputs are non-null and carry no default.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if let Some(default) = &self.default_value {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}
