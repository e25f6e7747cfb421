//
//  field.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};

use super::input_value::InputValue;
use super::name::{normalize_description, validate_name};
use super::type_ref::TypeRef;
use crate::error::Result;

/// Whether a field or enum value is deprecated, and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deprecation {
    #[default]
    Current,
    Deprecated(Option<String>),
}

impl Deprecation {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Deprecation::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecation::Current => None,
            Deprecation::Deprecated(reason) => reason.as_deref(),
        }
    }
}

/// A field on an object or interface type (`__Field`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    name: String,
    description: Option<String>,
    ty: TypeRef,
    args: Vec<InputValue>,
    deprecation: Deprecation,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, description: Option<&str>, ty: TypeRef) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            description: normalize_description(description),
            ty,
            args: Vec::new(),
            deprecation: Deprecation::Current,
        })
    }

    /// Mark the field deprecated with an optional reason.
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation = Deprecation::Deprecated(reason.map(str::to_string));
        self
    }

    pub fn add_arg(&mut self, arg: InputValue) {
        self.args.push(arg);
    }

    /// Builder form of [`FieldDefinition::add_arg`].
    pub fn with_arg(mut self, arg: InputValue) -> Self {
        self.add_arg(arg);
        self
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

    pub fn args(&self) -> &[InputValue] {
        &self.args
    }

    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.iter().find(|a| a.name() == name)
    }

    pub fn deprecation(&self) -> &Deprecation {
        &self.deprecation
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation.is_deprecated()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation.reason()
    }
}
