//
//  type_def.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};
use std::fmt;

use super::enum_value::EnumValue;
use super::field::FieldDefinition;
use super::input_value::InputValue;
use super::name::{normalize_description, validate_name};
use crate::error::Result;

/// Kind of a named type (`__TypeKind` minus the wrapping kinds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
        }
    }

    /// Usable as an argument or input field type.
    pub fn is_input(&self) -> bool {
        matches!(self, TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject)
    }

    /// Usable as a field result type.
    pub fn is_output(&self) -> bool {
        !matches!(self, TypeKind::InputObject)
    }

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "Scalar",
            TypeKind::Object => "Object",
            TypeKind::Interface => "Interface",
            TypeKind::Union => "Union",
            TypeKind::Enum => "Enum",
            TypeKind::InputObject => "Input object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named type in the schema (`__Type` for the non-wrapping kinds).
///
/// Every member sequence is append-only. Which sequences are meaningful
/// depends on `kind`; members recorded on the wrong kind are reported when
/// the registry is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    name: String,
    kind: TypeKind,
    description: Option<String>,
    specified_by_url: Option<String>,
    fields: Vec<FieldDefinition>,
    interfaces: Vec<String>,
    possible_types: Vec<String>,
    enum_values: Vec<EnumValue>,
    input_fields: Vec<InputValue>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, kind: TypeKind, description: Option<&str>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            kind,
            description: normalize_description(description),
            specified_by_url: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            possible_types: Vec::new(),
            enum_values: Vec::new(),
            input_fields: Vec::new(),
        })
    }

    pub fn scalar(name: impl Into<String>) -> Result<Self> {
        Self::new(name, TypeKind::Scalar, None)
    }

    pub fn object(name: impl Into<String>) -> Result<Self> {
        Self::new(name, TypeKind::Object, None)
    }

    pub fn interface(name: impl Into<String>) -> Result<Self> {
        Self::new(name, TypeKind::Interface, None)
    }

    pub fn union(name: impl Into<String>) -> Result<Self> {
        Self::new(name, TypeKind::Union, None)
    }

    pub fn enumeration(name: impl Into<String>) -> Result<Self> {
        Self::new(name, TypeKind::Enum, None)
    }

    pub fn input_object(name: impl Into<String>) -> Result<Self> {
        Self::new(name, TypeKind::InputObject, None)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = normalize_description(Some(description));
        self
    }

    /// Attach a `@specifiedBy` URL (scalars only).
    pub fn with_specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    // ─── Append-only members ────────────────────────────────────

    pub fn add_field(&mut self, field: FieldDefinition) {
        self.fields.push(field);
    }

    pub fn add_interface(&mut self, interface: impl Into<String>) {
        self.interfaces.push(interface.into());
    }

    pub fn add_possible_type(&mut self, member: impl Into<String>) {
        self.possible_types.push(member.into());
    }

    pub fn add_enum_value(&mut self, value: EnumValue) {
        self.enum_values.push(value);
    }

    pub fn add_input_field(&mut self, field: InputValue) {
        self.input_fields.push(field);
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.add_field(field);
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.add_interface(interface);
        self
    }

    pub fn with_possible_type(mut self, member: impl Into<String>) -> Self {
        self.add_possible_type(member);
        self
    }

    pub fn with_enum_value(mut self, value: EnumValue) -> Self {
        self.add_enum_value(value);
        self
    }

    pub fn with_input_field(mut self, field: InputValue) -> Self {
        self.add_input_field(field);
        self
    }

    // ─── Accessors ──────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn possible_types(&self) -> &[String] {
        &self.possible_types
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        &self.enum_values
    }

    pub fn has_enum_value(&self, name: &str) -> bool {
        self.enum_values.iter().any(|v| v.name() == name)
    }

    pub fn input_fields(&self) -> &[InputValue] {
        &self.input_fields
    }

    pub fn input_field(&self, name: &str) -> Option<&InputValue> {
        self.input_fields.iter().find(|f| f.name() == name)
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }
}
