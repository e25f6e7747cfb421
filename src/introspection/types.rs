//
//  types.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};

use crate::types::DirectiveLocation;

/// `__TypeKind`, including the wrapping kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionTypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// The `__schema` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<NamedTypeRef>,
    pub mutation_type: Option<NamedTypeRef>,
    pub subscription_type: Option<NamedTypeRef>,
    pub types: Vec<IntrospectionType>,
    pub directives: Vec<IntrospectionDirective>,
}

/// `{ "name": ... }` as used by the root operation type entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// A full `__Type` entry of the `types` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: IntrospectionTypeKind,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "specifiedByURL")]
    pub specified_by_url: Option<String>,
    pub fields: Option<Vec<IntrospectionField>>,
    pub interfaces: Option<Vec<IntrospectionTypeRef>>,
    pub possible_types: Option<Vec<IntrospectionTypeRef>>,
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}

/// A `__Type` used as a reference (`kind`, `name`, `ofType` chain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: IntrospectionTypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}

/// `__Field`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub ty: IntrospectionTypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// `__InputValue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: IntrospectionTypeRef,
    pub default_value: Option<String>,
}

/// `__EnumValue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// `__Directive`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(default)]
    pub is_repeatable: bool,
}

/// `{ "__schema": ... }`, the result of the standard introspection query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionResult {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Accepts both a bare result and a GraphQL response wrapping it in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum IntrospectionEnvelope {
    Response { data: IntrospectionResult },
    Bare(IntrospectionResult),
}

impl IntrospectionEnvelope {
    pub(crate) fn into_schema(self) -> IntrospectionSchema {
        match self {
            IntrospectionEnvelope::Response { data } => data.schema,
            IntrospectionEnvelope::Bare(result) => result.schema,
        }
    }
}
