//
//  error.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use std::fmt;

/// Errors raised while building, finalizing or exporting a schema.
///
/// Construction errors (`InvalidIdentifier`, `InvalidTypeReference`) are
/// reported immediately. Uniqueness and consistency errors are collected at
/// finalize time and returned together as [`SchemaError::Validation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: &'static str },

    #[error("Invalid type reference '{0}'")]
    InvalidTypeReference(String),

    #[error("Directive '@{0}' is already registered")]
    DuplicateDirective(String),

    #[error("Type '{0}' is already registered")]
    DuplicateType(String),

    #[error("Duplicate argument '{name}' on {owner}")]
    DuplicateArgument { owner: String, name: String },

    #[error("Duplicate field '{name}' on {owner}")]
    DuplicateField { owner: String, name: String },

    #[error("Duplicate enum value '{name}' on {owner}")]
    DuplicateEnumValue { owner: String, name: String },

    #[error("Duplicate member '{name}' on {owner}")]
    DuplicateMember { owner: String, name: String },

    #[error("Illegal mutation after finalize: {0}")]
    IllegalMutation(String),

    #[error("Schema has not been finalized")]
    NotFinalized,

    #[error("Unknown directive '@{0}'")]
    UnknownDirective(String),

    #[error("Unknown type '{name}' referenced by {owner}")]
    UnknownType { owner: String, name: String },

    #[error("Invalid use of type '{ty}' on {owner}: {reason}")]
    InvalidTypeUsage {
        owner: String,
        ty: String,
        reason: &'static str,
    },

    #[error("Directive '@{0}' has no locations")]
    MissingDirectiveLocations(String),

    #[error("{kind} '{name}' must define at least one {member}")]
    EmptyDefinition {
        name: String,
        kind: &'static str,
        member: &'static str,
    },

    #[error("Invalid member '{name}' on {owner}: {reason}")]
    InvalidMember {
        owner: String,
        name: String,
        reason: &'static str,
    },

    #[error("{owner} does not implement {interface}.{field}: {reason}")]
    InterfaceNotImplemented {
        owner: String,
        interface: String,
        field: String,
        reason: String,
    },

    #[error("Invalid default value for '{name}' on {owner}: {reason}")]
    InvalidDefaultValue {
        owner: String,
        name: String,
        reason: String,
    },

    #[error("Input objects form a non-null cycle: {}", .0.join(" -> "))]
    InputObjectCycle(Vec<String>),

    #[error("Invalid {operation} root type '{name}': {reason}")]
    InvalidRootType {
        operation: &'static str,
        name: String,
        reason: &'static str,
    },

    #[error("{}", ValidationSummary(.0))]
    Validation(Vec<SchemaError>),
}

impl SchemaError {
    /// Flatten a batch into its individual errors.
    pub fn errors(&self) -> Vec<&SchemaError> {
        match self {
            SchemaError::Validation(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

struct ValidationSummary<'a>(&'a [SchemaError]);

impl fmt::Display for ValidationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schema validation failed with {} error(s)", self.0.len())?;
        for error in self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

/// Result alias for schema model operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
