//
//  name.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use crate::error::{Result, SchemaError};

/// Check that `name` is a legal GraphQL name: `[_A-Za-z][_0-9A-Za-z]*`.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| SchemaError::InvalidIdentifier {
        name: name.to_string(),
        reason: "name cannot be empty",
    })?;

    if !(first == '_' || first.is_ascii_alphabetic()) {
        return Err(SchemaError::InvalidIdentifier {
            name: name.to_string(),
            reason: "name must start with a letter or underscore",
        });
    }

    if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        return Err(SchemaError::InvalidIdentifier {
            name: name.to_string(),
            reason: "name may only contain letters, digits and underscores",
        });
    }

    Ok(())
}

/// Enum values follow the name rules but cannot shadow literal keywords.
pub fn validate_enum_value_name(name: &str) -> Result<()> {
    validate_name(name)?;
    if matches!(name, "true" | "false" | "null") {
        return Err(SchemaError::InvalidIdentifier {
            name: name.to_string(),
            reason: "enum values cannot be named true, false or null",
        });
    }
    Ok(())
}

/// Treat empty descriptions as absent.
pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description.filter(|d| !d.is_empty()).map(str::to_string)
}
