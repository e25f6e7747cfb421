//
//  enum_value.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};

use super::field::Deprecation;
use super::name::{normalize_description, validate_enum_value_name};
use crate::error::Result;

/// One member of an enum type (`__EnumValue`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    name: String,
    description: Option<String>,
    deprecation: Deprecation,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Result<Self> {
        let name = name.into();
        validate_enum_value_name(&name)?;
        Ok(Self {
            name,
            description: normalize_description(description),
            deprecation: Deprecation::Current,
        })
    }

    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation = Deprecation::Deprecated(reason.map(str::to_string));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_enum_value() {
        let value = EnumValue::new("PENDING", Some("Awaiting review"))
            .unwrap()
            .deprecated(Some("Use IN_REVIEW"));
        assert_eq!(value.name(), "PENDING");
        assert_eq!(value.description(), Some("Awaiting review"));
        assert!(value.is_deprecated());
        assert_eq!(value.deprecation_reason(), Some("Use IN_REVIEW"));
    }

    #[test]
    fn test_keyword_names_rejected() {
        let err = EnumValue::new("false", None).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidIdentifier { .. }));
    }
}
