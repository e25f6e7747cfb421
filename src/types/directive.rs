//
//  directive.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use serde::{Deserialize, Serialize};

use super::input_value::InputValue;
use super::location::DirectiveLocation;
use super::name::{normalize_description, validate_name};
use crate::error::Result;

/// A schema directive (`__Directive`).
///
/// Locations and arguments accumulate while source annotations are
/// discovered. Both sequences are append-only and keep call order; duplicate
/// locations and argument names are accepted here and checked when the owning
/// registry is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    name: String,
    description: Option<String>,
    locations: Vec<DirectiveLocation>,
    args: Vec<InputValue>,
    is_repeatable: bool,
}

impl Directive {
    /// Create a directive with no locations and no arguments yet.
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Result<Self> {
        Self::with_locations(name, description, &[])
    }

    /// Create a directive seeded with a starting set of locations.
    ///
    /// The locations are copied; later changes to the caller's sequence do not
    /// affect the directive.
    pub fn with_locations(
        name: impl Into<String>,
        description: Option<&str>,
        locations: &[DirectiveLocation],
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            description: normalize_description(description),
            locations: locations.to_vec(),
            args: Vec::new(),
            is_repeatable: false,
        })
    }

    /// Mark the directive as usable more than once at the same location.
    pub fn repeatable(mut self) -> Self {
        self.is_repeatable = true;
        self
    }

    pub fn add_location(&mut self, location: DirectiveLocation) {
        self.locations.push(location);
    }

    pub fn add_arg(&mut self, arg: InputValue) {
        self.args.push(arg);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn args(&self) -> &[InputValue] {
        &self.args
    }

    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.iter().find(|a| a.name() == name)
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    /// Drop repeated locations, keeping the first occurrence of each.
    pub(crate) fn dedup_locations(&mut self) {
        let mut seen = Vec::with_capacity(self.locations.len());
        self.locations.retain(|loc| {
            if seen.contains(loc) {
                false
            } else {
                seen.push(*loc);
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeRef;

    #[test]
    fn test_deprecated_example() {
        let mut directive = Directive::new("deprecated", Some("marks a field obsolete")).unwrap();
        directive.add_location(DirectiveLocation::FieldDefinition);
        directive.add_location(DirectiveLocation::EnumValue);
        directive.add_arg(
            InputValue::new(
                "reason",
                Some(""),
                TypeRef::named("String"),
                Some("\"No longer supported\""),
            )
            .unwrap(),
        );

        assert_eq!(directive.name(), "deprecated");
        assert_eq!(directive.description(), Some("marks a field obsolete"));
        assert_eq!(
            directive.locations(),
            &[DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue]
        );
        let args: Vec<String> = directive.args().iter().map(|a| a.to_string()).collect();
        assert_eq!(args, vec!["reason: String = \"No longer supported\""]);
        assert_eq!(directive.arg("reason").and_then(|a| a.description()), None);
    }

    #[test]
    fn test_append_preserves_order_and_count() {
        let mut directive = Directive::new("tag", None).unwrap();
        let locations = [
            DirectiveLocation::Object,
            DirectiveLocation::Field,
            DirectiveLocation::Object,
            DirectiveLocation::Scalar,
        ];
        for loc in locations {
            directive.add_location(loc);
        }
        for name in ["a", "b", "a"] {
            directive.add_arg(InputValue::new(name, None, TypeRef::named("Int"), None).unwrap());
        }

        // Duplicates are recorded as-is
        assert_eq!(directive.locations(), &locations);
        let names: Vec<&str> = directive.args().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_seeded_locations_are_copied() {
        let mut seed = vec![DirectiveLocation::Field, DirectiveLocation::Query];
        let directive = Directive::with_locations("trace", None, &seed).unwrap();

        seed.push(DirectiveLocation::Mutation);
        seed[0] = DirectiveLocation::Schema;

        assert_eq!(
            directive.locations(),
            &[DirectiveLocation::Field, DirectiveLocation::Query]
        );
    }

    #[test]
    fn test_new_starts_empty() {
        let directive = Directive::new("auth", None).unwrap();
        assert!(directive.locations().is_empty());
        assert!(directive.args().is_empty());
        assert!(!directive.is_repeatable());
        assert!(directive.repeatable().is_repeatable());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut directive = Directive::with_locations(
            "tag",
            None,
            &[
                DirectiveLocation::Object,
                DirectiveLocation::Field,
                DirectiveLocation::Object,
            ],
        )
        .unwrap();
        directive.dedup_locations();
        assert_eq!(
            directive.locations(),
            &[DirectiveLocation::Object, DirectiveLocation::Field]
        );
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert!(Directive::new("", None).is_err());
        assert!(Directive::new("@deprecated", None).is_err());
    }
}
