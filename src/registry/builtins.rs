//
//  builtins.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use super::SchemaRegistry;
use crate::error::Result;
use crate::types::{Directive, DirectiveLocation, InputValue, TypeDefinition, TypeRef};

/// Scalars every GraphQL schema provides.
pub const BUILTIN_SCALARS: &[(&str, &str)] = &[
    (
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric values.",
    ),
    (
        "Float",
        "The `Float` scalar type represents signed double-precision fractional values.",
    ),
    (
        "String",
        "The `String` scalar type represents textual data, represented as UTF-8 character sequences.",
    ),
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    (
        "ID",
        "The `ID` scalar type represents a unique identifier, serialized as a String.",
    ),
];

pub const BUILTIN_DIRECTIVES: &[&str] = &["include", "skip", "deprecated", "specifiedBy"];

pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.iter().any(|(n, _)| *n == name)
}

pub fn is_builtin_directive(name: &str) -> bool {
    BUILTIN_DIRECTIVES.contains(&name)
}

/// Names reserved for the introspection system (`__Schema`, `__Type`, ...).
pub fn is_introspection_name(name: &str) -> bool {
    name.starts_with("__")
}

pub fn builtin_scalars() -> Result<Vec<TypeDefinition>> {
    BUILTIN_SCALARS
        .iter()
        .map(|(name, description)| {
            Ok(TypeDefinition::scalar(*name)?.with_description(description))
        })
        .collect()
}

pub fn builtin_directives() -> Result<Vec<Directive>> {
    let boolean = || TypeRef::named("Boolean").non_null();
    let conditional_locations = [
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];

    let mut include = Directive::with_locations(
        "include",
        Some("Directs the executor to include this field or fragment only when the `if` argument is true."),
        &conditional_locations,
    )?;
    include.add_arg(InputValue::new("if", Some("Included when true."), boolean(), None)?);

    let mut skip = Directive::with_locations(
        "skip",
        Some("Directs the executor to skip this field or fragment when the `if` argument is true."),
        &conditional_locations,
    )?;
    skip.add_arg(InputValue::new("if", Some("Skipped when true."), boolean(), None)?);

    let mut deprecated = Directive::with_locations(
        "deprecated",
        Some("Marks an element of a GraphQL schema as no longer supported."),
        &[
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::ArgumentDefinition,
            DirectiveLocation::InputFieldDefinition,
            DirectiveLocation::EnumValue,
        ],
    )?;
    deprecated.add_arg(InputValue::new(
        "reason",
        Some("Explains why this element was deprecated."),
        TypeRef::named("String"),
        Some("\"No longer supported\""),
    )?);

    let mut specified_by = Directive::with_locations(
        "specifiedBy",
        Some("Exposes a URL that specifies the behavior of this scalar."),
        &[DirectiveLocation::Scalar],
    )?;
    specified_by.add_arg(InputValue::new(
        "url",
        Some("The URL that specifies the behavior of this scalar."),
        TypeRef::named("String").non_null(),
        None,
    )?);

    Ok(vec![include, skip, deprecated, specified_by])
}

/// Register every built-in scalar and directive.
pub(crate) fn seed(registry: &mut SchemaRegistry) -> Result<()> {
    for scalar in builtin_scalars()? {
        registry.register_type(scalar)?;
    }
    for directive in builtin_directives()? {
        registry.register_directive(directive)?;
    }
    Ok(())
}
