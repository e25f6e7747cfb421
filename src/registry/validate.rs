//
//  validate.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use std::collections::HashSet;

use super::builtins::is_builtin_scalar;
use super::cycles::input_object_cycles;
use super::literal::{check_literal, parse_literal};
use super::SchemaRegistry;
use crate::error::SchemaError;
use crate::types::{Directive, FieldDefinition, InputValue, TypeDefinition, TypeKind, TypeRef};

/// Names that occur more than once, each reported once in first-repeat order.
fn duplicates<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            dups.push(name);
        }
    }
    dups
}

impl SchemaRegistry {
    /// Run every finalize-time check and collect all problems found.
    ///
    /// Does not change state; [`SchemaRegistry::finalize`] calls this and
    /// closes the registry only when the result is empty.
    pub fn validate(&self) -> Vec<SchemaError> {
        let mut errors = Vec::new();

        for directive in &self.directives {
            self.validate_directive(directive, &mut errors);
        }
        for ty in &self.types {
            self.validate_type(ty, &mut errors);
        }
        self.validate_roots(&mut errors);

        for cycle in input_object_cycles(self) {
            errors.push(SchemaError::InputObjectCycle(cycle));
        }

        errors
    }

    fn validate_directive(&self, directive: &Directive, errors: &mut Vec<SchemaError>) {
        let owner = format!("@{}", directive.name());

        if self.config.require_directive_locations && directive.locations().is_empty() {
            errors.push(SchemaError::MissingDirectiveLocations(
                directive.name().to_string(),
            ));
        }

        self.validate_args(&owner, directive.args(), errors);
    }

    fn validate_args(&self, owner: &str, args: &[InputValue], errors: &mut Vec<SchemaError>) {
        for name in duplicates(args.iter().map(|a| a.name())) {
            errors.push(SchemaError::DuplicateArgument {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }
        for arg in args {
            self.check_input_value(owner, &format!("{}({}:)", owner, arg.name()), arg, errors);
        }
    }

    /// Kind of a referenced type. Built-in scalars resolve even when not registered.
    fn resolve_kind(&self, name: &str) -> Option<TypeKind> {
        match self.type_definition(name) {
            Some(def) => Some(def.kind()),
            None if is_builtin_scalar(name) => Some(TypeKind::Scalar),
            None => None,
        }
    }

    /// Input positions accept scalars, enums and input objects; defaults must fit the type.
    fn check_input_value(
        &self,
        owner: &str,
        position: &str,
        value: &InputValue,
        errors: &mut Vec<SchemaError>,
    ) {
        let named = value.ty().named_type();
        match self.resolve_kind(named) {
            None => errors.push(SchemaError::UnknownType {
                owner: position.to_string(),
                name: named.to_string(),
            }),
            Some(kind) if !kind.is_input() => errors.push(SchemaError::InvalidTypeUsage {
                owner: position.to_string(),
                ty: value.ty().to_string(),
                reason: "only scalar, enum and input object types can be used as input types",
            }),
            Some(_) => {}
        }

        if let Some(literal) = value.default_value() {
            let checked = parse_literal(literal)
                .and_then(|parsed| check_literal(&parsed, value.ty(), self));
            if let Err(reason) = checked {
                errors.push(SchemaError::InvalidDefaultValue {
                    owner: owner.to_string(),
                    name: value.name().to_string(),
                    reason,
                });
            }
        }
    }

    fn check_output_type(&self, position: &str, ty: &TypeRef, errors: &mut Vec<SchemaError>) {
        let named = ty.named_type();
        match self.resolve_kind(named) {
            None => errors.push(SchemaError::UnknownType {
                owner: position.to_string(),
                name: named.to_string(),
            }),
            Some(kind) if !kind.is_output() => errors.push(SchemaError::InvalidTypeUsage {
                owner: position.to_string(),
                ty: ty.to_string(),
                reason: "input object types cannot be used as output types",
            }),
            Some(_) => {}
        }
    }

    fn validate_type(&self, ty: &TypeDefinition, errors: &mut Vec<SchemaError>) {
        let kind = ty.kind();
        let owner = ty.name();
        let has_fields = matches!(kind, TypeKind::Object | TypeKind::Interface);

        self.check_members_fit_kind(ty, errors);

        let empty_member = match kind {
            TypeKind::Object | TypeKind::Interface if ty.fields().is_empty() => Some("field"),
            TypeKind::Union if ty.possible_types().is_empty() => Some("member type"),
            TypeKind::Enum if ty.enum_values().is_empty() => Some("value"),
            TypeKind::InputObject if ty.input_fields().is_empty() => Some("input field"),
            _ => None,
        };
        if let Some(member) = empty_member {
            errors.push(SchemaError::EmptyDefinition {
                name: owner.to_string(),
                kind: kind.label(),
                member,
            });
        }

        // Fields
        for name in duplicates(ty.fields().iter().map(|f| f.name())) {
            errors.push(SchemaError::DuplicateField {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }
        if has_fields {
            for field in ty.fields() {
                let position = format!("{}.{}", owner, field.name());
                self.check_output_type(&position, field.ty(), errors);
                self.validate_args(&position, field.args(), errors);
            }
        }

        // Input fields
        for name in duplicates(ty.input_fields().iter().map(|f| f.name())) {
            errors.push(SchemaError::DuplicateField {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }
        if kind == TypeKind::InputObject {
            for field in ty.input_fields() {
                self.check_input_value(owner, &format!("{}.{}", owner, field.name()), field, errors);
            }
        }

        // Enum values
        for name in duplicates(ty.enum_values().iter().map(|v| v.name())) {
            errors.push(SchemaError::DuplicateEnumValue {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }

        // Interfaces
        for name in duplicates(ty.interfaces().iter().map(String::as_str)) {
            errors.push(SchemaError::DuplicateMember {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }
        if has_fields {
            self.validate_interfaces(ty, errors);
        }

        // Union members
        for name in duplicates(ty.possible_types().iter().map(String::as_str)) {
            errors.push(SchemaError::DuplicateMember {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }
        if kind == TypeKind::Union {
            for member in ty.possible_types() {
                match self.type_definition(member) {
                    None => errors.push(SchemaError::UnknownType {
                        owner: owner.to_string(),
                        name: member.clone(),
                    }),
                    Some(def) if def.kind() != TypeKind::Object => {
                        errors.push(SchemaError::InvalidMember {
                            owner: owner.to_string(),
                            name: member.clone(),
                            reason: "union members must be object types",
                        })
                    }
                    Some(_) => {}
                }
            }
        }
    }

    /// Members recorded on a kind that cannot carry them.
    fn check_members_fit_kind(&self, ty: &TypeDefinition, errors: &mut Vec<SchemaError>) {
        let kind = ty.kind();
        let mut misplaced = |name: &str, reason: &'static str| {
            errors.push(SchemaError::InvalidMember {
                owner: ty.name().to_string(),
                name: name.to_string(),
                reason,
            })
        };

        if !matches!(kind, TypeKind::Object | TypeKind::Interface) {
            for field in ty.fields() {
                misplaced(field.name(), "fields are only allowed on object and interface types");
            }
            for interface in ty.interfaces() {
                misplaced(interface, "only object and interface types can implement interfaces");
            }
        }
        if kind != TypeKind::Union {
            for member in ty.possible_types() {
                misplaced(member, "member types are only allowed on unions");
            }
        }
        if kind != TypeKind::Enum {
            for value in ty.enum_values() {
                misplaced(value.name(), "values are only allowed on enums");
            }
        }
        if kind != TypeKind::InputObject {
            for field in ty.input_fields() {
                misplaced(field.name(), "input fields are only allowed on input objects");
            }
        }
        if kind != TypeKind::Scalar {
            if let Some(url) = ty.specified_by_url() {
                misplaced(url, "specifiedBy URLs are only allowed on scalars");
            }
        }
    }

    fn validate_interfaces(&self, ty: &TypeDefinition, errors: &mut Vec<SchemaError>) {
        let owner = ty.name();
        for interface_name in ty.interfaces() {
            if interface_name == owner {
                errors.push(SchemaError::InvalidMember {
                    owner: owner.to_string(),
                    name: interface_name.clone(),
                    reason: "a type cannot implement itself",
                });
                continue;
            }
            let interface = match self.type_definition(interface_name) {
                None => {
                    errors.push(SchemaError::UnknownType {
                        owner: owner.to_string(),
                        name: interface_name.clone(),
                    });
                    continue;
                }
                Some(def) if def.kind() != TypeKind::Interface => {
                    errors.push(SchemaError::InvalidMember {
                        owner: owner.to_string(),
                        name: interface_name.clone(),
                        reason: "implemented types must be interfaces",
                    });
                    continue;
                }
                Some(def) => def,
            };

            for transitive in interface.interfaces() {
                if transitive != owner && !ty.implements(transitive) {
                    errors.push(SchemaError::InvalidMember {
                        owner: owner.to_string(),
                        name: transitive.clone(),
                        reason: "interfaces implemented by an interface must also be declared",
                    });
                }
            }

            for interface_field in interface.fields() {
                if let Err(reason) = self.check_field_implementation(ty.field(interface_field.name()), interface_field) {
                    errors.push(SchemaError::InterfaceNotImplemented {
                        owner: owner.to_string(),
                        interface: interface_name.clone(),
                        field: interface_field.name().to_string(),
                        reason,
                    });
                }
            }
        }
    }

    fn check_field_implementation(
        &self,
        field: Option<&FieldDefinition>,
        interface_field: &FieldDefinition,
    ) -> Result<(), String> {
        let field = field.ok_or_else(|| "field is missing".to_string())?;

        for interface_arg in interface_field.args() {
            match field.arg(interface_arg.name()) {
                None => return Err(format!("argument '{}' is missing", interface_arg.name())),
                Some(arg) if arg.ty() != interface_arg.ty() => {
                    return Err(format!(
                        "argument '{}' must be of type {}",
                        interface_arg.name(),
                        interface_arg.ty()
                    ))
                }
                Some(_) => {}
            }
        }
        for arg in field.args() {
            if interface_field.arg(arg.name()).is_none() && arg.is_required() {
                return Err(format!("additional argument '{}' must be optional", arg.name()));
            }
        }

        if !self.is_valid_implementation_type(field.ty(), interface_field.ty()) {
            return Err(format!(
                "type {} is not compatible with {}",
                field.ty(),
                interface_field.ty()
            ));
        }
        Ok(())
    }

    /// Covariant field types: `field` may be stricter than `interface`.
    pub(crate) fn is_valid_implementation_type(&self, field: &TypeRef, interface: &TypeRef) -> bool {
        match (field, interface) {
            (TypeRef::NonNull(f), TypeRef::NonNull(i)) => self.is_valid_implementation_type(f, i),
            (TypeRef::NonNull(f), i) => self.is_valid_implementation_type(f, i),
            (_, TypeRef::NonNull(_)) => false,
            (TypeRef::List(f), TypeRef::List(i)) => self.is_valid_implementation_type(f, i),
            (TypeRef::List(_), _) | (_, TypeRef::List(_)) => false,
            (TypeRef::Named(f), TypeRef::Named(i)) => {
                if f == i {
                    return true;
                }
                let (Some(field_def), Some(interface_def)) =
                    (self.type_definition(f), self.type_definition(i))
                else {
                    return false;
                };
                match interface_def.kind() {
                    TypeKind::Union => interface_def.possible_types().iter().any(|m| m == f),
                    TypeKind::Interface => field_def.implements(i),
                    _ => false,
                }
            }
        }
    }

    fn validate_roots(&self, errors: &mut Vec<SchemaError>) {
        if self.config.require_query_type && self.query_type.is_none() {
            errors.push(SchemaError::InvalidRootType {
                operation: "query",
                name: String::new(),
                reason: "a query root type is required",
            });
        }

        let roots = [
            ("query", &self.query_type),
            ("mutation", &self.mutation_type),
            ("subscription", &self.subscription_type),
        ];
        for (operation, root) in roots {
            let Some(name) = root else {
                continue;
            };
            match self.type_definition(name) {
                None => errors.push(SchemaError::InvalidRootType {
                    operation,
                    name: name.clone(),
                    reason: "type is not registered",
                }),
                Some(def) if def.kind() != TypeKind::Object => {
                    errors.push(SchemaError::InvalidRootType {
                        operation,
                        name: name.clone(),
                        reason: "root types must be object types",
                    })
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;
    use crate::types::{DirectiveLocation, EnumValue};

    fn field(name: &str, ty: &str) -> FieldDefinition {
        FieldDefinition::new(name, None, TypeRef::parse(ty).unwrap()).unwrap()
    }

    fn arg(name: &str, ty: &str, default: Option<&str>) -> InputValue {
        InputValue::new(name, None, TypeRef::parse(ty).unwrap(), default).unwrap()
    }

    fn object(name: &str, fields: &[(&str, &str)]) -> TypeDefinition {
        fields
            .iter()
            .fold(TypeDefinition::object(name).unwrap(), |ty, (n, t)| ty.with_field(field(n, t)))
    }

    fn interface(name: &str, fields: &[(&str, &str)]) -> TypeDefinition {
        fields
            .iter()
            .fold(TypeDefinition::interface(name).unwrap(), |ty, (n, t)| ty.with_field(field(n, t)))
    }

    fn registry_with(types: Vec<TypeDefinition>) -> SchemaRegistry {
        let mut registry = SchemaRegistry::with_builtins();
        for ty in types {
            registry.register_type(ty).unwrap();
        }
        registry
    }

    #[test]
    fn test_deprecated_directive_validates() {
        let mut registry = SchemaRegistry::with_builtins();
        let mut directive = Directive::new("obsolete", Some("marks a field obsolete")).unwrap();
        directive.add_location(DirectiveLocation::FieldDefinition);
        directive.add_location(DirectiveLocation::EnumValue);
        directive.add_arg(arg("reason", "String", Some("\"No longer supported\"")));
        registry.register_directive(directive).unwrap();

        assert!(registry.validate().is_empty());
    }

    #[test]
    fn test_duplicate_arguments_collected_together() {
        let mut registry = SchemaRegistry::with_builtins();
        let mut cache = Directive::with_locations("cache", None, &[DirectiveLocation::Object]).unwrap();
        cache.add_arg(arg("ttl", "Int", None));
        cache.add_arg(arg("ttl", "Int", None));
        cache.add_arg(arg("ttl", "Int", None));
        registry.register_directive(cache).unwrap();

        let mut auth = Directive::new("auth", None).unwrap();
        auth.add_arg(arg("role", "String", None));
        auth.add_arg(arg("role", "String", None));
        registry.register_directive(auth).unwrap();

        let errors = registry.validate();
        assert_eq!(
            errors,
            vec![
                SchemaError::DuplicateArgument {
                    owner: "@cache".to_string(),
                    name: "ttl".to_string()
                },
                SchemaError::MissingDirectiveLocations("auth".to_string()),
                SchemaError::DuplicateArgument {
                    owner: "@auth".to_string(),
                    name: "role".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_missing_locations_allowed_when_configured() {
        let mut registry = SchemaRegistry::with_config(RegistryConfig {
            require_directive_locations: false,
            ..RegistryConfig::default()
        });
        registry.register_directive(Directive::new("pending", None).unwrap()).unwrap();
        assert!(registry.validate().is_empty());
    }

    #[test]
    fn test_unknown_and_misused_types() {
        let registry = registry_with(vec![
            object("Query", &[("user", "User"), ("filter", "Filter")]),
            TypeDefinition::input_object("Filter")
                .unwrap()
                .with_input_field(arg("owner", "Query", None)),
        ]);

        let errors = registry.validate();
        assert!(errors.contains(&SchemaError::UnknownType {
            owner: "Query.user".to_string(),
            name: "User".to_string()
        }));
        assert!(errors.iter().any(|e| matches!(
            e,
            SchemaError::InvalidTypeUsage { owner, .. } if owner == "Query.filter"
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            SchemaError::InvalidTypeUsage { owner, .. } if owner == "Filter.owner"
        )));
    }

    #[test]
    fn test_field_argument_checks() {
        let registry = registry_with(vec![TypeDefinition::object("Query")
            .unwrap()
            .with_field(
                field("users", "[String]")
                    .with_arg(arg("first", "Int", Some("\"ten\"")))
                    .with_arg(arg("first", "Int", None)),
            )]);

        let errors = registry.validate();
        assert!(errors.contains(&SchemaError::DuplicateArgument {
            owner: "Query.users".to_string(),
            name: "first".to_string()
        }));
        assert!(errors.iter().any(|e| matches!(
            e,
            SchemaError::InvalidDefaultValue { owner, name, .. } if owner == "Query.users" && name == "first"
        )));
    }

    #[test]
    fn test_empty_and_duplicate_members() {
        let status = TypeDefinition::enumeration("Status")
            .unwrap()
            .with_enum_value(EnumValue::new("ON", None).unwrap())
            .with_enum_value(EnumValue::new("ON", None).unwrap());
        let registry = registry_with(vec![
            object("Empty", &[]),
            object("Twice", &[("a", "Int"), ("a", "String")]),
            status,
            TypeDefinition::union("Nothing").unwrap(),
        ]);

        let errors = registry.validate();
        assert!(errors.contains(&SchemaError::EmptyDefinition {
            name: "Empty".to_string(),
            kind: "Object",
            member: "field"
        }));
        assert!(errors.contains(&SchemaError::EmptyDefinition {
            name: "Nothing".to_string(),
            kind: "Union",
            member: "member type"
        }));
        assert!(errors.contains(&SchemaError::DuplicateField {
            owner: "Twice".to_string(),
            name: "a".to_string()
        }));
        assert!(errors.contains(&SchemaError::DuplicateEnumValue {
            owner: "Status".to_string(),
            name: "ON".to_string()
        }));
    }

    #[test]
    fn test_members_on_wrong_kind() {
        let mut scalar = TypeDefinition::scalar("Date").unwrap();
        scalar.add_field(field("year", "Int"));
        let registry = registry_with(vec![scalar]);

        assert_eq!(
            registry.validate(),
            vec![SchemaError::InvalidMember {
                owner: "Date".to_string(),
                name: "year".to_string(),
                reason: "fields are only allowed on object and interface types"
            }]
        );
    }

    #[test]
    fn test_union_members_must_be_objects() {
        let registry = registry_with(vec![
            object("Photo", &[("url", "String")]),
            interface("Node", &[("id", "ID!")]),
            TypeDefinition::union("Media")
                .unwrap()
                .with_possible_type("Photo")
                .with_possible_type("Node")
                .with_possible_type("Video")
                .with_possible_type("Photo"),
        ]);

        let errors = registry.validate();
        assert_eq!(
            errors,
            vec![
                SchemaError::DuplicateMember {
                    owner: "Media".to_string(),
                    name: "Photo".to_string()
                },
                SchemaError::InvalidMember {
                    owner: "Media".to_string(),
                    name: "Node".to_string(),
                    reason: "union members must be object types"
                },
                SchemaError::UnknownType {
                    owner: "Media".to_string(),
                    name: "Video".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_interface_implementation() {
        let node = interface("Node", &[("id", "ID!"), ("parent", "Node")]);
        let good = object("User", &[("id", "ID!"), ("parent", "User"), ("name", "String")])
            .with_interface("Node");
        let bad = object("Post", &[("id", "ID"), ("title", "String")]).with_interface("Node");

        let registry = registry_with(vec![node, good, bad]);
        let errors = registry.validate();

        assert_eq!(
            errors,
            vec![
                SchemaError::InterfaceNotImplemented {
                    owner: "Post".to_string(),
                    interface: "Node".to_string(),
                    field: "id".to_string(),
                    reason: "type ID is not compatible with ID!".to_string()
                },
                SchemaError::InterfaceNotImplemented {
                    owner: "Post".to_string(),
                    interface: "Node".to_string(),
                    field: "parent".to_string(),
                    reason: "field is missing".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_interface_arguments() {
        let search = interface("Searchable", &[]).with_field(
            field("search", "[String]").with_arg(arg("term", "String!", None)),
        );
        let wrong_type = object("A", &[])
            .with_interface("Searchable")
            .with_field(field("search", "[String]").with_arg(arg("term", "String", None)));
        let extra_required = object("B", &[]).with_interface("Searchable").with_field(
            field("search", "[String]")
                .with_arg(arg("term", "String!", None))
                .with_arg(arg("limit", "Int!", None)),
        );
        let extra_optional = object("C", &[]).with_interface("Searchable").with_field(
            field("search", "[String!]!")
                .with_arg(arg("term", "String!", None))
                .with_arg(arg("limit", "Int!", Some("10"))),
        );

        let registry = registry_with(vec![search, wrong_type, extra_required, extra_optional]);
        let errors: Vec<String> = registry.validate().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            errors,
            vec![
                "A does not implement Searchable.search: argument 'term' must be of type String!",
                "B does not implement Searchable.search: additional argument 'limit' must be optional",
            ]
        );
    }

    #[test]
    fn test_implementing_non_interfaces() {
        let registry = registry_with(vec![
            object("Base", &[("id", "ID")]),
            object("Child", &[("id", "ID")]).with_interface("Base").with_interface("Child"),
        ]);
        let errors = registry.validate();
        assert_eq!(
            errors,
            vec![
                SchemaError::InvalidMember {
                    owner: "Child".to_string(),
                    name: "Base".to_string(),
                    reason: "implemented types must be interfaces"
                },
                SchemaError::InvalidMember {
                    owner: "Child".to_string(),
                    name: "Child".to_string(),
                    reason: "a type cannot implement itself"
                },
            ]
        );
    }

    #[test]
    fn test_transitive_interfaces_must_be_declared() {
        let node = interface("Node", &[("id", "ID!")]);
        let resource = interface("Resource", &[("id", "ID!"), ("url", "String")]).with_interface("Node");
        let image = object("Image", &[("id", "ID!"), ("url", "String")]).with_interface("Resource");

        let registry = registry_with(vec![node, resource, image]);
        assert_eq!(
            registry.validate(),
            vec![SchemaError::InvalidMember {
                owner: "Image".to_string(),
                name: "Node".to_string(),
                reason: "interfaces implemented by an interface must also be declared"
            }]
        );
    }

    #[test]
    fn test_union_covariance() {
        let registry = registry_with(vec![
            object("Photo", &[("url", "String")]),
            TypeDefinition::union("Media").unwrap().with_possible_type("Photo"),
        ]);
        assert!(registry.is_valid_implementation_type(
            &TypeRef::parse("[Photo!]!").unwrap(),
            &TypeRef::parse("[Media]").unwrap()
        ));
        assert!(!registry.is_valid_implementation_type(
            &TypeRef::parse("[Media]").unwrap(),
            &TypeRef::parse("[Photo]").unwrap()
        ));
        assert!(!registry.is_valid_implementation_type(
            &TypeRef::parse("Photo").unwrap(),
            &TypeRef::parse("[Photo]").unwrap()
        ));
    }

    #[test]
    fn test_root_types() {
        let mut registry = registry_with(vec![
            object("Query", &[("ok", "Boolean")]),
            TypeDefinition::input_object("Input")
                .unwrap()
                .with_input_field(arg("x", "Int", None)),
        ]);
        registry.set_query_type("Query").unwrap();
        registry.set_mutation_type("Input").unwrap();
        registry.set_subscription_type("Events").unwrap();

        let errors = registry.validate();
        assert_eq!(
            errors,
            vec![
                SchemaError::InvalidRootType {
                    operation: "mutation",
                    name: "Input".to_string(),
                    reason: "root types must be object types"
                },
                SchemaError::InvalidRootType {
                    operation: "subscription",
                    name: "Events".to_string(),
                    reason: "type is not registered"
                },
            ]
        );
    }

    #[test]
    fn test_query_type_required_when_configured() {
        let registry = SchemaRegistry::with_config(RegistryConfig {
            require_query_type: true,
            ..RegistryConfig::default()
        });
        assert!(matches!(
            registry.validate().as_slice(),
            [SchemaError::InvalidRootType { operation: "query", .. }]
        ));
    }

    #[test]
    fn test_input_cycle_reported() {
        let registry = registry_with(vec![
            TypeDefinition::input_object("A")
                .unwrap()
                .with_input_field(arg("b", "B!", None)),
            TypeDefinition::input_object("B")
                .unwrap()
                .with_input_field(arg("a", "A!", None)),
        ]);
        assert_eq!(
            registry.validate(),
            vec![SchemaError::InputObjectCycle(vec![
                "A".to_string(),
                "B".to_string(),
                "A".to_string()
            ])]
        );
    }

    #[test]
    fn test_builtin_scalars_resolve_without_seeding() {
        let mut registry = SchemaRegistry::new();
        let mut deprecated = Directive::new("deprecated", Some("marks a field obsolete")).unwrap();
        deprecated.add_location(DirectiveLocation::FieldDefinition);
        deprecated.add_location(DirectiveLocation::EnumValue);
        deprecated.add_arg(
            InputValue::new(
                "reason",
                Some(""),
                TypeRef::named("String"),
                Some("\"No longer supported\""),
            )
            .unwrap(),
        );
        registry.register_directive(deprecated).unwrap();
        registry
            .register_type(
                TypeDefinition::object("Query")
                    .unwrap()
                    .with_field(FieldDefinition::new("count", None, TypeRef::parse("Int!").unwrap()).unwrap()),
            )
            .unwrap();

        assert!(registry.validate().is_empty());
        registry.finalize().unwrap();
        assert!(registry.type_definition("String").is_none());
    }

    #[test]
    fn test_unregistered_builtin_scalar_default_still_checked() {
        let mut registry = SchemaRegistry::new();
        let mut limit = Directive::new("limit", None).unwrap();
        limit.add_location(DirectiveLocation::FieldDefinition);
        limit.add_arg(InputValue::new("max", None, TypeRef::named("Int"), Some("\"ten\"")).unwrap());
        registry.register_directive(limit).unwrap();

        assert!(matches!(
            registry.validate().as_slice(),
            [SchemaError::InvalidDefaultValue { owner, name, .. }] if owner == "@limit" && name == "max"
        ));
    }

    #[test]
    fn test_duplicates_helper() {
        assert_eq!(duplicates(["a", "b", "a", "c", "a", "b"]), vec!["a", "b"]);
        assert!(duplicates(Vec::<&str>::new()).is_empty());
    }
}
