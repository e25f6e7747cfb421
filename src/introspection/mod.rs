//
//  mod.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

//! Conversion between a finalized registry and the standard introspection JSON.

pub mod types;

use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::registry::SchemaRegistry;
use crate::types::{
    Directive, EnumValue, FieldDefinition, InputValue, TypeDefinition, TypeKind, TypeRef,
};
pub use types::*;

impl From<TypeKind> for IntrospectionTypeKind {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Scalar => IntrospectionTypeKind::Scalar,
            TypeKind::Object => IntrospectionTypeKind::Object,
            TypeKind::Interface => IntrospectionTypeKind::Interface,
            TypeKind::Union => IntrospectionTypeKind::Union,
            TypeKind::Enum => IntrospectionTypeKind::Enum,
            TypeKind::InputObject => IntrospectionTypeKind::InputObject,
        }
    }
}

/// Parse introspection JSON, with or without the `data` envelope.
pub fn parse_introspection(json: &str) -> serde_json::Result<IntrospectionSchema> {
    let envelope: IntrospectionEnvelope = serde_json::from_str(json)?;
    Ok(envelope.into_schema())
}

/// Render `{ "__schema": ... }` as pretty JSON.
pub fn to_json(schema: &IntrospectionSchema) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&IntrospectionResult {
        schema: schema.clone(),
    })
}

impl SchemaRegistry {
    /// Export the finalized schema as the `__schema` introspection object.
    pub fn to_introspection(&self) -> Result<IntrospectionSchema> {
        self.ensure_finalized()?;

        let root = |name: Option<&str>| name.map(|n| NamedTypeRef { name: n.to_string() });
        Ok(IntrospectionSchema {
            query_type: root(self.query_type()),
            mutation_type: root(self.mutation_type()),
            subscription_type: root(self.subscription_type()),
            types: self.types().iter().map(|ty| self.export_type(ty)).collect(),
            directives: self
                .directives()
                .iter()
                .map(|d| self.export_directive(d))
                .collect(),
        })
    }

    fn export_type_ref(&self, ty: &TypeRef) -> IntrospectionTypeRef {
        match ty {
            TypeRef::Named(name) => IntrospectionTypeRef {
                // Unknown names cannot survive finalize; scalar is a placeholder
                kind: self
                    .type_definition(name)
                    .map(|def| def.kind().into())
                    .unwrap_or(IntrospectionTypeKind::Scalar),
                name: Some(name.clone()),
                of_type: None,
            },
            TypeRef::List(inner) => IntrospectionTypeRef {
                kind: IntrospectionTypeKind::List,
                name: None,
                of_type: Some(Box::new(self.export_type_ref(inner))),
            },
            TypeRef::NonNull(inner) => IntrospectionTypeRef {
                kind: IntrospectionTypeKind::NonNull,
                name: None,
                of_type: Some(Box::new(self.export_type_ref(inner))),
            },
        }
    }

    fn export_input_value(&self, value: &InputValue) -> IntrospectionInputValue {
        IntrospectionInputValue {
            name: value.name().to_string(),
            description: value.description().map(str::to_string),
            ty: self.export_type_ref(value.ty()),
            default_value: value.default_value().map(str::to_string),
        }
    }

    fn export_directive(&self, directive: &Directive) -> IntrospectionDirective {
        IntrospectionDirective {
            name: directive.name().to_string(),
            description: directive.description().map(str::to_string),
            locations: directive.locations().to_vec(),
            args: directive.args().iter().map(|a| self.export_input_value(a)).collect(),
            is_repeatable: directive.is_repeatable(),
        }
    }

    fn export_named_refs<'a>(&self, names: impl Iterator<Item = &'a str>) -> Vec<IntrospectionTypeRef> {
        names
            .map(|name| self.export_type_ref(&TypeRef::named(name)))
            .collect()
    }

    fn export_type(&self, ty: &TypeDefinition) -> IntrospectionType {
        let kind = ty.kind();
        let has_fields = matches!(kind, TypeKind::Object | TypeKind::Interface);

        let fields = has_fields.then(|| {
            ty.fields()
                .iter()
                .map(|field| IntrospectionField {
                    name: field.name().to_string(),
                    description: field.description().map(str::to_string),
                    args: field.args().iter().map(|a| self.export_input_value(a)).collect(),
                    ty: self.export_type_ref(field.ty()),
                    is_deprecated: field.is_deprecated(),
                    deprecation_reason: field.deprecation_reason().map(str::to_string),
                })
                .collect()
        });

        let interfaces =
            has_fields.then(|| self.export_named_refs(ty.interfaces().iter().map(String::as_str)));

        let possible_types = match kind {
            TypeKind::Union => Some(self.export_named_refs(ty.possible_types().iter().map(String::as_str))),
            TypeKind::Interface => Some(
                self.export_named_refs(
                    self.types()
                        .iter()
                        .filter(|t| t.kind() == TypeKind::Object && t.implements(ty.name()))
                        .map(|t| t.name()),
                ),
            ),
            _ => None,
        };

        let enum_values = (kind == TypeKind::Enum).then(|| {
            ty.enum_values()
                .iter()
                .map(|value| IntrospectionEnumValue {
                    name: value.name().to_string(),
                    description: value.description().map(str::to_string),
                    is_deprecated: value.is_deprecated(),
                    deprecation_reason: value.deprecation_reason().map(str::to_string),
                })
                .collect()
        });

        let input_fields = (kind == TypeKind::InputObject).then(|| {
            ty.input_fields()
                .iter()
                .map(|f| self.export_input_value(f))
                .collect()
        });

        IntrospectionType {
            kind: kind.into(),
            name: Some(ty.name().to_string()),
            description: ty.description().map(str::to_string),
            specified_by_url: ty.specified_by_url().map(str::to_string),
            fields,
            interfaces,
            possible_types,
            enum_values,
            input_fields,
            of_type: None,
        }
    }

    /// Rebuild an open registry from introspection data.
    ///
    /// Definitions go through the same builder calls the analysis front-end
    /// uses, so the result still has to be finalized. Built-ins are never
    /// seeded because introspection output already lists them.
    pub fn from_introspection(schema: &IntrospectionSchema, config: RegistryConfig) -> Result<Self> {
        let mut registry = SchemaRegistry::with_config(RegistryConfig {
            include_builtins: false,
            ..config
        });

        for ty in &schema.types {
            registry.register_type(import_type(ty)?)?;
        }
        for directive in &schema.directives {
            registry.register_directive(import_directive(directive)?)?;
        }
        if let Some(root) = &schema.query_type {
            registry.set_query_type(root.name.clone())?;
        }
        if let Some(root) = &schema.mutation_type {
            registry.set_mutation_type(root.name.clone())?;
        }
        if let Some(root) = &schema.subscription_type {
            registry.set_subscription_type(root.name.clone())?;
        }

        debug!(
            types = schema.types.len(),
            directives = schema.directives.len(),
            "imported introspection schema"
        );
        Ok(registry)
    }
}

fn import_type_ref(ty: &IntrospectionTypeRef) -> Result<TypeRef> {
    match ty.kind {
        IntrospectionTypeKind::List | IntrospectionTypeKind::NonNull => {
            let inner = ty.of_type.as_deref().ok_or_else(|| {
                SchemaError::InvalidTypeReference(format!("{:?} without ofType", ty.kind))
            })?;
            let inner = import_type_ref(inner)?;
            Ok(match ty.kind {
                IntrospectionTypeKind::List => inner.list(),
                _ => inner.non_null(),
            })
        }
        _ => {
            let name = ty.name.as_deref().ok_or_else(|| {
                SchemaError::InvalidTypeReference(format!("{:?} without name", ty.kind))
            })?;
            TypeRef::parse(name)
        }
    }
}

fn import_input_value(value: &IntrospectionInputValue) -> Result<InputValue> {
    InputValue::new(
        value.name.clone(),
        value.description.as_deref(),
        import_type_ref(&value.ty)?,
        value.default_value.as_deref(),
    )
}

fn import_kind(ty: &IntrospectionType) -> Result<TypeKind> {
    Ok(match ty.kind {
        IntrospectionTypeKind::Scalar => TypeKind::Scalar,
        IntrospectionTypeKind::Object => TypeKind::Object,
        IntrospectionTypeKind::Interface => TypeKind::Interface,
        IntrospectionTypeKind::Union => TypeKind::Union,
        IntrospectionTypeKind::Enum => TypeKind::Enum,
        IntrospectionTypeKind::InputObject => TypeKind::InputObject,
        IntrospectionTypeKind::List | IntrospectionTypeKind::NonNull => {
            return Err(SchemaError::InvalidTypeReference(format!(
                "wrapping type {:?} in the types list",
                ty.kind
            )))
        }
    })
}

fn import_type(ty: &IntrospectionType) -> Result<TypeDefinition> {
    let name = ty
        .name
        .as_deref()
        .ok_or_else(|| SchemaError::InvalidIdentifier {
            name: String::new(),
            reason: "named types must have a name",
        })?;
    let mut def = TypeDefinition::new(name, import_kind(ty)?, ty.description.as_deref())?;

    if let Some(url) = &ty.specified_by_url {
        def = def.with_specified_by_url(url.clone());
    }
    for field in ty.fields.iter().flatten() {
        let mut imported =
            FieldDefinition::new(field.name.clone(), field.description.as_deref(), import_type_ref(&field.ty)?)?;
        for arg in &field.args {
            imported.add_arg(import_input_value(arg)?);
        }
        if field.is_deprecated {
            imported = imported.deprecated(field.deprecation_reason.as_deref());
        }
        def.add_field(imported);
    }
    for interface in ty.interfaces.iter().flatten() {
        def.add_interface(import_type_ref(interface)?.named_type());
    }
    // Interface possibleTypes are derived from implementers on export
    if def.kind() == TypeKind::Union {
        for member in ty.possible_types.iter().flatten() {
            def.add_possible_type(import_type_ref(member)?.named_type());
        }
    }
    for value in ty.enum_values.iter().flatten() {
        let mut imported = EnumValue::new(value.name.clone(), value.description.as_deref())?;
        if value.is_deprecated {
            imported = imported.deprecated(value.deprecation_reason.as_deref());
        }
        def.add_enum_value(imported);
    }
    for field in ty.input_fields.iter().flatten() {
        def.add_input_field(import_input_value(field)?);
    }
    Ok(def)
}

fn import_directive(directive: &IntrospectionDirective) -> Result<Directive> {
    let mut imported = Directive::with_locations(
        directive.name.clone(),
        directive.description.as_deref(),
        &directive.locations,
    )?;
    if directive.is_repeatable {
        imported = imported.repeatable();
    }
    for arg in &directive.args {
        imported.add_arg(import_input_value(arg)?);
    }
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DirectiveLocation;

    fn sample() -> SchemaRegistry {
        let mut registry = SchemaRegistry::with_builtins();

        let mut cache = Directive::new("cache", Some("Cache hints")).unwrap();
        cache.add_location(DirectiveLocation::FieldDefinition);
        cache.add_location(DirectiveLocation::Object);
        cache.add_arg(InputValue::new("maxAge", None, TypeRef::named("Int"), Some("60")).unwrap());
        cache.add_arg(InputValue::new("scope", None, TypeRef::named("Scope"), Some("PUBLIC")).unwrap());
        registry.register_directive(cache.repeatable()).unwrap();

        registry
            .register_type(
                TypeDefinition::enumeration("Scope")
                    .unwrap()
                    .with_enum_value(EnumValue::new("PUBLIC", None).unwrap())
                    .with_enum_value(
                        EnumValue::new("PRIVATE", Some("Per user")).unwrap().deprecated(Some("Use auth")),
                    ),
            )
            .unwrap();
        registry
            .register_type(
                TypeDefinition::interface("Node")
                    .unwrap()
                    .with_field(FieldDefinition::new("id", None, TypeRef::parse("ID!").unwrap()).unwrap()),
            )
            .unwrap();
        registry
            .register_type(
                TypeDefinition::object("User")
                    .unwrap()
                    .with_description("A user")
                    .with_interface("Node")
                    .with_field(FieldDefinition::new("id", None, TypeRef::parse("ID!").unwrap()).unwrap())
                    .with_field(
                        FieldDefinition::new("nick", None, TypeRef::named("String"))
                            .unwrap()
                            .deprecated(None),
                    ),
            )
            .unwrap();
        registry
            .register_type(TypeDefinition::union("SearchResult").unwrap().with_possible_type("User"))
            .unwrap();
        registry
            .register_type(
                TypeDefinition::input_object("UserFilter").unwrap().with_input_field(
                    InputValue::new("ids", None, TypeRef::parse("[ID!]").unwrap(), None).unwrap(),
                ),
            )
            .unwrap();
        registry
            .register_type(
                TypeDefinition::object("Query").unwrap().with_field(
                    FieldDefinition::new("search", None, TypeRef::parse("[SearchResult!]!").unwrap())
                        .unwrap()
                        .with_arg(InputValue::new("filter", None, TypeRef::named("UserFilter"), None).unwrap()),
                ),
            )
            .unwrap();
        registry
            .register_type(TypeDefinition::scalar("URL").unwrap().with_specified_by_url("https://url.spec.whatwg.org/"))
            .unwrap();
        registry.set_query_type("Query").unwrap();
        registry.finalize().unwrap();
        registry
    }

    #[test]
    fn test_export_requires_finalize() {
        let registry = SchemaRegistry::with_builtins();
        assert_eq!(registry.to_introspection().unwrap_err(), SchemaError::NotFinalized);
    }

    #[test]
    fn test_json_field_names() {
        let schema = sample().to_introspection().unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&schema).unwrap()).unwrap();
        let root = &json["__schema"];

        assert_eq!(root["queryType"]["name"], "Query");
        assert!(root["mutationType"].is_null());

        let cache = root["directives"]
            .as_array()
            .unwrap()
            .iter()
            .find(|d| d["name"] == "cache")
            .unwrap();
        assert_eq!(cache["locations"], serde_json::json!(["FIELD_DEFINITION", "OBJECT"]));
        assert_eq!(cache["isRepeatable"], true);
        assert_eq!(cache["args"][0]["name"], "maxAge");
        assert_eq!(cache["args"][0]["defaultValue"], "60");
        assert_eq!(cache["args"][1]["type"]["kind"], "ENUM");

        let types = root["types"].as_array().unwrap();
        let user = types.iter().find(|t| t["name"] == "User").unwrap();
        assert_eq!(user["kind"], "OBJECT");
        assert_eq!(user["interfaces"][0]["name"], "Node");
        assert!(user["enumValues"].is_null());
        assert_eq!(user["fields"][1]["isDeprecated"], true);
        assert!(user["fields"][1]["deprecationReason"].is_null());
        assert_eq!(user["fields"][0]["type"]["kind"], "NON_NULL");
        assert_eq!(user["fields"][0]["type"]["ofType"]["name"], "ID");

        let node = types.iter().find(|t| t["name"] == "Node").unwrap();
        assert_eq!(node["possibleTypes"][0]["name"], "User");

        let url = types.iter().find(|t| t["name"] == "URL").unwrap();
        assert_eq!(url["specifiedByURL"], "https://url.spec.whatwg.org/");

        let filter = types.iter().find(|t| t["name"] == "UserFilter").unwrap();
        assert!(filter["fields"].is_null());
        assert_eq!(filter["inputFields"][0]["type"]["kind"], "LIST");
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let original = sample().to_introspection().unwrap();
        let json = to_json(&original).unwrap();

        let parsed = parse_introspection(&json).unwrap();
        let mut rebuilt = SchemaRegistry::from_introspection(&parsed, RegistryConfig::default()).unwrap();
        assert!(!rebuilt.is_finalized());
        rebuilt.finalize().unwrap();

        let exported = rebuilt.to_introspection().unwrap();
        assert_eq!(exported, original);

        let names: Vec<&str> = rebuilt.directives().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["include", "skip", "deprecated", "specifiedBy", "cache"]);
        let cache = rebuilt.directive("cache").unwrap();
        assert_eq!(
            cache.locations(),
            &[DirectiveLocation::FieldDefinition, DirectiveLocation::Object]
        );
        let args: Vec<String> = cache.args().iter().map(|a| a.to_string()).collect();
        assert_eq!(args, vec!["maxAge: Int = 60", "scope: Scope = PUBLIC"]);
    }

    #[test]
    fn test_parse_response_envelope() {
        let json = r#"{
            "data": {
                "__schema": {
                    "queryType": { "name": "Query" },
                    "mutationType": null,
                    "subscriptionType": null,
                    "types": [
                        { "kind": "SCALAR", "name": "String", "description": null },
                        {
                            "kind": "OBJECT",
                            "name": "Query",
                            "fields": [
                                {
                                    "name": "hello",
                                    "args": [],
                                    "type": { "kind": "SCALAR", "name": "String", "ofType": null },
                                    "isDeprecated": false,
                                    "deprecationReason": null
                                }
                            ],
                            "interfaces": []
                        }
                    ],
                    "directives": [
                        { "name": "auth", "locations": ["OBJECT"], "args": [] }
                    ]
                }
            }
        }"#;

        let schema = parse_introspection(json).unwrap();
        let mut registry = SchemaRegistry::from_introspection(&schema, RegistryConfig::default()).unwrap();
        registry.finalize().unwrap();
        assert_eq!(registry.query_type(), Some("Query"));
        assert!(!registry.directive("auth").unwrap().is_repeatable());
        assert_eq!(registry.type_definition("Query").unwrap().fields().len(), 1);
    }

    #[test]
    fn test_import_rejects_broken_refs() {
        let broken = IntrospectionTypeRef {
            kind: IntrospectionTypeKind::NonNull,
            name: None,
            of_type: None,
        };
        assert!(matches!(
            import_type_ref(&broken),
            Err(SchemaError::InvalidTypeReference(_))
        ));

        let wrapped = IntrospectionType {
            kind: IntrospectionTypeKind::List,
            name: Some("Oops".to_string()),
            description: None,
            specified_by_url: None,
            fields: None,
            interfaces: None,
            possible_types: None,
            enum_values: None,
            input_fields: None,
            of_type: None,
        };
        assert!(import_type(&wrapped).is_err());
    }

    #[test]
    fn test_import_duplicate_directive() {
        let mut schema = sample().to_introspection().unwrap();
        let dup = schema.directives[0].clone();
        schema.directives.push(dup);
        assert_eq!(
            SchemaRegistry::from_introspection(&schema, RegistryConfig::default()).unwrap_err(),
            SchemaError::DuplicateDirective("include".to_string())
        );
    }
}
