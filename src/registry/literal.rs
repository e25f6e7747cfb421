//
//  literal.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

use async_graphql::parser::parse_query;
use async_graphql::parser::types::{DocumentOperations, Selection};
use async_graphql::Value;

use super::builtins::is_builtin_scalar;
use super::SchemaRegistry;
use crate::types::{TypeKind, TypeRef};

/// Parse a GraphQL constant literal such as `10`, `"text"`, `[A, B]` or `{ x: 1 }`.
///
/// The literal is parsed as the single argument of a throwaway field so the
/// GraphQL parser handles escapes, block strings and nesting.
pub fn parse_literal(literal: &str) -> Result<Value, String> {
    let document = parse_query(format!("{{ f(v: {}) }}", literal))
        .map_err(|e| format!("not a GraphQL literal: {}", e))?;

    let operation = match document.operations {
        DocumentOperations::Single(operation) => operation,
        DocumentOperations::Multiple(_) => return Err("not a single GraphQL literal".to_string()),
    };
    if !document.fragments.is_empty() {
        return Err("not a single GraphQL literal".to_string());
    }

    let items = &operation.node.selection_set.node.items;
    let field = match items.as_slice() {
        [item] => match &item.node {
            Selection::Field(field) => &field.node,
            _ => return Err("not a single GraphQL literal".to_string()),
        },
        _ => return Err("not a single GraphQL literal".to_string()),
    };
    if !field.directives.is_empty() || !field.selection_set.node.items.is_empty() {
        return Err("not a single GraphQL literal".to_string());
    }

    match field.arguments.as_slice() {
        [(_, value)] => value
            .node
            .clone()
            .into_const()
            .ok_or_else(|| "variables are not allowed in default values".to_string()),
        _ => Err("not a single GraphQL literal".to_string()),
    }
}

/// Check that a constant value can be coerced to `ty`.
///
/// References to unknown types pass here; dangling names are reported by the
/// reference check instead.
pub(crate) fn check_literal(value: &Value, ty: &TypeRef, schema: &SchemaRegistry) -> Result<(), String> {
    match ty {
        TypeRef::NonNull(inner) => {
            if matches!(value, Value::Null) {
                return Err(format!("null is not allowed for non-null type {}", ty));
            }
            check_literal(value, inner, schema)
        }
        TypeRef::List(inner) => match value {
            Value::Null => Ok(()),
            Value::List(items) => items
                .iter()
                .try_for_each(|item| check_literal(item, inner, schema)),
            // Single values coerce to a one-element list
            other => check_literal(other, inner, schema),
        },
        TypeRef::Named(name) => {
            if matches!(value, Value::Null) {
                return Ok(());
            }
            let Some(def) = schema.type_definition(name) else {
                if is_builtin_scalar(name) {
                    return check_scalar(value, name);
                }
                return Ok(());
            };
            match def.kind() {
                TypeKind::Scalar => check_scalar(value, name),
                TypeKind::Enum => match value {
                    Value::Enum(member) if def.has_enum_value(member.as_str()) => Ok(()),
                    Value::Enum(member) => {
                        Err(format!("'{}' is not a value of enum {}", member.as_str(), name))
                    }
                    _ => Err(format!("expected a value of enum {}", name)),
                },
                TypeKind::InputObject => {
                    let Value::Object(fields) = value else {
                        return Err(format!("expected an object for input type {}", name));
                    };
                    for (key, _) in fields.iter() {
                        if def.input_field(key.as_str()).is_none() {
                            return Err(format!("{} has no field '{}'", name, key.as_str()));
                        }
                    }
                    for input in def.input_fields() {
                        match fields.iter().find(|(k, _)| k.as_str() == input.name()) {
                            Some((_, field_value)) => {
                                check_literal(field_value, input.ty(), schema)
                                    .map_err(|e| format!("{}.{}: {}", name, input.name(), e))?;
                            }
                            None if input.is_required() => {
                                return Err(format!(
                                    "missing required field '{}' of {}",
                                    input.name(),
                                    name
                                ));
                            }
                            None => {}
                        }
                    }
                    Ok(())
                }
                // Output types in input position are reported separately
                TypeKind::Object | TypeKind::Interface | TypeKind::Union => Ok(()),
            }
        }
    }
}

fn check_scalar(value: &Value, scalar: &str) -> Result<(), String> {
    let ok = match scalar {
        "Int" => match value {
            Value::Number(n) => n.as_i64().is_some_and(|v| i32::try_from(v).is_ok()),
            _ => false,
        },
        "Float" => matches!(value, Value::Number(_)),
        "String" => matches!(value, Value::String(_)),
        "Boolean" => matches!(value, Value::Boolean(_)),
        "ID" => match value {
            Value::String(_) => true,
            Value::Number(n) => n.is_i64() || n.is_u64(),
            _ => false,
        },
        // Custom scalars accept any literal
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(format!("literal is not a valid {}", scalar))
    }
}
