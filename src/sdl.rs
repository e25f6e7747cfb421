//
//  sdl.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

//! SDL rendering for finalized registries.

use std::fmt::Write;

use crate::error::Result;
use crate::registry::builtins::{is_builtin_directive, is_builtin_scalar, is_introspection_name};
use crate::registry::SchemaRegistry;
use crate::types::{Deprecation, Directive, InputValue, TypeDefinition, TypeKind};

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Quote a string as a GraphQL string literal.
fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

fn write_description(out: &mut String, description: Option<&str>, indent: &str) {
    let Some(description) = description else {
        return;
    };
    let escaped = description.replace("\"\"\"", "\\\"\"\"");
    let _ = writeln!(out, "{indent}\"\"\"");
    for line in escaped.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{indent}{line}");
        }
    }
    let _ = writeln!(out, "{indent}\"\"\"");
}

fn deprecation_suffix(deprecation: &Deprecation) -> String {
    match deprecation {
        Deprecation::Current => String::new(),
        Deprecation::Deprecated(None) => " @deprecated".to_string(),
        Deprecation::Deprecated(Some(reason)) if reason == DEFAULT_DEPRECATION_REASON => {
            " @deprecated".to_string()
        }
        Deprecation::Deprecated(Some(reason)) => format!(" @deprecated(reason: {})", quote(reason)),
    }
}

fn write_args(out: &mut String, args: &[InputValue], indent: &str) {
    if args.is_empty() {
        return;
    }
    if args.iter().all(|a| a.description().is_none()) {
        let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let _ = write!(out, "({})", rendered.join(", "));
        return;
    }

    let inner = format!("{indent}  ");
    out.push_str("(\n");
    for arg in args {
        write_description(out, arg.description(), &inner);
        let _ = writeln!(out, "{inner}{arg}");
    }
    let _ = write!(out, "{indent})");
}

fn render_directive(out: &mut String, directive: &Directive) {
    write_description(out, directive.description(), "");
    let _ = write!(out, "directive @{}", directive.name());
    write_args(out, directive.args(), "");
    if directive.is_repeatable() {
        out.push_str(" repeatable");
    }
    let locations: Vec<&str> = directive.locations().iter().map(|l| l.as_str()).collect();
    let _ = writeln!(out, " on {}", locations.join(" | "));
}

fn render_type(out: &mut String, ty: &TypeDefinition) {
    write_description(out, ty.description(), "");
    match ty.kind() {
        TypeKind::Scalar => {
            let _ = write!(out, "scalar {}", ty.name());
            if let Some(url) = ty.specified_by_url() {
                let _ = write!(out, " @specifiedBy(url: {})", quote(url));
            }
            out.push('\n');
        }
        TypeKind::Object | TypeKind::Interface => {
            let keyword = if ty.kind() == TypeKind::Object { "type" } else { "interface" };
            let _ = write!(out, "{} {}", keyword, ty.name());
            if !ty.interfaces().is_empty() {
                let _ = write!(out, " implements {}", ty.interfaces().join(" & "));
            }
            out.push_str(" {\n");
            for field in ty.fields() {
                write_description(out, field.description(), "  ");
                let _ = write!(out, "  {}", field.name());
                write_args(out, field.args(), "  ");
                let _ = writeln!(out, ": {}{}", field.ty(), deprecation_suffix(field.deprecation()));
            }
            out.push_str("}\n");
        }
        TypeKind::Union => {
            let _ = writeln!(out, "union {} = {}", ty.name(), ty.possible_types().join(" | "));
        }
        TypeKind::Enum => {
            let _ = writeln!(out, "enum {} {{", ty.name());
            for value in ty.enum_values() {
                write_description(out, value.description(), "  ");
                let _ = writeln!(out, "  {}{}", value.name(), deprecation_suffix(value.deprecation()));
            }
            out.push_str("}\n");
        }
        TypeKind::InputObject => {
            let _ = writeln!(out, "input {} {{", ty.name());
            for field in ty.input_fields() {
                write_description(out, field.description(), "  ");
                let _ = writeln!(out, "  {}", field);
            }
            out.push_str("}\n");
        }
    }
}

impl SchemaRegistry {
    /// Render the finalized schema as SDL.
    ///
    /// Built-in scalars, built-in directives and introspection types are
    /// implied by every GraphQL schema and left out.
    pub fn to_sdl(&self) -> Result<String> {
        self.ensure_finalized()?;
        let mut blocks: Vec<String> = Vec::new();

        let roots = [
            ("query", self.query_type(), "Query"),
            ("mutation", self.mutation_type(), "Mutation"),
            ("subscription", self.subscription_type(), "Subscription"),
        ];
        // Without a schema block, readers take any object named after an
        // operation as its root.
        let implied = |default: &str| {
            self.type_definition(default)
                .filter(|ty| ty.kind() == TypeKind::Object)
                .map(|ty| ty.name())
        };
        let implicit = roots
            .iter()
            .all(|(_, name, default)| *name == implied(default));
        let any_root = roots.iter().any(|(_, name, _)| name.is_some());
        if any_root && !implicit {
            let mut block = String::from("schema {\n");
            for (operation, name, _) in roots {
                if let Some(name) = name {
                    let _ = writeln!(block, "  {}: {}", operation, name);
                }
            }
            block.push_str("}\n");
            blocks.push(block);
        }

        for directive in self.directives() {
            if is_builtin_directive(directive.name()) {
                continue;
            }
            let mut block = String::new();
            render_directive(&mut block, directive);
            blocks.push(block);
        }

        for ty in self.types() {
            if is_introspection_name(ty.name())
                || (ty.kind() == TypeKind::Scalar && is_builtin_scalar(ty.name()))
            {
                continue;
            }
            let mut block = String::new();
            render_type(&mut block, ty);
            blocks.push(block);
        }

        Ok(blocks.join("\n"))
    }
}
