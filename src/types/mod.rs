//! Schema entities: the leaves and members of the schema graph.
//!
//! Each entity validates its own name on construction. Everything else
//! (uniqueness, references between types) is checked by the registry.

pub mod directive;
pub mod enum_value;
pub mod field;
pub mod input_value;
pub mod location;
pub mod name;
pub mod type_def;
pub mod type_ref;

pub use directive::Directive;
pub use enum_value::EnumValue;
pub use field::{Deprecation, FieldDefinition};
pub use input_value::InputValue;
pub use location::DirectiveLocation;
pub use name::{validate_enum_value_name, validate_name};
pub use type_def::{TypeDefinition, TypeKind};
pub use type_ref::TypeRef;
