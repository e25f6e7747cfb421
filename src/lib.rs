//! # SchemaModel
//!
//! In-memory model of a GraphQL schema, built incrementally by a static
//! analysis front-end and frozen into a read-only view for introspection.
//!
//! ## Key Features
//!
//! - **Incremental**: directives and types grow one location, argument or field at a time
//! - **Validated**: `finalize` checks the whole type graph before freezing it
//! - **Introspectable**: export to and import from standard introspection JSON
//! - **Printable**: render the finalized schema as SDL
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schema_model::{
//!     Directive, DirectiveLocation, FieldDefinition, SchemaRegistry, TypeDefinition, TypeRef,
//! };
//!
//! let mut registry = SchemaRegistry::with_builtins();
//!
//! let mut auth = Directive::new("auth", Some("Requires a signed-in user")).unwrap();
//! auth.add_location(DirectiveLocation::FieldDefinition);
//! registry.register_directive(auth).unwrap();
//!
//! let query = TypeDefinition::object("Query")
//!     .unwrap()
//!     .with_field(FieldDefinition::new("me", None, TypeRef::parse("String!").unwrap()).unwrap());
//! registry.register_type(query).unwrap();
//! registry.set_query_type("Query").unwrap();
//!
//! registry.finalize().unwrap();
//! println!("{}", registry.to_sdl().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod introspection;
pub mod registry;
pub mod sdl;
pub mod snapshot;
pub mod types;

// Re-exports for convenience
pub use config::{ModelConfig, OutputConfig, RegistryConfig};
pub use error::{Result, SchemaError};
pub use introspection::{parse_introspection, to_json, IntrospectionSchema};
pub use registry::{RegistryState, SchemaRegistry};
pub use snapshot::{load_snapshot, save_snapshot, SnapshotError};
pub use types::{
    validate_enum_value_name, validate_name, Deprecation, Directive, DirectiveLocation, EnumValue,
    FieldDefinition, InputValue, TypeDefinition, TypeKind, TypeRef,
};
