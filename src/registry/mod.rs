//
//  mod.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

pub mod builtins;
mod cycles;
pub mod literal;
mod validate;

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::types::{Directive, DirectiveLocation, InputValue, TypeDefinition};

/// Lifecycle of a registry: accumulating facts, or frozen for readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Open,
    Closed,
}

/// Owner of every type and directive discovered for one analyzed service.
///
/// While `Open`, the analysis front-end registers definitions and appends to
/// them through [`SchemaRegistry::directive_mut`] and
/// [`SchemaRegistry::type_mut`]. [`SchemaRegistry::finalize`] validates the
/// whole graph and moves it to `Closed`, after which no mutable access is
/// handed out and the registry can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    pub(crate) config: RegistryConfig,
    pub(crate) state: RegistryState,
    /// Types in registration order.
    pub(crate) types: Vec<TypeDefinition>,
    /// Index: type name -> position in `types`.
    pub(crate) type_index: HashMap<String, usize>,
    /// Directives in registration order.
    pub(crate) directives: Vec<Directive>,
    /// Index: directive name -> position in `directives`.
    pub(crate) directive_index: HashMap<String, usize>,
    pub(crate) query_type: Option<String>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
}

impl SchemaRegistry {
    /// Create an empty open registry with default settings.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an open registry, seeding built-ins when the config asks for them.
    pub fn with_config(config: RegistryConfig) -> Self {
        let include_builtins = config.include_builtins;
        let mut registry = Self {
            config,
            state: RegistryState::Open,
            types: Vec::new(),
            type_index: HashMap::new(),
            directives: Vec::new(),
            directive_index: HashMap::new(),
            query_type: None,
            mutation_type: None,
            subscription_type: None,
        };
        if include_builtins {
            if let Err(e) = builtins::seed(&mut registry) {
                warn!("failed to seed built-in definitions: {e}");
            }
        }
        registry
    }

    /// Create an open registry seeded with the built-in scalars and directives.
    pub fn with_builtins() -> Self {
        Self::with_config(RegistryConfig {
            include_builtins: true,
            ..RegistryConfig::default()
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == RegistryState::Closed
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        match self.state {
            RegistryState::Open => Ok(()),
            RegistryState::Closed => Err(SchemaError::IllegalMutation(operation.to_string())),
        }
    }

    // ─── Registration ───────────────────────────────────────────

    /// Register a directive. Fails if one with the same name exists.
    pub fn register_directive(&mut self, directive: Directive) -> Result<()> {
        self.ensure_open(&format!("register directive '@{}'", directive.name()))?;
        if self.directive_index.contains_key(directive.name()) {
            return Err(SchemaError::DuplicateDirective(directive.name().to_string()));
        }
        debug!(directive = directive.name(), "registering directive");
        self.directive_index
            .insert(directive.name().to_string(), self.directives.len());
        self.directives.push(directive);
        Ok(())
    }

    /// Register a named type. Fails if one with the same name exists.
    pub fn register_type(&mut self, ty: TypeDefinition) -> Result<()> {
        self.ensure_open(&format!("register type '{}'", ty.name()))?;
        if self.type_index.contains_key(ty.name()) {
            return Err(SchemaError::DuplicateType(ty.name().to_string()));
        }
        debug!(ty = ty.name(), kind = %ty.kind(), "registering type");
        self.type_index.insert(ty.name().to_string(), self.types.len());
        self.types.push(ty);
        Ok(())
    }

    pub fn set_query_type(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_open("set query type")?;
        self.query_type = Some(name.into());
        Ok(())
    }

    pub fn set_mutation_type(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_open("set mutation type")?;
        self.mutation_type = Some(name.into());
        Ok(())
    }

    pub fn set_subscription_type(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_open("set subscription type")?;
        self.subscription_type = Some(name.into());
        Ok(())
    }

    // ─── Incremental mutation ───────────────────────────────────

    /// Mutable access to a registered directive, only while open.
    pub fn directive_mut(&mut self, name: &str) -> Result<&mut Directive> {
        self.ensure_open(&format!("modify directive '@{}'", name))?;
        let idx = *self
            .directive_index
            .get(name)
            .ok_or_else(|| SchemaError::UnknownDirective(name.to_string()))?;
        Ok(&mut self.directives[idx])
    }

    /// Mutable access to a registered type, only while open.
    pub fn type_mut(&mut self, name: &str) -> Result<&mut TypeDefinition> {
        self.ensure_open(&format!("modify type '{}'", name))?;
        let idx = *self.type_index.get(name).ok_or_else(|| SchemaError::UnknownType {
            owner: "schema".to_string(),
            name: name.to_string(),
        })?;
        Ok(&mut self.types[idx])
    }

    pub fn add_directive_location(&mut self, directive: &str, location: DirectiveLocation) -> Result<()> {
        self.directive_mut(directive)?.add_location(location);
        Ok(())
    }

    pub fn add_directive_arg(&mut self, directive: &str, arg: InputValue) -> Result<()> {
        self.directive_mut(directive)?.add_arg(arg);
        Ok(())
    }

    // ─── Queries ────────────────────────────────────────────────

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_index.get(name).map(|&idx| &self.directives[idx])
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_index.get(name).map(|&idx| &self.types[idx])
    }

    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    pub fn query_type(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    // ─── Lifecycle ──────────────────────────────────────────────

    /// Validate the accumulated graph and close the registry.
    ///
    /// All problems are collected into one [`SchemaError::Validation`]. A
    /// registry that fails validation stays open so the caller can complete
    /// it and try again. Finalizing a closed registry is an illegal mutation.
    pub fn finalize(&mut self) -> Result<()> {
        self.ensure_open("finalize")?;

        let errors = self.validate();
        if !errors.is_empty() {
            warn!(errors = errors.len(), "schema validation failed");
            return Err(SchemaError::Validation(errors));
        }

        // Collapsed only once validation passed; a failed finalize changes nothing.
        if self.config.dedup_directive_locations {
            for directive in &mut self.directives {
                directive.dedup_locations();
            }
        }

        self.state = RegistryState::Closed;
        info!(
            types = self.types.len(),
            directives = self.directives.len(),
            "schema finalized"
        );
        Ok(())
    }

    pub(crate) fn ensure_finalized(&self) -> Result<()> {
        if self.is_finalized() {
            Ok(())
        } else {
            Err(SchemaError::NotFinalized)
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
