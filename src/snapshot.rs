//
//  snapshot.rs
//  SchemaModel
//
//  Created by hak (tharun)
//

//! Binary snapshots of finalized registries.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::SchemaError;
use crate::registry::SchemaRegistry;
use crate::types::{Directive, TypeDefinition};

/// Snapshot read/write errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to encode or decode snapshot: {0}")]
    Encode(#[from] bincode::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// On-disk form of a registry. Name indexes and the lifecycle state are
/// rebuilt on load, never read back.
#[derive(Debug, Serialize, Deserialize)]
struct RegistrySnapshot {
    config: RegistryConfig,
    types: Vec<TypeDefinition>,
    directives: Vec<Directive>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

impl RegistrySnapshot {
    fn of(registry: &SchemaRegistry) -> Self {
        Self {
            config: registry.config().clone(),
            types: registry.types().to_vec(),
            directives: registry.directives().to_vec(),
            query_type: registry.query_type().map(str::to_string),
            mutation_type: registry.mutation_type().map(str::to_string),
            subscription_type: registry.subscription_type().map(str::to_string),
        }
    }

    /// Re-register every definition and finalize, so a loaded registry has
    /// passed the same checks as a freshly built one.
    fn into_registry(self) -> Result<SchemaRegistry, SchemaError> {
        // Built-ins were stored with the other definitions.
        let mut registry = SchemaRegistry::with_config(RegistryConfig {
            include_builtins: false,
            ..self.config.clone()
        });
        registry.config = self.config;

        for ty in self.types {
            registry.register_type(ty)?;
        }
        for directive in self.directives {
            registry.register_directive(directive)?;
        }
        if let Some(name) = self.query_type {
            registry.set_query_type(name)?;
        }
        if let Some(name) = self.mutation_type {
            registry.set_mutation_type(name)?;
        }
        if let Some(name) = self.subscription_type {
            registry.set_subscription_type(name)?;
        }

        registry.finalize()?;
        Ok(registry)
    }
}

/// Write a finalized registry to `path`, creating parent directories.
pub fn save_snapshot(registry: &SchemaRegistry, path: &Path) -> Result<(), SnapshotError> {
    registry.ensure_finalized()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, &RegistrySnapshot::of(registry))?;
    writer.flush()?;

    info!(
        types = registry.types().len(),
        directives = registry.directives().len(),
        path = %path.display(),
        "saved snapshot"
    );
    Ok(())
}

/// Read a registry written by [`save_snapshot`].
///
/// The definitions are registered again and finalized. A snapshot with
/// duplicate names fails with the registration error and one that does not
/// validate fails with [`SchemaError::Validation`].
pub fn load_snapshot(path: &Path) -> Result<SchemaRegistry, SnapshotError> {
    let reader = BufReader::new(File::open(path)?);
    let snapshot: RegistrySnapshot = bincode::deserialize_from(reader)?;
    debug!(
        types = snapshot.types.len(),
        directives = snapshot.directives.len(),
        path = %path.display(),
        "rebuilding registry from snapshot"
    );
    Ok(snapshot.into_registry()?)
}
