//! SchemaModel CLI - inspect and convert introspection results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schema_model::config::CONFIG_FILE;
use schema_model::{
    load_snapshot, parse_introspection, save_snapshot, to_json, ModelConfig, SchemaRegistry,
    TypeKind,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-model")]
#[command(about = "SchemaModel - GraphQL schema registry tools", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an introspection result and run finalize checks
    Validate {
        /// Introspection JSON file
        file: PathBuf,
    },

    /// Print the schema as SDL
    Sdl {
        /// Introspection JSON file
        file: PathBuf,
    },

    /// Re-export a validated introspection result
    Introspect {
        /// Introspection JSON file
        file: PathBuf,
    },

    /// Write a binary snapshot of the finalized schema
    Snapshot {
        /// Introspection JSON file
        file: PathBuf,

        /// Output path (default: [output].snapshot_path from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show type and directive counts
    Info {
        /// Introspection JSON file, or a snapshot with --snapshot
        file: PathBuf,

        /// Read a binary snapshot instead of JSON
        #[arg(long)]
        snapshot: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ModelConfig::load(&cli.config);

    match cli.command {
        Commands::Validate { file } => {
            let registry = load_finalized(&file, &config)?;
            println!(
                "✓ {} is valid: {} types, {} directives",
                file.display(),
                registry.types().len(),
                registry.directives().len()
            );
        }

        Commands::Sdl { file } => {
            let registry = load_finalized(&file, &config)?;
            print!("{}", registry.to_sdl()?);
        }

        Commands::Introspect { file } => {
            let registry = load_finalized(&file, &config)?;
            println!("{}", to_json(&registry.to_introspection()?)?);
        }

        Commands::Snapshot { file, output } => {
            let registry = load_finalized(&file, &config)?;
            let path = output.unwrap_or_else(|| config.resolve_snapshot_path(&cli.config));
            save_snapshot(&registry, &path)?;
            println!("✓ Wrote snapshot: {}", path.display());
        }

        Commands::Info { file, snapshot } => {
            let registry = if snapshot {
                load_snapshot(&file)
                    .with_context(|| format!("failed to load snapshot {}", file.display()))?
            } else {
                load_finalized(&file, &config)?
            };
            print_info(&registry);
        }
    }

    Ok(())
}

/// Read an introspection file into a finalized registry.
fn load_finalized(file: &Path, config: &ModelConfig) -> Result<SchemaRegistry> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let schema = parse_introspection(&json)
        .with_context(|| format!("{} is not an introspection result", file.display()))?;

    let mut registry = SchemaRegistry::from_introspection(&schema, config.registry.clone())?;
    registry.finalize()?;
    Ok(registry)
}

fn print_info(registry: &SchemaRegistry) {
    let kinds = [
        TypeKind::Scalar,
        TypeKind::Object,
        TypeKind::Interface,
        TypeKind::Union,
        TypeKind::Enum,
        TypeKind::InputObject,
    ];

    println!("Schema Info:");
    for (label, root) in [
        ("query", registry.query_type()),
        ("mutation", registry.mutation_type()),
        ("subscription", registry.subscription_type()),
    ] {
        if let Some(name) = root {
            println!("  {:<14} {}", label, name);
        }
    }
    for kind in kinds {
        let count = registry.types().iter().filter(|t| t.kind() == kind).count();
        println!("  {:<14} {}", kind.label(), count);
    }
    println!("  {:<14} {}", "Directives", registry.directives().len());
}
