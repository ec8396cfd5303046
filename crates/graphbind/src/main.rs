//! graphbind - Entry Point
//!
//! Loads configuration, binds the application entity and prints what was
//! bound. `--list` shows the registered implementations and binders
//! instead.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use graphbind_application::{RegistryActivator, list_binders, list_implementations};
use graphbind_domain::{Binder, Component};
use graphbind_infrastructure::config::{ConfigLoader, set_active_config};
use graphbind_infrastructure::{builtin_binder, for_application, init_logging};

/// Command line interface for graphbind
#[derive(Parser, Debug)]
#[command(name = "graphbind")]
#[command(about = "graphbind - Bind a configuration graph to instances")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// `rdf:type` IRI of the application entity
    #[arg(short, long)]
    pub application_type: Option<String>,

    /// Binder implementation, overriding configuration
    #[arg(short, long)]
    pub binder: Option<String>,

    /// List registered implementations and binders, then exit
    #[arg(long)]
    pub list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    if cli.list {
        print_registry();
        return Ok(());
    }

    let application_type = cli
        .application_type
        .clone()
        .unwrap_or_else(|| config.binder.application_type.clone());
    set_active_config(config.clone());

    let binder = for_application(
        &config,
        &application_type,
        Some(builtin_binder()),
        Arc::new(RegistryActivator::new()),
        cli.binder.as_deref(),
    )
    .with_context(|| format!("Failed to bind application {application_type}"))?;

    let application = binder.application()?;
    print_instance(binder.as_ref(), application.as_ref())
}

fn print_registry() {
    println!("Implementations:");
    for (name, description) in list_implementations() {
        println!("  {name}: {description}");
    }
    println!("Binders:");
    for (name, description) in list_binders() {
        println!("  {name}: {description}");
    }
}

fn print_instance(binder: &dyn Binder, instance: &dyn Component) -> anyhow::Result<()> {
    let entity = binder.entity_of(instance)?;
    println!("{entity} ({})", instance.type_name());
    for property in binder.properties(instance)? {
        for value in binder.values(instance, &property)? {
            println!("  {property} = {value}");
        }
    }
    Ok(())
}
