//! CLI entry point for input-hook-manager
//!
//! Provides a command-line interface for checking a bindings listing for
//! conflicts before shipping it, and for inspecting how a descriptor is
//! parsed.

use clap::{Parser, Subcommand};
use colored::*;
use input_hook_manager::core::parser::{load_bindings_file, parse_combo};
use input_hook_manager::{HotKeyOptions, NullHookSource, NullKeyProbe, Registry, RegistryError};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "input-hook-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a bindings file for hotkey conflicts
    Check {
        /// Path to a bindings file, one descriptor per line
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Parse a single descriptor and print its normalized form
    Parse {
        /// Binding descriptor, e.g. "Ctrl+Shift+K"
        descriptor: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check_bindings(&file)?,
        Commands::Parse { descriptor } => parse_descriptor(&descriptor)?,
    }

    Ok(())
}

/// Check a bindings listing for conflicts
///
/// Registers every descriptor into a dry-run registry (no hooks are
/// installed) so the exact registration-time conflict rules apply.
fn check_bindings(path: &PathBuf) -> anyhow::Result<()> {
    println!("{} Parsing bindings: {}", "→".cyan(), path.display());

    let combos = load_bindings_file(path)?;

    println!("{} Found {} bindings\n", "✓".green(), combos.len());

    let registry = Registry::new(Arc::new(NullHookSource), Arc::new(NullKeyProbe));
    let mut conflicts = Vec::new();

    for combo in &combos {
        match registry.register_hotkey(combo.modifiers, &combo.keys, || {}, HotKeyOptions::default())
        {
            Ok(()) => println!("  {} {}", "✓".green(), format!("{}", combo).cyan()),
            Err(RegistryError::Conflict(conflict)) => {
                println!("  {} {}", "✗".red().bold(), conflict);
                conflicts.push(conflict);
            }
            Err(other) => return Err(other.into()),
        }
    }

    if conflicts.is_empty() {
        println!("\n{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "\n{} Found {} conflict{}",
            "✗".red().bold(),
            conflicts.len(),
            if conflicts.len() == 1 { "" } else { "s" }
        );
        println!("{}", "⚠ These bindings would shadow each other at runtime!".yellow());
        std::process::exit(1);
    }

    Ok(())
}

/// Parse one descriptor and show its normalized combination
fn parse_descriptor(descriptor: &str) -> anyhow::Result<()> {
    let combo = parse_combo(descriptor)?;

    println!("{} → {}", descriptor, format!("{}", combo).cyan().bold());

    Ok(())
}
