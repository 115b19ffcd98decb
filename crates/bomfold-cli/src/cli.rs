//! CLI argument definitions for bomfold.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bomfold",
    version,
    about = "Validate and resolve build dependency manifests",
    long_about = "bomfold reads a declarative list of build flags, dependencies, platform BOMs \
                  and plugin activations, validates it, and resolves BOM-inherited versions \
                  for a downstream build tool."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of ~/.bomfold/config.toml
    #[arg(long, global = true, env = "BOMFOLD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a manifest
    Check {
        /// Manifest file (defaults to the configured default file)
        path: Option<PathBuf>,
    },

    /// Resolve inherited versions and print the manifest
    Resolve {
        /// Manifest file (defaults to the configured default file)
        path: Option<PathBuf>,
        /// Output format: text, json
        #[arg(short, long)]
        format: Option<String>,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List resolved dependencies and where their versions come from
    Deps {
        /// Manifest file (defaults to the configured default file)
        path: Option<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
