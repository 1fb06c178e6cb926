//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{self, ChainConfig, DEFAULT_SPEC_PATH, DEFAULT_TASKS_PATH};

/// Top-level CLI parser for `specflow`.
#[derive(Debug, Parser)]
#[command(name = "specflow", version, about = "Audit use case to task traceability")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the use case, acceptance criterion, test, and task chain.
    Check(CheckArgs),
    /// Print each acceptance criterion with its tests.
    TestsMap(DocumentArgs),
}

/// Where the documents live.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Repository root (defaults to $SPECFLOW_ROOT, then the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Specification document, relative to the root.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SPEC_PATH)]
    pub spec: PathBuf,

    /// Task list document, relative to the root.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TASKS_PATH)]
    pub tasks: PathBuf,
}

impl DocumentArgs {
    /// Builds the run configuration, resolving the root once.
    #[must_use]
    pub fn to_config(&self) -> ChainConfig {
        ChainConfig::new(config::root_from(self.root.as_deref()))
            .with_spec_path(&self.spec)
            .with_tasks_path(&self.tasks)
    }
}

/// Arguments for `specflow check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document locations.
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Also require ids to match UC-NN, AC-NN, and T-NN.
    #[arg(long)]
    pub strict_ids: bool,
}

impl CheckArgs {
    /// Builds the run configuration.
    #[must_use]
    pub fn to_config(&self) -> ChainConfig {
        self.documents.to_config().with_strict_ids(self.strict_ids)
    }
}
