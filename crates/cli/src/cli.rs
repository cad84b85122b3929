use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hostenv_core::{CommandKind, TargetMode};
use std::path::PathBuf;

use crate::commands::{list_command, plan_command, show_command, targets_command};
use crate::config::{load_catalog, resolve_config_path};

#[derive(Parser, Debug)]
#[command(name = "hostenv")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    HOSTENV_CONFIG    Path to environment documents (default: ./envs)\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Environment document or directory of documents
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available environments
    #[command(visible_alias = "ls")]
    List,
    /// List the targets of an environment
    Targets {
        /// Environment name
        env: String,
    },
    /// Print resolved descriptors
    Show {
        /// Environment name
        env: String,

        /// Comma-separated target names (e.g., api,worker)
        targets: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },
    /// Print the invocations a command label expands to
    Plan {
        /// Environment name
        env: String,

        /// [TARGETS] LABEL - targets are optional and comma-separated
        #[arg(num_args = 1..=2, required = true, value_name = "ARGS")]
        args: Vec<String>,

        /// Plan the local channel instead of the remote hosts
        #[arg(long)]
        local: bool,

        /// Command table to read the label from
        #[arg(short, long, value_enum, default_value_t = TableArg::Cmd)]
        kind: TableArg,

        /// Fail on names that are not declared targets
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    Cmd,
    Log,
    Cat,
}

impl From<TableArg> for CommandKind {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Cmd => CommandKind::Cmd,
            TableArg::Log => CommandKind::Log,
            TableArg::Cat => CommandKind::Cat,
        }
    }
}

pub(crate) fn target_mode(strict: bool) -> TargetMode {
    if strict {
        TargetMode::Strict
    } else {
        TargetMode::BestEffort
    }
}

impl Cli {
    /// Load the catalog once and run the selected command against it
    pub fn execute(self) -> Result<()> {
        let path = resolve_config_path(self.config.as_deref());
        let catalog = load_catalog(&path)?;

        match self.command {
            Commands::List => list_command(&catalog),
            Commands::Targets { env } => targets_command(&catalog, &env),
            Commands::Show {
                env,
                targets,
                format,
            } => show_command(&catalog, &env, targets.as_deref(), format),
            Commands::Plan {
                env,
                args,
                local,
                kind,
                strict,
            } => plan_command(&catalog, &env, &args, local, kind.into(), target_mode(strict)),
        }
    }
}
