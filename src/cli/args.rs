//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Compile translation files and write the generated sources
//! - `check`: Compile without writing and report diagnostics
//! - `init`: Initialize textloc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project directory; the config file is searched from here upwards
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Translations directory (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Output directory for generated sources (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only verify that the generated sources are up to date (write nothing)
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile translation files into Rust sources
    Generate(GenerateCommand),
    /// Report missing, extra and untranslatable keys without writing anything
    Check(CheckCommand),
    /// Initialize a new .textlocrc.json configuration file
    Init,
}
