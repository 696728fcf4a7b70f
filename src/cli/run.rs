use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, generate::generate, init::init},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with diagnostics and error/warning counts
/// - `Err` if the command fails (e.g., invalid config, missing translations dir)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
