use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::context::BuildContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = BuildContext::new(&cmd.args.common)?;
    Ok(finish(CommandSummary::Check, ctx.diagnostics(), ctx.files.len()))
}
