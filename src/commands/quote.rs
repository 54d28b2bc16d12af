use clap::Args;
use serde::Serialize;

use hyperv_shell::shell;
use hyperv_shell::Value;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct QuoteArgs {
    /// Value to quote (JSON literal, true/false, number, or plain string)
    pub value: String,

    /// Quote even when the value has no whitespace
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteOutput {
    pub input: Value,
    pub quoted: String,
}

pub fn run(args: QuoteArgs, _global: &GlobalArgs) -> CmdResult<QuoteOutput> {
    let input = Value::from(super::parse_value(&args.value));
    let quoted = shell::quote(&input, args.force);

    Ok((QuoteOutput { input, quoted }, 0))
}
