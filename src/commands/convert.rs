use clap::Args;
use serde::Serialize;

use hyperv_shell::naming;
use hyperv_shell::Value;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConvertArgs {
    /// JSON value (inline, @file, or - for stdin)
    pub spec: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub case: &'static str,
    pub value: Value,
}

pub fn run_pascal(args: ConvertArgs, _global: &GlobalArgs) -> CmdResult<ConvertOutput> {
    let input = super::read_value_spec(&args.spec)?;
    Ok((
        ConvertOutput {
            case: "pascal",
            value: naming::to_pascal(&input),
        },
        0,
    ))
}

pub fn run_snake(args: ConvertArgs, _global: &GlobalArgs) -> CmdResult<ConvertOutput> {
    let input = super::read_value_spec(&args.spec)?;
    Ok((
        ConvertOutput {
            case: "snake",
            value: naming::to_snake(&input),
        },
        0,
    ))
}
