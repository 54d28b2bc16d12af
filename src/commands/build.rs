use clap::Args;
use serde::Serialize;

use hyperv_shell::defaults;
use hyperv_shell::{CommandLine, Error, Mapping, Value};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct BuildArgs {
    /// Cmdlet to invoke (e.g., Get-VM)
    pub cmdlet: String,

    /// snake_case arguments as a JSON object (inline, @file, or - for stdin)
    pub spec: Option<String>,

    /// Output property to keep (repeatable, snake_case)
    #[arg(long = "select", value_name = "FIELD")]
    pub select: Vec<String>,

    /// ConvertTo-Json depth (overrides config)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Do not pipe output through ConvertTo-Json
    #[arg(long)]
    pub no_json: bool,
}

#[derive(Debug, Serialize)]
pub struct BuildOutput {
    pub cmdlet: String,
    pub command: String,
    pub failure_context: String,
}

pub fn run(args: BuildArgs, _global: &GlobalArgs) -> CmdResult<BuildOutput> {
    if args.cmdlet.trim().is_empty() {
        return Err(Error::validation_invalid_argument(
            "cmdlet",
            "Cmdlet name cannot be empty",
            None,
            None,
        ));
    }

    let arguments = match args.spec.as_deref() {
        Some(spec) => match super::read_value_spec(spec)? {
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(Error::validation_invalid_argument(
                    "spec",
                    "Arguments must be a JSON object",
                    Some(spec.to_string()),
                    None,
                ))
            }
        },
        None => Mapping::new(),
    };

    let defaults = defaults::load_defaults();
    let mut line = CommandLine::from_defaults(args.cmdlet.trim(), &defaults)
        .args(&arguments)
        .select(&args.select);

    if args.depth.is_some() {
        line = line.json_depth(args.depth);
    }
    if args.no_json {
        line = line.no_json();
    }

    hyperv_shell::log_status!(
        "build",
        "{} with {} argument(s)",
        line.cmdlet(),
        arguments.len()
    );

    Ok((
        BuildOutput {
            cmdlet: line.cmdlet().to_string(),
            command: line.render(),
            failure_context: line.failure_context(),
        },
        0,
    ))
}
