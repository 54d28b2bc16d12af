use clap::{Args, Subcommand};
use serde::Serialize;

use hyperv_shell::{require_version, CommandOutput};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CheckArgs {
    #[command(subcommand)]
    command: CheckCommand,
}

#[derive(Subcommand)]
enum CheckCommand {
    /// Classify a captured PowerShell result
    Output {
        #[arg(long, default_value = "")]
        stdout: String,

        #[arg(long, default_value = "")]
        stderr: String,

        #[arg(long, allow_hyphen_values = true)]
        exit_code: i32,

        /// Context appended to the failure message
        #[arg(long)]
        info: Option<String>,
    },
    /// Check that a host version satisfies a minimum
    Version {
        /// Operation that needs the version
        #[arg(long)]
        function: String,

        #[arg(long)]
        required: String,

        #[arg(long)]
        actual: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "action")]
pub enum CheckOutput {
    Output(OutputCheck),
    Version(VersionCheck),
}

#[derive(Debug, Serialize)]
pub struct OutputCheck {
    pub exit_code: i32,
    pub stdout: String,
}

#[derive(Debug, Serialize)]
pub struct VersionCheck {
    pub function: String,
    pub required: String,
    pub actual: String,
}

pub fn run(args: CheckArgs, _global: &GlobalArgs) -> CmdResult<CheckOutput> {
    match args.command {
        CheckCommand::Output {
            stdout,
            stderr,
            exit_code,
            info,
        } => {
            let output = CommandOutput::new(stdout, stderr, exit_code);
            output.check(info)?;
            Ok((
                CheckOutput::Output(OutputCheck {
                    exit_code: output.exit_code,
                    stdout: output.stdout,
                }),
                0,
            ))
        }
        CheckCommand::Version {
            function,
            required,
            actual,
        } => {
            require_version(&function, &required, &actual)?;
            Ok((
                CheckOutput::Version(VersionCheck {
                    function,
                    required,
                    actual,
                }),
                0,
            ))
        }
    }
}
