use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;

use commands::{build, check, config, convert, quote};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "hyperv-shell")]
#[command(version = VERSION)]
#[command(about = "Translate data between Rust-side snake_case and Hyper-V PowerShell command lines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert keys of a JSON value to PascalCase
    Pascal(convert::ConvertArgs),
    /// Convert keys of a JSON value to snake_case
    Snake(convert::ConvertArgs),
    /// Quote a value for a PowerShell command line
    Quote(quote::QuoteArgs),
    /// Build a cmdlet invocation from snake_case arguments
    Build(build::BuildArgs),
    /// Classify command output or check host versions
    Check(check::CheckArgs),
    /// Inspect configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
