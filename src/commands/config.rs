use clap::{Args, Subcommand};
use serde::Serialize;

use hyperv_shell::defaults::{self, Defaults};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show effective defaults (file merged over built-ins)
    Show {
        /// Show built-in defaults only
        #[arg(long)]
        builtin: bool,
    },
    /// Show the config file location
    Path,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum ConfigOutput {
    #[serde(rename = "config.show")]
    Show { source: String, defaults: Defaults },
    #[serde(rename = "config.path")]
    Path { path: String, exists: bool },
}

pub fn run(args: ConfigArgs, _global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => {
            let (source, defaults) = if builtin || !defaults::config_exists() {
                ("builtin", defaults::builtin_defaults())
            } else {
                ("file", defaults::load_defaults())
            };
            Ok((
                ConfigOutput::Show {
                    source: source.to_string(),
                    defaults,
                },
                0,
            ))
        }
        ConfigCommand::Path => Ok((
            ConfigOutput::Path {
                path: defaults::config_path()?,
                exists: defaults::config_exists(),
            },
            0,
        )),
    }
}
