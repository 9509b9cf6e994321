//! CLI argument definitions for the inkpress harness.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "inkpress",
    version,
    about = "Headless driver for the blog front-end navigation core",
    long_about = "Replay page navigation and session actions against the guarded router\n\
                  and inspect the page each action resolves to."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,

    /// When to re-run the auth gate (overrides INKPRESS_GATE_POLICY).
    #[arg(long = "gate-policy", value_enum, global = true)]
    pub gate_policy: Option<GatePolicyArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every page and whether it requires sign-in.
    Pages(OutputArgs),

    /// Replay an action script and print the view after each action.
    Replay(ReplayArgs),

    /// Print the URL slug the editor derives from a title.
    Slug {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Count words the way the editor does.
    Words {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or `-` for stdin.
    #[arg(value_name = "SCRIPT", default_value = "-")]
    pub script: PathBuf,

    /// Page to start on (overrides INKPRESS_START_PAGE).
    #[arg(long = "start")]
    pub start: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GatePolicyArg {
    Continuous,
    OnTransition,
}
