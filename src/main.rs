mod cli;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use inkpress::app::{AppState, GatePolicy};
use inkpress::common::config::AppConfig;
use inkpress::common::logging::{LogConfig, LogFormat, init_logging};
use inkpress::harness::{self, parse_script};
use inkpress::models::PageId;
use inkpress::services::editor::{slugify, word_count};
use inkpress::types::PageInfo;

use crate::cli::{
    Cli, Command, GatePolicyArg, LogFormatArg, OutputArgs, OutputFormatArg, ReplayArgs,
};

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Pages(args) => run_pages(args),
        Command::Replay(args) => run_replay(&cli, args),
        Command::Slug { title } => {
            println!("{}", slugify(&title.join(" ")));
            Ok(())
        }
        Command::Words { text } => {
            println!("{}", word_count(&text.join(" ")));
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: io::stderr().is_terminal(),
        ..LogConfig::default()
    }
}

fn run_pages(args: &OutputArgs) -> anyhow::Result<()> {
    let pages: Vec<PageInfo> = PageId::ALL.into_iter().map(PageInfo::from).collect();

    match args.output {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&pages)?),
        OutputFormatArg::Text => {
            for page in pages {
                let marker = if page.protected { "sign-in required" } else { "public" };
                println!("{:<10} {:<10} {}", page.id, page.label, marker);
            }
        }
    }
    Ok(())
}

fn run_replay(cli: &Cli, args: &ReplayArgs) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env().context("invalid environment configuration")?;
    if let Some(policy) = cli.gate_policy {
        config.gate_policy = match policy {
            GatePolicyArg::Continuous => GatePolicy::Continuous,
            GatePolicyArg::OnTransition => GatePolicy::OnTransition,
        };
    }
    if let Some(start) = &args.start {
        config.start_page = PageId::parse_lossy(start);
    }

    let text = read_script(&args.script)?;
    let script = parse_script(&text)?;

    let mut state = AppState::from_config(&config);
    tracing::info!(
        policy = %config.gate_policy,
        start = %config.start_page,
        steps = script.len(),
        "replaying script"
    );
    let outcomes = harness::run_script(&mut state, &script);

    match args.output.output {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormatArg::Text => {
            for outcome in &outcomes {
                println!("{}", harness::describe(outcome));
            }
        }
    }
    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("failed to read script from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read script {}", path.display()))
}
