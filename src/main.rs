use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use pomowatch::cli::args::{Cli, Commands};
use pomowatch::cli::commands::{self, Context};
use pomowatch::config::ColorSetting;
use pomowatch::tui::{self, App};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context::from_cli(&cli).context("Failed to load settings")?;
    match ctx.config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }
    log::debug!("durations {:?}, mode {:?}", ctx.durations, ctx.mode);

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            tui::run(App::new(ctx.durations.clone(), ctx.mode))?;
            String::new()
        }
        Commands::Run(args) => commands::run(&ctx, &args)?,
        Commands::Simulate(args) => commands::simulate(&ctx, &args)?,
        Commands::Status { phase } => commands::status(&ctx, phase)?,
        Commands::Config => commands::config(&ctx)?,
        Commands::Phases => commands::phases(&ctx)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Initialize logging (reads `RUST_LOG`; `-v` flags raise the default level).
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
