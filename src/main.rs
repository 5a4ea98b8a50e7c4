//! deployinfo CLI - resolve a build target's deploy info
//!
//! Usage: deployinfo <COMMAND>
//!
//! Commands:
//!   plan    Resolve manifests and packages for a target
//!   locate  Print the deploy info file of a target
//!   dump    Decode a deploy info file

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deployinfo::application::{describe, DefaultExtractUseCase, ExtractOptions};
use deployinfo::config::{self, Config, ConfigWarning};
use deployinfo::presentation::{render_descriptor, render_located, render_plan};
use deployinfo::TargetLabel;

mod cli;

use cli::{Cli, Commands, LookupArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format_override = cli.format_override();
    let config = load_config(cli.config.as_deref())?;
    let format = format_override.unwrap_or(config.output.format);

    match cli.command {
        Commands::Plan { target, lookup } => {
            let target = TargetLabel::parse(&target)?;
            let config = apply_lookup_args(config, lookup)?;
            let use_case = DefaultExtractUseCase::from_config(&config);
            let plan = use_case.execute(&ExtractOptions::from_config(target.clone(), &config))?;
            print!("{}", render_plan(&target, &plan, format));
        }
        Commands::Locate { target, lookup } => {
            let target = TargetLabel::parse(&target)?;
            let config = apply_lookup_args(config, lookup)?;
            let use_case = DefaultExtractUseCase::from_config(&config);
            let path = use_case.locate(&ExtractOptions::from_config(target.clone(), &config))?;
            print!("{}", render_located(&target, &path, format));
        }
        Commands::Dump { file } => {
            let descriptor = describe(&file)?;
            print!("{}", render_descriptor(&descriptor, format));
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let (config, warnings) = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config::with_env_overrides(config), warnings)
        }
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            config::load_or_default(Some(&cwd))?
        }
    };
    print_warnings(&warnings);
    Ok(config)
}

fn print_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn apply_lookup_args(mut config: Config, lookup: LookupArgs) -> Result<Config> {
    if let Some(root) = lookup.execution_root {
        config.execution_root = root;
    }
    if let Some(root) = lookup.output_root {
        config.output_root = root;
    }
    if let Some(suffix) = lookup.suffix {
        config.descriptor.suffix = suffix;
    }
    // Plans hand out absolute package paths.
    let execution_root = std::path::absolute(&config.execution_root).with_context(|| {
        format!(
            "failed to resolve execution root {}",
            config.execution_root.display()
        )
    })?;
    config.execution_root = execution_root;
    Ok(config)
}
