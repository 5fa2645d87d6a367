//! stubdeps - install the OS packages required by stub metadata
//!
//! Usage:
//!   stubdeps apt-get              # Install apt packages needed by all stubs
//!   stubdeps --sudo apt-get       # Same, prefixed with sudo
//!   stubdeps brew --dry-run       # Print the brew command without running it

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stubdeps_core::config::ConfigStore;
use stubdeps_core::error::InstallError;
use stubdeps_core::installer::{DependencyInstaller, InstallOptions, InstallPlan};
use stubdeps_core::package_manager::PackageManager;

#[derive(Parser)]
#[command(name = "stubdeps", version)]
#[command(about = "Install OS packages required by stub metadata", long_about = None)]
struct Cli {
    /// Package manager used to install the packages
    #[arg(value_name = "PACKAGE_MANAGER", value_parser = ["apt-get", "brew", "choco"])]
    package_manager: String,

    /// Run the install command through the elevation command (sudo by default)
    #[arg(long)]
    sudo: bool,

    /// Config file (defaults to ./stubdeps.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stubs directory, overriding `stubs_dir` from the config
    #[arg(long, value_name = "PATH")]
    stubs_dir: Option<PathBuf>,

    /// Print the install command without running it
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// The command line, as it would be typed
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    package_manager: &'static str,
    packages: Vec<&'a str>,
    command: Option<Vec<String>>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the command or JSON plan
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stubdeps_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let manager: PackageManager = cli.package_manager.parse()?;

    let store = match cli.config {
        Some(path) => ConfigStore::from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            ConfigStore::from_project_root(&cwd)
        }
    };
    let mut config = store.load()?;
    if let Some(stubs_dir) = cli.stubs_dir {
        config.stubs_dir = stubs_dir;
    }

    let installer = DependencyInstaller::system(config);
    let options = InstallOptions::new(manager).with_elevation(cli.sudo);
    let plan = installer.plan(&options)?;

    print_plan(&plan, cli.format)?;

    if cli.dry_run {
        tracing::debug!("Dry run, not executing");
        return Ok(());
    }

    installer.execute(&plan)?;
    Ok(())
}

fn print_plan(plan: &InstallPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(command) = &plan.command {
                println!("{command}");
            }
        }
        OutputFormat::Json => {
            let output = PlanOutput {
                package_manager: plan.package_manager.program(),
                packages: plan.packages.iter().map(String::as_str).collect(),
                command: plan.command.as_ref().map(|c| c.argv()),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Forward the package manager's exit status; everything else exits with 1.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<InstallError>()
        .and_then(InstallError::exit_code)
        .map(|code| (code & 0xff) as u8)
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
