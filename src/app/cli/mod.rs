//! CLI adapter.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::AppError;
use crate::{DoctorOptions, ResolveOutcome};

#[derive(Parser)]
#[command(name = "plugver")]
#[command(version)]
#[command(
    about = "Resolve IntelliJ-platform plugin build metadata",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full build-configuration pass
    #[clap(visible_alias = "r")]
    Resolve {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Resolve the plugin release version (pluginVersion / latest tag)
    #[clap(visible_alias = "pv")]
    PluginVersion,
    /// Resolve the IDE build for the configured or given channel
    #[clap(visible_alias = "ib")]
    IdeBuild {
        /// Channel selector or pinned build; defaults to pluginIdeaVersion
        channel: Option<String>,
    },
    /// Look up (or record) the release date of a version
    #[clap(visible_alias = "rd")]
    ReleaseDate {
        /// Version to look up; defaults to the resolved plugin version
        version: Option<String>,
    },
    /// Name the sandboxed-IDE directory for the configured channel
    #[clap(visible_alias = "sd")]
    SandboxDir,
    /// Delete IDE log directories under the sandbox root
    #[clap(visible_alias = "cl")]
    ClearLogs {
        /// Sandbox directory; defaults to the configured sandbox root
        dir: Option<PathBuf>,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Validate the project files and report problems
    Doctor {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Create a starter plugver.toml and release-date store
    #[clap(visible_alias = "i")]
    Init,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Resolve { format } => run_resolve(format),
        Commands::PluginVersion => run_plugin_version(),
        Commands::IdeBuild { channel } => run_ide_build(channel),
        Commands::ReleaseDate { version } => run_release_date(version),
        Commands::SandboxDir => run_sandbox_dir(),
        Commands::ClearLogs { dir, yes } => run_clear_logs(dir, yes),
        Commands::Doctor { strict } => run_doctor(strict),
        Commands::Init => crate::init().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_resolve(format: OutputFormat) -> Result<i32, AppError> {
    let outcome = crate::resolve()?;
    match format {
        OutputFormat::Text => {
            println!("{}", outcome.announcement());
            println!();
            print_report(&outcome);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(0)
}

fn print_report(outcome: &ResolveOutcome) {
    println!("plugin version   {}", outcome.plugin_version);
    println!("compact version  {}", outcome.compact_version);
    println!("stability        {}", if outcome.stable { "stable" } else { "pre-release" });
    println!("ide channel      {}", outcome.ide_channel);
    println!("ide build        {} ({})", outcome.ide_build, outcome.build_source);
    println!("sandbox dir      {}", outcome.sandbox_dir);
    println!("release date     {}", outcome.release_date.as_deref().unwrap_or("-"));
    println!("since build      {}", outcome.since_build);
    println!("until build      {}", outcome.until_build);
}

fn run_plugin_version() -> Result<i32, AppError> {
    println!("{}", crate::plugin_version()?);
    Ok(0)
}

fn run_ide_build(channel: Option<String>) -> Result<i32, AppError> {
    let resolution = crate::ide_build(channel.as_deref())?;
    println!("{}", resolution.build);
    Ok(0)
}

fn run_release_date(version: Option<String>) -> Result<i32, AppError> {
    let outcome = crate::release_date(version.as_deref())?;
    match outcome.date {
        Some(date) => {
            if outcome.recorded {
                eprintln!("Recorded a new release date");
            }
            println!("{}", date);
        }
        None => eprintln!("Dev versions have no release date"),
    }
    Ok(0)
}

fn run_sandbox_dir() -> Result<i32, AppError> {
    println!("{}", crate::sandbox_dir()?);
    Ok(0)
}

fn run_clear_logs(dir: Option<PathBuf>, yes: bool) -> Result<i32, AppError> {
    if !yes {
        let prompt = match &dir {
            Some(path) => format!("Delete IDE log directories under {}?", path.display()),
            None => "Delete IDE log directories under the sandbox root?".to_string(),
        };
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(0);
        }
    }

    let outcome = crate::clear_logs(dir.as_deref())?;
    if outcome.deleted.is_empty() {
        println!("ℹ️ No log directories found");
    }
    Ok(0)
}

fn run_doctor(strict: bool) -> Result<i32, AppError> {
    let outcome = crate::doctor(DoctorOptions { strict })?;
    Ok(outcome.exit_code)
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
    }
}
