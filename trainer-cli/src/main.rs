//! Main entry point for the Interview Trainer CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod store;

use commands::{progress::ProgressCommand, videos::VideosCommand};

/// Interview Trainer CLI
#[derive(Parser, Debug)]
#[command(name = "Interview Trainer CLI")]
#[command(about = "Command-line client for the HI 면접 MASTER training service", long_about = None)]
pub struct Cli {
    /// API base URL, overriding the config file and `TRAINER_API_BASE_URL`
    #[arg(
        long,
        global = true,
        help = "API base URL (e.g., http://localhost:8000/api). Overrides the config file and TRAINER_API_BASE_URL."
    )]
    server: Option<String>,

    /// Path to a configuration file
    #[arg(
        long,
        global = true,
        help = "Path to the configuration file (config.yaml, config.json or config.toml)."
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the Interview Trainer CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and store the session locally
    Login {
        /// Account email; prompted when omitted
        #[arg(long, short, help = "Account email. Prompted when omitted.")]
        email: Option<String>,
    },
    /// Delete the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List video categories
    Categories,
    /// Browse and manage training videos
    #[command(subcommand)]
    Videos(VideosCommand),
    /// Show or record watch progress
    #[command(subcommand)]
    Progress(ProgressCommand),
    /// Print the resolved configuration
    Config {
        /// Output format (yaml, json or toml). Defaults to yaml.
        #[arg(
            long,
            short,
            help = "Output format (yaml, json or toml). Defaults to yaml."
        )]
        format: Option<String>,
    },
    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(
            long,
            short,
            help = "The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)"
        )]
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();
    let cli = Cli::parse();
    let settings = commands::Settings {
        server: cli.server,
        config: cli.config,
    };

    match cli.command {
        Commands::Login { email } => commands::session::login(&settings, email).await?,
        Commands::Logout => commands::session::logout(&settings)?,
        Commands::Whoami => commands::session::whoami(&settings)?,
        Commands::Categories => commands::videos::categories(&settings)?,
        Commands::Videos(command) => commands::videos::run(&settings, command).await?,
        Commands::Progress(command) => commands::progress::run(&settings, command).await?,
        Commands::Config { format } => {
            let format = format.unwrap_or_else(|| "yaml".to_string());
            commands::config::print_config(&settings, &format)?;
        }
        Commands::Completion { shell } => commands::completion::generate_completion(shell),
    }

    Ok(())
}
