//! ghcards - GitHub profile cards
//!
//! Main entry point for the ghcards CLI.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ghcards::cards::{self, SkillEntry};
use ghcards::config::{validate_config, CardsConfig};
use ghcards::{CardsServer, ProfileService};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

/// ghcards - GitHub language, stats and skills cards as SVG
#[derive(Parser, Debug)]
#[command(name = "ghcards")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: ~/.config/ghcards/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP card server
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,
    },

    /// Render a single card and exit
    Render {
        /// Card to render
        #[arg(value_enum)]
        card: CardKind,

        /// GitHub login (defaults to the configured username)
        #[arg(short, long)]
        username: Option<String>,

        /// Comma-separated skills for the skills card
        #[arg(short, long)]
        skills: Option<String>,

        /// Write the SVG here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CardKind {
    Languages,
    Stats,
    Skills,
}

#[tokio::main]
async fn main() {
    if let Err(e) = ghcards::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        CardsConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            if let Err(errors) = validate_config(&config) {
                for error in &errors {
                    tracing::warn!(field = %error.field, "{}", error.message);
                }
            }

            let service = ProfileService::from_config(&config)?;
            let addr = config.listen_addr();
            CardsServer::new(Arc::new(service)).run(&addr).await?;
        }
        Commands::Render {
            card,
            username,
            skills,
            output,
        } => {
            let svg = render(&config, card, username.as_deref(), skills.as_deref()).await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {:?} card to {}", card, path.display());
                }
                None => print!("{}", svg),
            }
        }
    }

    Ok(())
}

async fn render(
    config: &CardsConfig,
    card: CardKind,
    username: Option<&str>,
    skills: Option<&str>,
) -> anyhow::Result<String> {
    let svg = match card {
        CardKind::Skills => {
            let skills = SkillEntry::parse_list(skills.unwrap_or_default());
            cards::render_skills_card(&skills)
        }
        CardKind::Languages => {
            let (service, username) = user_service(config, username)?;
            let languages = service.fetch_aggregated_languages(&username).await?;
            cards::render_languages_card(&languages)
        }
        CardKind::Stats => {
            let (service, username) = user_service(config, username)?;
            let stats = service.fetch_aggregated_stats(&username).await?;
            cards::render_stats_card(&stats)
        }
    };
    Ok(svg)
}

fn user_service(
    config: &CardsConfig,
    username: Option<&str>,
) -> anyhow::Result<(ProfileService, String)> {
    let service = ProfileService::from_config(config)?;
    let username = service.resolve_username(username)?;
    Ok((service, username))
}
