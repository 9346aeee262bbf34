//! game-shelf - Terminal game catalog browser
//!
//! Searches a RAWG-compatible game database and renders a browsable card
//! grid with a per-game detail view. One-shot subcommands cover scripted
//! use; the fullscreen TUI is the default.

mod api;
mod config;
mod games;
mod tui;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::IsTerminal;

use crate::api::{ApiClient, GameDetail, GameSummary};
use crate::config::Config;
use crate::games::{
    clean_requirements, format_rating, platform_icons, release_year, truncate_description,
    MetacriticTier,
};

/// game-shelf - browse a game catalog from your terminal
#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(version)]
#[command(about = "Browse and search a game catalog from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the fullscreen terminal UI (default)
    Tui,

    /// Search the catalog and print one page of matches
    Search {
        /// Search term; omit for the default front-page listing
        query: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show full details for one game by its catalog id
    Show {
        /// Game id as reported by `search`
        id: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the configuration path and effective values
    Config,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("game_shelf=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Tui) | None => {
            if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
                bail!("the terminal UI needs an interactive terminal; try `game-shelf search`");
            }
            let rt = tokio::runtime::Runtime::new()?;
            tui::run_tui(&rt, &config)?;
        }
        Some(Commands::Search { query, format }) => {
            let client = ApiClient::new(&config)?;
            let rt = tokio::runtime::Runtime::new()?;
            let games = rt.block_on(client.list_games(query.as_deref().unwrap_or("")))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&games)?),
                OutputFormat::Text => print_search_results(&games),
            }
        }
        Some(Commands::Show { id, format }) => {
            let client = ApiClient::new(&config)?;
            let rt = tokio::runtime::Runtime::new()?;
            let detail = rt.block_on(client.game_details(id))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
                OutputFormat::Text => print_detail(&detail),
            }
        }
        Some(Commands::Config) => print_config(&config)?,
    }

    Ok(())
}

fn print_search_results(games: &[GameSummary]) {
    if games.is_empty() {
        println!("{}", "No games found.".bright_yellow());
        return;
    }

    for game in games {
        let year = release_year(game.released.as_deref())
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        let icons: String = platform_icons(&game.platforms)
            .into_iter()
            .map(|icon| icon.glyph)
            .collect::<Vec<_>>()
            .join(" ");

        print!(
            "{:>8}  {}  {}  ⭐ {}",
            game.id.to_string().bright_black(),
            game.name.bright_white().bold(),
            year.bright_black(),
            format_rating(game.rating),
        );
        if let Some(score) = game.metacritic {
            print!("  {}", colorize_metacritic(score));
        }
        if !icons.is_empty() {
            print!("  {icons}");
        }
        println!();
    }
}

fn print_detail(detail: &GameDetail) {
    println!("{}", detail.name.bright_cyan().bold());
    if let Some(released) = detail.released.as_deref() {
        println!("Released: {released}");
    }
    if let Some(score) = detail.metacritic {
        println!("Metacritic: {}", colorize_metacritic(score));
    }
    println!("Rating: {}", format_rating(detail.rating));

    if let Some(description) = detail.description_raw.as_deref() {
        if !description.trim().is_empty() {
            println!("\n{}", truncate_description(description));
        }
    }

    if !detail.platforms.is_empty() {
        let names: Vec<_> = detail
            .platforms
            .iter()
            .map(|p| p.platform.name.as_str())
            .collect();
        println!("\n{} {}", "Platforms:".bright_white().bold(), names.join(", "));
    }
    if !detail.genres.is_empty() {
        let names: Vec<_> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{} {}", "Genres:".bright_white().bold(), names.join(", "));
    }
    if !detail.developers.is_empty() {
        let names: Vec<_> = detail.developers.iter().map(|d| d.name.as_str()).collect();
        println!("{} {}", "Developers:".bright_white().bold(), names.join(", "));
    }
    if let Some(website) = detail.website.as_deref() {
        if !website.is_empty() {
            println!("{} {}", "Website:".bright_white().bold(), website);
        }
    }

    if let Some(requirements) = detail.pc_requirements() {
        println!("\n{}", "PC System Requirements".bright_cyan().bold());
        for (label, block) in [
            ("Minimum", requirements.minimum.as_deref()),
            ("Recommended", requirements.recommended.as_deref()),
        ] {
            let Some(raw) = block else { continue };
            println!("\n{}", label.bright_white().bold());
            for line in clean_requirements(raw) {
                println!("  {line}");
            }
        }
    }
}

fn colorize_metacritic(score: i32) -> ColoredString {
    let text = format!("MC {score}");
    match MetacriticTier::from_score(score) {
        MetacriticTier::High => text.bright_green(),
        MetacriticTier::Medium => text.bright_yellow(),
        MetacriticTier::Low => text.bright_red(),
    }
}

fn print_config(config: &Config) -> Result<()> {
    println!(
        "{} {}",
        "Config file:".bright_white().bold(),
        Config::config_path()?.display()
    );
    println!(
        "{} {}",
        "API base URL:".bright_white().bold(),
        config.api.effective_base_url()
    );
    let key = config.api.effective_key();
    let key_status = if key.trim().is_empty() {
        "not set (set GAME_SHELF_API_KEY or api.api_key)".bright_red()
    } else {
        "set".bright_green()
    };
    println!("{} {}", "API key:".bright_white().bold(), key_status);
    println!(
        "{} {}",
        "Page size:".bright_white().bold(),
        config.api.page_size
    );
    println!(
        "{} {} ms",
        "Search debounce:".bright_white().bold(),
        config.ui.search_debounce_ms
    );
    println!(
        "{} {}",
        "Dark mode:".bright_white().bold(),
        config.ui.dark_mode
    );
    Ok(())
}
