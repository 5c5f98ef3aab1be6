pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod store;
pub mod tournament;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::PlayerId;

pub use crate::store::{MemoryStore, SqliteStore, TournamentStore};
pub use crate::tournament::Tournament;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    SqliteStore::open(&config.database)
}

fn open_tournament(config: &AppConfig) -> Result<Tournament<SqliteStore>> {
    Ok(Tournament::new(open_store(config)?))
}

pub fn handle_init(config: &AppConfig, reset: bool) -> Result<()> {
    let store = open_store(config)?;
    if reset {
        store.reset_schema()?;
    }
    println!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let id = open_tournament(config)?.register_player(name)?;
    println!("{}", id);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: PlayerId, loser: PlayerId) -> Result<()> {
    open_tournament(config)?.report_match(winner, loser)
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    let count = open_tournament(config)?.count_players()?;
    println!("{}", count);
    Ok(())
}

pub fn handle_player(config: &AppConfig, id: PlayerId, json: bool) -> Result<()> {
    let player = open_tournament(config)?
        .find_player(id)?
        .ok_or_else(|| anyhow::anyhow!("No player with id {}", id))?;
    if json {
        println!("{}", output::to_json(&player)?);
    } else {
        print!("{}", output::render_players(std::slice::from_ref(&player)));
    }
    Ok(())
}

pub fn handle_players(config: &AppConfig, json: bool) -> Result<()> {
    let players = open_tournament(config)?.list_players()?;
    if json {
        println!("{}", output::to_json(&players)?);
    } else {
        print!("{}", output::render_players(&players));
    }
    Ok(())
}

pub fn handle_matches(config: &AppConfig, json: bool) -> Result<()> {
    let matches = open_tournament(config)?.list_matches()?;
    if json {
        println!("{}", output::to_json(&matches)?);
    } else {
        print!("{}", output::render_matches(&matches));
    }
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let standings = open_tournament(config)?.player_standings()?;
    if json {
        println!("{}", output::to_json(&standings)?);
    } else {
        print!("{}", output::render_standings(&standings));
    }
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let pairings = open_tournament(config)?.swiss_pairings()?;
    if json {
        println!("{}", output::to_json(&pairings)?);
    } else {
        print!("{}", output::render_pairings(&pairings));
    }
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    let removed = open_tournament(config)?.delete_matches()?;
    println!("Deleted {} matches", removed);
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    let removed = open_tournament(config)?.delete_players()?;
    println!("Deleted {} players", removed);
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    let (matches, players) = open_tournament(config)?.reset()?;
    println!("Deleted {} matches and {} players", matches, players);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
