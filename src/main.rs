use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::config::AppConfig;
use swiss_tournament::{
    handle_completions, handle_count, handle_delete_matches, handle_delete_players, handle_init,
    handle_matches, handle_pairings, handle_player, handle_players, handle_register, handle_report, handle_reset,
    handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    if let Command::Completions { shell } = command {
        return handle_completions(*shell);
    }

    let config = AppConfig::from_env()?;
    match command {
        Command::Init { reset } => handle_init(&config, *reset),
        Command::Register { name } => handle_register(&config, name),
        Command::Report { winner, loser } => handle_report(&config, *winner, *loser),
        Command::Count => handle_count(&config),
        Command::Player { id, json } => handle_player(&config, *id, *json),
        Command::Players { json } => handle_players(&config, *json),
        Command::Matches { json } => handle_matches(&config, *json),
        Command::Standings { json } => handle_standings(&config, *json),
        Command::Pairings { json } => handle_pairings(&config, *json),
        Command::DeleteMatches => handle_delete_matches(&config),
        Command::DeletePlayers => handle_delete_players(&config),
        Command::Reset => handle_reset(&config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
