use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::PlayerId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the database schema if it is missing
    Init {
        /// Drop existing tables first, discarding all data
        #[arg(long)]
        reset: bool,
    },
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Print the number of registered players
    Count,
    /// Show a single registered player
    Player {
        /// Player id
        id: PlayerId,
        #[arg(long)]
        json: bool,
    },
    /// List registered players
    Players {
        #[arg(long)]
        json: bool,
    },
    /// List recorded matches
    Matches {
        #[arg(long)]
        json: bool,
    },
    /// Show players ranked by wins
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Pair players for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    DeleteMatches,
    /// Remove all players (matches must be deleted first)
    DeletePlayers,
    /// Remove all matches, then all players
    Reset,
    /// Generate a shell completion script
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from(["swiss-tournament", "report", "3", "7"]).unwrap();
        assert_eq!(cli.command, Command::Report { winner: 3, loser: 7 });
    }

    #[test]
    fn test_parse_kebab_case_commands() {
        let cli = Cli::try_parse_from(["swiss-tournament", "delete-matches"]).unwrap();
        assert_eq!(cli.command, Command::DeleteMatches);

        let cli = Cli::try_parse_from(["swiss-tournament", "pairings", "--json"]).unwrap();
        assert_eq!(cli.command, Command::Pairings { json: true });

        let cli = Cli::try_parse_from(["swiss-tournament", "player", "5"]).unwrap();
        assert_eq!(cli.command, Command::Player { id: 5, json: false });
    }
}
