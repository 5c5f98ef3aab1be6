use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::database::{Match, Player};
use crate::domain::{Pairing, Standings};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn render_players(players: &[Player]) -> String {
    let mut out = format!("{}\n", format!("{:>5}  {}", "ID", "NAME").bold());
    for player in players {
        out.push_str(&format!("{:>5}  {}\n", player.id, player.name));
    }
    out
}

pub fn render_matches(matches: &[Match]) -> String {
    let mut out = format!("{}\n", format!("{:>5}  {:>6}  {:>6}", "ID", "WINNER", "LOSER").bold());
    for m in matches {
        out.push_str(&format!("{:>5}  {:>6}  {:>6}\n", m.id, m.winner, m.loser));
    }
    out
}

pub fn render_standings(standings: &Standings) -> String {
    let header = format!(
        "{:>4}  {:>5}  {:<24} {:>5} {:>6} {:>7}",
        "#", "ID", "NAME", "WINS", "LOSSES", "MATCHES"
    );
    let mut out = format!("{}\n", header.bold());
    for (rank, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>5}  {:<24} {:>5} {:>6} {:>7}\n",
            rank + 1,
            s.id,
            s.name,
            s.wins,
            s.losses(),
            s.matches
        ));
    }
    out
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    let mut out = format!("{}\n", "Next round".bold());
    for (table, p) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} (#{}) vs {} (#{})\n",
            table + 1,
            p.first_name,
            p.first_id,
            p.second_name,
            p.second_id
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Standing;

    #[test]
    fn test_render_standings_lists_every_player() {
        colored::control::set_override(false);
        let standings = Standings::new(vec![
            Standing::new(1, "Alice", 2, 2),
            Standing::new(2, "Bob", 0, 2),
        ]);

        let text = render_standings(&standings);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Alice"));
        assert!(lines[2].contains("Bob"));

        let bob: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(bob, vec!["2", "2", "Bob", "0", "2", "2"]);
    }

    #[test]
    fn test_pairings_json_shape() {
        let pairings = vec![Pairing {
            first_id: 1,
            first_name: "A".to_string(),
            second_id: 2,
            second_name: "B".to_string(),
        }];

        let value: serde_json::Value = serde_json::from_str(&to_json(&pairings).unwrap()).unwrap();
        assert_eq!(value[0]["first_id"], 1);
        assert_eq!(value[0]["second_name"], "B");
    }
}
