use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::TournamentStore;
use crate::database::{Match, Player};
use crate::domain::{PlayerId, Standing, Standings};
use crate::errors::StoreError;

#[derive(Default)]
struct State {
    players: Vec<Player>,
    matches: Vec<Match>,
    last_player_id: PlayerId,
    last_match_id: i32,
}

/// In-process store with the same constraints as the SQLite schema:
/// matches must name registered players, and players cannot be removed
/// while matches reference them. Ids keep growing across bulk clears.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state.lock().map_err(|_| StoreError::Poisoned.into())
    }
}

impl State {
    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    fn tally(&self) -> HashMap<PlayerId, (u32, u32)> {
        let mut tally: HashMap<PlayerId, (u32, u32)> = HashMap::new();
        for m in &self.matches {
            tally.entry(m.winner).or_default().0 += 1;
            tally.entry(m.loser).or_default().1 += 1;
        }
        tally
    }
}

impl TournamentStore for MemoryStore {
    fn delete_matches(&self) -> Result<usize> {
        let mut state = self.lock()?;
        let removed = state.matches.len();
        state.matches.clear();
        Ok(removed)
    }

    fn delete_players(&self) -> Result<usize> {
        let mut state = self.lock()?;
        if !state.matches.is_empty() {
            return Err(StoreError::PlayersReferenced(state.matches.len()).into());
        }
        let removed = state.players.len();
        state.players.clear();
        Ok(removed)
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.lock()?.players.len())
    }

    fn insert_player(&self, name: &str) -> Result<Player> {
        let mut state = self.lock()?;
        state.last_player_id += 1;
        let player = Player {
            id: state.last_player_id,
            name: name.to_string(),
            created_at: Some(Utc::now().naive_utc()),
        };
        state.players.push(player.clone());
        Ok(player)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        let mut state = self.lock()?;
        for id in [winner, loser] {
            if !state.has_player(id) {
                return Err(StoreError::UnknownPlayer(id).into());
            }
        }
        state.last_match_id += 1;
        let record = Match {
            id: state.last_match_id,
            winner,
            loser,
            created_at: Some(Utc::now().naive_utc()),
        };
        state.matches.push(record);
        Ok(())
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        Ok(self.lock()?.players.iter().find(|p| p.id == id).cloned())
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        Ok(self.lock()?.players.clone())
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        Ok(self.lock()?.matches.clone())
    }

    fn standings(&self) -> Result<Standings> {
        let state = self.lock()?;
        let tally = state.tally();

        let entries = state
            .players
            .iter()
            .map(|p| {
                let (wins, losses) = tally.get(&p.id).copied().unwrap_or_default();
                Standing::new(p.id, p.name.clone(), wins, wins + losses)
            })
            .collect();

        Ok(Standings::new(entries))
    }
}
