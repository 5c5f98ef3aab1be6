use anyhow::{Context, Result};
use log::{debug, info};

use crate::database::{Match, Player};
use crate::domain::{self, Pairing, PlayerId, Standings};
use crate::store::TournamentStore;

/// Player registration, match reporting and Swiss pairing over a store.
///
/// The facade keeps no state of its own: every call is a single read or
/// write against the store it was built with.
pub struct Tournament<S> {
    store: S,
}

impl<S: TournamentStore> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Removes all match records.
    pub fn delete_matches(&self) -> Result<usize> {
        let removed = self
            .store
            .delete_matches()
            .context("Failed to delete matches")?;
        info!("Deleted {} matches", removed);
        Ok(removed)
    }

    /// Removes all players. Matches referencing them must be deleted first.
    pub fn delete_players(&self) -> Result<usize> {
        let removed = self
            .store
            .delete_players()
            .context("Failed to delete players")?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }

    /// Clears matches, then players. Two separate commits.
    pub fn reset(&self) -> Result<(usize, usize)> {
        let matches = self.delete_matches()?;
        let players = self.delete_players()?;
        Ok((matches, players))
    }

    pub fn count_players(&self) -> Result<usize> {
        let count = self
            .store
            .count_players()
            .context("Failed to count players")?;
        debug!("{} players registered", count);
        Ok(count)
    }

    /// Adds a player; the store assigns the id. Names need not be unique.
    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let player = self
            .store
            .insert_player(name)
            .with_context(|| format!("Failed to register player {:?}", name))?;
        info!("Registered player {} as #{}", player.name, player.id);
        Ok(player.id)
    }

    /// Records a single decisive result.
    ///
    /// Whether `winner` and `loser` differ, or have met before, is left to
    /// the caller.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        self.store
            .insert_match(winner, loser)
            .with_context(|| format!("Failed to report match {} over {}", winner, loser))?;
        info!("Recorded match: #{} beat #{}", winner, loser);
        Ok(())
    }

    /// Looks up a single registered player.
    pub fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        self.store
            .find_player(id)
            .with_context(|| format!("Failed to look up player #{}", id))
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        self.store.list_players().context("Failed to list players")
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        self.store.list_matches().context("Failed to list matches")
    }

    /// Every player with their wins and matches played, most wins first.
    pub fn player_standings(&self) -> Result<Standings> {
        let standings = self
            .store
            .standings()
            .context("Failed to compute standings")?;
        debug!("Computed standings for {} players", standings.len());
        Ok(standings)
    }

    /// Pairs players adjacent in the current standings for the next round.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.player_standings()?;
        let pairings = domain::swiss_pairings(&standings)?;
        debug!("Paired {} players into {} matches", standings.len(), pairings.len());
        Ok(pairings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PairingError;
    use crate::store::MemoryStore;

    fn tournament_with(names: &[&str]) -> (Tournament<MemoryStore>, Vec<PlayerId>) {
        let tournament = Tournament::new(MemoryStore::new());
        let ids = names
            .iter()
            .map(|name| tournament.register_player(name).unwrap())
            .collect();
        (tournament, ids)
    }

    #[test]
    fn test_register_increments_count() {
        let (tournament, _) = tournament_with(&[]);
        assert_eq!(tournament.count_players().unwrap(), 0);

        tournament.register_player("Alice").unwrap();
        assert_eq!(tournament.count_players().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let (tournament, ids) = tournament_with(&["Sam", "Sam"]);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(tournament.count_players().unwrap(), 2);
    }

    #[test]
    fn test_report_match_updates_both_players() {
        let (tournament, ids) = tournament_with(&["A", "B"]);
        tournament.report_match(ids[1], ids[0]).unwrap();

        let standings = tournament.player_standings().unwrap();
        let winner = standings.find(ids[1]).unwrap();
        let loser = standings.find(ids[0]).unwrap();
        assert_eq!((winner.wins, winner.matches), (1, 1));
        assert_eq!((loser.wins, loser.matches), (0, 1));
    }

    #[test]
    fn test_reset_clears_everything() {
        let (tournament, ids) = tournament_with(&["A", "B"]);
        tournament.report_match(ids[0], ids[1]).unwrap();

        assert_eq!(tournament.reset().unwrap(), (1, 2));
        assert_eq!(tournament.count_players().unwrap(), 0);
        assert!(tournament.player_standings().unwrap().is_empty());
    }

    #[test]
    fn test_pairings_reject_odd_field() {
        let (tournament, _) = tournament_with(&["A", "B", "C"]);

        let err = tournament.swiss_pairings().unwrap_err();
        assert_eq!(
            err.downcast_ref::<PairingError>(),
            Some(&PairingError::OddPlayerCount(3))
        );
    }

    #[test]
    fn test_pairings_follow_standings() {
        let (tournament, ids) = tournament_with(&["A", "B", "C", "D"]);
        tournament.report_match(ids[2], ids[0]).unwrap();
        tournament.report_match(ids[3], ids[1]).unwrap();

        let pairings = tournament.swiss_pairings().unwrap();
        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].first_id, pairings[0].second_id), (ids[2], ids[3]));
        assert_eq!((pairings[1].first_id, pairings[1].second_id), (ids[0], ids[1]));
    }
}
