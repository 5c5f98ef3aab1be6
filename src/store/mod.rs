//! Storage seam for the tournament facade.
//!
//! [`SqliteStore`] is the production backend; [`MemoryStore`] keeps everything
//! in process and is meant for tests and throwaway sessions.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;

use crate::database::{Match, Player};
use crate::domain::{PlayerId, Standings};

/// Storage primitives the tournament facade is built on.
///
/// Every mutating call commits on its own; nothing spans two calls.
pub trait TournamentStore {
    /// Removes every match, returning how many were removed.
    fn delete_matches(&self) -> Result<usize>;

    /// Removes every player. Fails while matches still reference them.
    fn delete_players(&self) -> Result<usize>;

    fn count_players(&self) -> Result<usize>;

    /// Stores a new player and returns it with its assigned id.
    fn insert_player(&self, name: &str) -> Result<Player>;

    /// Records a decisive result. Both ids must refer to registered players.
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()>;

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>>;

    fn list_players(&self) -> Result<Vec<Player>>;

    fn list_matches(&self) -> Result<Vec<Match>>;

    fn standings(&self) -> Result<Standings>;
}

impl<S: TournamentStore + ?Sized> TournamentStore for &S {
    fn delete_matches(&self) -> Result<usize> {
        (**self).delete_matches()
    }

    fn delete_players(&self) -> Result<usize> {
        (**self).delete_players()
    }

    fn count_players(&self) -> Result<usize> {
        (**self).count_players()
    }

    fn insert_player(&self, name: &str) -> Result<Player> {
        (**self).insert_player(name)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        (**self).insert_match(winner, loser)
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        (**self).find_player(id)
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        (**self).list_players()
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        (**self).list_matches()
    }

    fn standings(&self) -> Result<Standings> {
        (**self).standings()
    }
}
