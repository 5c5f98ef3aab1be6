use anyhow::Result;
use log::debug;

use super::TournamentStore;
use crate::config::DatabaseSettings;
use crate::database::{self, DbConn, DbPool, Match, Player};
use crate::domain::{PlayerId, Standings};

/// Store backed by an SQLite file through an r2d2 pool.
///
/// Each call checks a connection out for its own duration; the guard hands it
/// back to the pool when dropped, whether the call succeeded or not.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the configured database and creates any missing tables.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = database::create_pool(&settings.path, settings.pool_size)?;
        let store = Self::new(pool);
        store.with_connection(database::setup::ensure_schema)?;

        debug!("Opened tournament database at {}", settings.path);
        Ok(store)
    }

    /// Drops and recreates the schema, discarding all players and matches.
    pub fn reset_schema(&self) -> Result<()> {
        self.with_connection(database::setup::reset_database)
    }

    fn with_connection<T>(&self, f: impl FnOnce(&mut DbConn) -> Result<T>) -> Result<T> {
        let mut conn = database::get_connection(&self.pool)?;
        f(&mut conn)
    }
}

impl TournamentStore for SqliteStore {
    fn delete_matches(&self) -> Result<usize> {
        self.with_connection(database::matches::delete_all)
    }

    fn delete_players(&self) -> Result<usize> {
        self.with_connection(database::players::delete_all)
    }

    fn count_players(&self) -> Result<usize> {
        self.with_connection(database::players::count_players)
    }

    fn insert_player(&self, name: &str) -> Result<Player> {
        self.with_connection(|conn| database::players::insert_player(conn, name))
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        self.with_connection(|conn| database::matches::insert_match(conn, winner, loser))
            .map(|_| ())
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        self.with_connection(|conn| database::players::find_by_id(conn, id))
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        self.with_connection(database::players::list_all)
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        self.with_connection(database::matches::list_all)
    }

    fn standings(&self) -> Result<Standings> {
        self.with_connection(database::standings::list_standings)
    }
}
