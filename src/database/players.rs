use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;
use crate::domain::PlayerId;
use crate::errors::statement_context;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context(statement_context("insert into", "players"))
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn count_players(conn: &mut DbConn) -> Result<usize> {
    let sql = "SELECT COUNT(*) FROM players";

    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .context(statement_context("count", "players"))?;

    usize::try_from(count).context("Player count out of range")
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context(statement_context("delete from", "players"))
}

pub fn find_by_id(conn: &mut DbConn, id: PlayerId) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn
        .prepare(sql)
        .context(statement_context("prepare listing of", "players"))?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
