use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::domain::PlayerId;
use crate::errors::statement_context;

pub fn insert_match(conn: &mut DbConn, winner: PlayerId, loser: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, created_at";

    conn.query_row(sql, params![winner, loser], parse_match_row)
        .with_context(|| format!("Failed to record match {} over {}", winner, loser))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context(statement_context("delete from", "matches"))
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner, loser, created_at FROM matches ORDER BY id";

    let mut stmt = conn
        .prepare(sql)
        .context(statement_context("prepare listing of", "matches"))?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
