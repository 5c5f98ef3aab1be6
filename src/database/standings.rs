use anyhow::{Context, Result};

use super::connection::DbConn;
use crate::domain::{Standing, Standings};

pub fn list_standings(conn: &mut DbConn) -> Result<Standings> {
    let sql = "
        SELECT
            p.id,
            p.name,
            COALESCE(w.wins, 0) AS wins,
            COALESCE(w.wins, 0) + COALESCE(l.losses, 0) AS matches
        FROM players p
        LEFT JOIN player_wins w ON w.player_id = p.id
        LEFT JOIN player_losses l ON l.player_id = p.id
        ORDER BY wins DESC, p.id ASC
    ";

    let mut stmt = conn.prepare(sql).context("Failed to prepare standings query")?;
    let rows = stmt
        .query_map([], parse_standing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read standings")?;

    Ok(Standings::new(rows))
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
