use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drops every table and view, then recreates the schema. All data is lost.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let statements = split_sql_statements(SCHEMA_SQL);
    execute_all(conn, &statements)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

/// Creates whatever part of the schema is missing, keeping existing data.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let statements: Vec<String> = split_sql_statements(SCHEMA_SQL)
        .into_iter()
        .filter(|s| !is_drop_statement(s))
        .collect();
    execute_all(conn, &statements)?;

    log::debug!("Database schema is up to date");
    Ok(())
}

fn execute_all(conn: &mut DbConn, statements: &[String]) -> Result<()> {
    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_drop_statement(statement: &str) -> bool {
    statement.to_uppercase().starts_with("DROP ")
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sql_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n  DROP TABLE b ; ");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "DROP TABLE b"]);
    }

    #[test]
    fn test_schema_drops_come_first() {
        let statements = split_sql_statements(SCHEMA_SQL);
        let first_create = statements
            .iter()
            .position(|s| !is_drop_statement(s))
            .unwrap();
        assert!(statements[first_create..].iter().all(|s| !is_drop_statement(s)));
    }
}
