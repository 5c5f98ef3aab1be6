use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str, max_size: u32) -> Result<DbPool> {
    let manager = build_manager(database_path);
    build_pool(manager, max_size)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    // SQLite only checks REFERENCES clauses when asked to, per connection
    SqliteConnectionManager::file(path)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
