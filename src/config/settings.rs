use anyhow::{Context, Result};

const DEFAULT_DATABASE_PATH: &str = "tournament.db";
const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `DATABASE_PATH` and `DATABASE_POOL_SIZE`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.database.path = path;
        }

        if let Ok(size) = std::env::var("DATABASE_POOL_SIZE") {
            config.database.pool_size = parse_pool_size(&size)?;
        }

        Ok(config)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32> {
    let size: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid DATABASE_POOL_SIZE: {}", raw))?;

    if size == 0 {
        anyhow::bail!("DATABASE_POOL_SIZE must be at least 1");
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.database.path, "tournament.db");
        assert_eq!(config.database.pool_size, 4);
    }

    #[test]
    fn test_parse_pool_size() {
        assert_eq!(parse_pool_size(" 8 ").unwrap(), 8);
        assert!(parse_pool_size("0").is_err());
        assert!(parse_pool_size("many").is_err());
    }
}
