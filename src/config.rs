use std::{env, path::PathBuf};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub fixtures: FixturePaths,
}

/// Locations of the JSON files loaded into the store at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct FixturePaths {
    pub users: PathBuf,
    pub orders: PathBuf,
    pub offers: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let fixture = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };
        let fixtures = FixturePaths {
            users: fixture("USERS_FIXTURE", "data/users.json"),
            orders: fixture("ORDERS_FIXTURE", "data/orders.json"),
            offers: fixture("OFFERS_FIXTURE", "data/offers.json"),
        };
        Ok(Self {
            port,
            database_url,
            host,
            fixtures,
        })
    }
}
