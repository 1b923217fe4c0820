use crate::domain::images::ImagePick;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Optional SQL file applied after the schema (demo content).
    pub seed_path: Option<String>,
    /// Minimum log level used when `RUST_LOG` is not set.
    pub log_level: String,
    pub image_pick: ImagePick,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "casa.sqlite3".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            seed_path: None,
            log_level: "info".to_string(),
            image_pick: ImagePick::Random,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            database_path: env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            bind_addr: match env::var("BIND_ADDR") {
                Ok(v) => v.parse().context("BIND_ADDR must be host:port")?,
                Err(_) => defaults.bind_addr,
            },
            max_workers: match env::var("MAX_WORKERS") {
                Ok(v) => v.parse().context("MAX_WORKERS must be a valid number")?,
                Err(_) => defaults.max_workers,
            },
            seed_path: env::var("SEED_PATH").ok().filter(|p| !p.trim().is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            image_pick: match env::var("IMAGE_PICK") {
                Ok(v) => ImagePick::parse(&v)
                    .with_context(|| format!("IMAGE_PICK must be random, seeded or first, got {v:?}"))?,
                Err(_) => defaults.image_pick,
            },
        })
    }
}
