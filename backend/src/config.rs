//! Runtime configuration, read from command-line flags or the environment.

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{bail, Result};
use clap::Parser;

use crate::storage::sqlite::db::DEFAULT_DATABASE_URL;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8081";
pub const DEFAULT_APP_NAME: &str = "Bookshelf";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Parser, Debug, Clone)]
#[command(name = "bookshelf")]
#[command(about = "REST API for a catalogue of books")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "BOOKSHELF_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: SocketAddr,

    /// SQLite URL, or `memory` for a non-persistent store
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Upper bound on pooled database connections
    #[arg(long, env = "BOOKSHELF_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Name shown on the home page
    #[arg(long, env = "BOOKSHELF_APP_NAME", default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// Basic auth username for /api routes
    #[arg(long, env = "BOOKSHELF_AUTH_USER")]
    pub auth_user: Option<String>,

    /// Basic auth password for /api routes
    #[arg(long, env = "BOOKSHELF_AUTH_PASSWORD", hide_env_values = true)]
    pub auth_password: Option<String>,

    /// Origin allowed to make cross-origin requests
    #[arg(long, env = "BOOKSHELF_CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 8081)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            app_name: DEFAULT_APP_NAME.to_string(),
            auth_user: None,
            auth_password: None,
            cors_origin: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Basic auth credentials, if configured. Both halves must be set together.
    pub fn credentials(&self) -> Result<Option<(&str, &str)>> {
        match (self.auth_user.as_deref(), self.auth_password.as_deref()) {
            (Some(user), Some(password)) => Ok(Some((user, password))),
            (None, None) => Ok(None),
            _ => bail!("--auth-user and --auth-password must be given together"),
        }
    }
}
