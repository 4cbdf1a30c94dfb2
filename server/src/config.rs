//! Command-line and environment configuration for the server binary.
//!
//! Priority (highest first): CLI flags, environment variables, defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use todo_core::TodoStore;

pub const DEFAULT_PORT: u16 = 9999;

/// Resolved server configuration.
#[derive(clap::Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "In-memory todo list HTTP API")]
pub struct Config {
    /// Address to bind to.
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log_level: String,

    /// Start with no todos instead of the five seed records.
    #[arg(long)]
    pub empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            empty: false,
        }
    }
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn initial_store(&self) -> TodoStore {
        if self.empty {
            TodoStore::new()
        } else {
            TodoStore::seeded()
        }
    }
}
