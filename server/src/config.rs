//! Configuration for the catalog server.
//!
//! Loaded from environment variables with sensible defaults; nothing is
//! required, so a bare `podium-server` starts on port 8088.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8088),
            log_filter: env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,podium_web=debug".to_string()),
        }
    }

    /// The socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // Avoid mutating process env in tests; just check the formatting.
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8088,
            log_filter: "info".to_string(),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8088");
    }
}
