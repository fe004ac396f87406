use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Where the client build lands when no dist directory is given.
    pub fn default_dist_dir(self) -> &'static str {
        match self {
            Environment::Development => "../client/dist/",
            Environment::Production => "public/",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Serve the client app shell", long_about = None)]
pub struct Config {
    /// Selects the default dist directory
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    /// Directory holding index.html and the built assets
    #[arg(long, env = "APP_DIST")]
    pub dist: Option<PathBuf>,

    #[arg(long, env = "APP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Listen on all interfaces instead of localhost
    #[arg(long)]
    pub host: bool,
}

impl Config {
    pub fn dist_dir(&self) -> PathBuf {
        self.dist
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.env.default_dist_dir()))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = if self.host {
            IpAddr::from([0, 0, 0, 0])
        } else {
            IpAddr::from([127, 0, 0, 1])
        };
        SocketAddr::new(ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_dir_follows_environment() {
        let config = Config::try_parse_from(["server", "--env", "production"]).unwrap();
        assert_eq!(config.dist_dir(), PathBuf::from("public/"));

        let config = Config::try_parse_from(["server", "--env", "development"]).unwrap();
        assert_eq!(config.dist_dir(), PathBuf::from("../client/dist/"));
    }

    #[test]
    fn explicit_dist_wins() {
        let config =
            Config::try_parse_from(["server", "--env", "production", "--dist", "out"]).unwrap();
        assert_eq!(config.dist_dir(), PathBuf::from("out"));
    }

    #[test]
    fn binds_localhost_unless_host_is_set() {
        let config = Config::try_parse_from(["server", "--port", "8080"]).unwrap();
        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));

        let config = Config::try_parse_from(["server", "--port", "8080", "--host"]).unwrap();
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }
}
