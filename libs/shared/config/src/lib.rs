use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Builds a config from raw variable values, falling back to defaults
    /// for anything missing or unparseable.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| {
                warn!("HOST not set, using default {}", DEFAULT_HOST);
                DEFAULT_HOST.to_string()
            });

        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT value '{}' is not a valid port, using default {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => {
                warn!("PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self.host.parse::<IpAddr>().unwrap_or_else(|_| {
            warn!("HOST value '{}' is not an IP address, binding to {}", self.host, DEFAULT_HOST);
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.port)
    }
}
