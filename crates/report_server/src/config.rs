//! Command line configuration for the report service.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Default interface the service listens on.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Default port the service listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Command line configuration for the report server.
///
/// Log verbosity follows `RUST_LOG` (defaults to `info`).
#[derive(Clone, Debug, Parser)]
#[command(author, version, about = "Renders maintenance records into PDF reports over HTTP")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}
