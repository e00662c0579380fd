//! Command-line and environment configuration

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "beer-cart")]
#[command(about = "Beer catalog and shopping cart service")]
pub struct Config {
    /// JSON file holding the beer catalog
    #[arg(long, env = "BEER_CART_CATALOG", default_value = "data/beers.json")]
    pub catalog: PathBuf,

    #[arg(long, env = "BEER_CART_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "BEER_CART_PORT", default_value = "8080")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Config {
    /// Address the server listens on.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid host {:?}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
