//! Server configuration from the command line and environment

use clap::Parser;
use std::{io, net::SocketAddr, time::Duration};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "MCP server for the Hello World widget app", long_about = None)]
pub struct Config {
    /// URL of the compiled widget script bundle
    #[arg(long, env = "WIDGET_REPO_URL")]
    pub widget_repo_url: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Timeout for fetching the widget bundle, in seconds
    #[arg(long, default_value_t = 10)]
    pub fetch_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Resolves `host` (IP literal, bracketed IPv6 or hostname) and `port`.
    pub async fn bind_addr(&self) -> io::Result<SocketAddr> {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        tokio::net::lookup_host((host, self.port))
            .await?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address found for host '{}'", self.host),
                )
            })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["hello_world_mcp"]).unwrap();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_level, "info");
    }

    #[tokio::test]
    async fn explicit_flags() {
        let config = Config::try_parse_from([
            "hello_world_mcp",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--widget-repo-url",
            "https://example.com/widget.js",
            "--fetch-timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(
            config.bind_addr().await.unwrap().to_string(),
            "127.0.0.1:9000"
        );
        assert_eq!(
            config.widget_repo_url.as_deref(),
            Some("https://example.com/widget.js")
        );
        assert_eq!(config.fetch_timeout(), Duration::from_secs(3));
    }

    fn with_host(host: &str) -> Config {
        Config::try_parse_from(["hello_world_mcp", "--host", host, "--port", "8000"]).unwrap()
    }

    #[tokio::test]
    async fn bind_addr_accepts_ipv6_and_hostnames() {
        let addr = with_host("::").bind_addr().await.unwrap();
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8000);

        let addr = with_host("[::1]").bind_addr().await.unwrap();
        assert!(addr.ip().is_loopback());

        let addr = with_host("localhost").bind_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8000);
    }
}
