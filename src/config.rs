// src/config.rs

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Used bike marketplace listing page", long_about = None)]
pub struct AppConfig {
    /// Base URL of the catalog API (serves /api/bikes/ and /media/)
    #[arg(long, env = "API_URL", default_value = "http://localhost:8000")]
    pub api_url: Url,

    /// Address the listing server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,

    /// Per-request timeout for the catalog fetch
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Total attempts per catalog fetch (1 = no retry)
    #[arg(long, env = "FETCH_ATTEMPTS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub fetch_attempts: u32,

    /// Reload the catalog once it is older than this. 0 loads it once at startup.
    #[arg(long, env = "CATALOG_REFRESH_SECS", default_value_t = 0)]
    pub refresh_secs: u64,

    /// Region shown in the result count
    #[arg(long, env = "LISTING_REGION", default_value = "Tamil Nadu")]
    pub region: String,
}

impl AppConfig {
    /// `{api_url}/api/bikes/`
    pub fn catalog_url(&self) -> Result<Url, url::ParseError> {
        with_trailing_slash(&self.api_url).join("api/bikes/")
    }

    /// `{api_url}/media/`, the base relative image paths are resolved against.
    pub fn media_base(&self) -> Result<Url, url::ParseError> {
        with_trailing_slash(&self.api_url).join("media/")
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}

// Url::join drops the last path segment unless the base ends in '/'.
fn with_trailing_slash(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
