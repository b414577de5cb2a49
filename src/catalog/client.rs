// client.rs
use crate::catalog::images::resolve_image;
use crate::catalog::{CatalogError, CatalogSource};
use crate::config::AppConfig;
use crate::domain::Bike;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("bike_listings/", env!("CARGO_PKG_VERSION"));

const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);
const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_MILLIS: u64 = 1000;

/// Blocking client for `GET {api}/api/bikes/`.
pub struct HttpCatalogClient {
    client: Client,
    catalog_url: Url,
    media_base: Url,
    attempts: u32,
    backoff_base: Duration,
}

impl HttpCatalogClient {
    pub fn new(
        catalog_url: Url,
        media_base: Url,
        timeout: Duration,
        attempts: u32,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            catalog_url,
            media_base,
            attempts: attempts.max(1),
            backoff_base: DEFAULT_BACKOFF,
        })
    }

    /// Delay unit between attempts; attempt `n` waits `n * base` plus jitter.
    /// A zero base retries immediately.
    pub fn with_backoff(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            cfg.catalog_url()?,
            cfg.media_base()?,
            cfg.fetch_timeout(),
            cfg.fetch_attempts,
        )
    }

    pub fn catalog_url(&self) -> &Url {
        &self.catalog_url
    }

    fn try_fetch(&self) -> Result<Vec<Bike>, CatalogError> {
        let resp = self
            .client
            .get(self.catalog_url.clone())
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_catalog(&text, &self.media_base)
    }
}

impl CatalogSource for HttpCatalogClient {
    fn fetch_bikes(&self) -> Result<Vec<Bike>, CatalogError> {
        let mut last_err = None;

        for attempt in 1..=self.attempts {
            let start = Instant::now();

            match self.try_fetch() {
                Ok(bikes) => {
                    info!(
                        attempt,
                        count = bikes.len(),
                        elapsed = ?start.elapsed(),
                        "catalog fetched"
                    );
                    return Ok(bikes);
                }
                Err(e) => {
                    warn!(attempt, elapsed = ?start.elapsed(), error = %e, "catalog fetch failed");
                    last_err = Some(e);

                    if attempt < self.attempts {
                        std::thread::sleep(backoff(self.backoff_base, attempt));
                    }
                }
            }
        }

        Err(last_err
            .unwrap_or_else(|| CatalogError::UnexpectedShape("fetch loop made no attempts".into())))
    }
}

fn backoff(base: Duration, attempt: u32) -> Duration {
    if base.is_zero() {
        return Duration::ZERO;
    }
    let delay = base
        .saturating_mul(attempt)
        .min(Duration::from_secs(MAX_BACKOFF_SECS));
    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
    delay + Duration::from_millis(jitter)
}

/// Decodes the catalog body and resolves every image reference.
///
/// The body must be a JSON array. Records that fail to decode, or that repeat
/// an id already seen, are skipped with a warning.
pub fn parse_catalog(body: &str, media_base: &Url) -> Result<Vec<Bike>, CatalogError> {
    let data: Value = serde_json::from_str(body)?;
    let records = data.as_array().ok_or_else(|| {
        CatalogError::UnexpectedShape(format!("expected a JSON array, got {}", kind(&data)))
    })?;

    let mut seen = HashSet::new();
    let mut bikes = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let mut bike: Bike = match Bike::deserialize(record) {
            Ok(b) => b,
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable catalog record");
                continue;
            }
        };

        if !seen.insert(bike.id) {
            warn!(index, id = bike.id, "skipping duplicate catalog id");
            continue;
        }

        bike.image = Some(resolve_image(bike.image.as_deref(), media_base));
        bikes.push(bike);
    }

    debug!(decoded = bikes.len(), total = records.len(), "catalog parsed");
    Ok(bikes)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
