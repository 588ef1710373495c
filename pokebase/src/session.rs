use crate::{Cause, Config};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;

/// A way of reaching the remote API.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<Bytes, Cause>> + Send;
}

#[derive(Debug, Clone)]
pub struct Session<T = Http> {
    transport: T,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        if let Some(timeout) = config.timeout {
            log::info!(
                "PokéAPI session started: {} (timeout: {timeout:?})",
                config.api_url
            );
        } else {
            log::info!("PokéAPI session started: {}", config.api_url);
        }

        Self::with_transport(Http::new(config.timeout), config)
    }
}

impl<T: Transport> Session<T> {
    pub fn with_transport(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn download_artwork(&self, url: &str) -> Result<Bytes, Cause> {
        log::info!("Downloading artwork: {url}");

        self.transport.get(url).await
    }

    pub(crate) async fn fetch<R: DeserializeOwned>(&self, url: &str) -> Result<R, Cause> {
        log::info!("Fetching: {url}");

        let bytes = self.transport.get(url).await?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .build()
        .expect("Build reqwest client")
});

/// Plain HTTP through a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl Http {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_client(CLIENT.clone(), timeout)
    }

    pub fn with_client(client: reqwest::Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }
}

impl Transport for Http {
    async fn get(&self, url: &str) -> Result<Bytes, Cause> {
        let mut request = self.client.get(url);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Cause::NotFound(url.to_owned()));
        }

        Ok(response.error_for_status()?.bytes().await?)
    }
}
