use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use engine_logging::engine_debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
    /// `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            redirect_limit: 10,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues one GET. Any status other than `200 OK` is reported as
    /// [`FailureKind::HttpStatus`].
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self, redirect_counter: Arc<AtomicUsize>) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        let mut builder = reqwest::Client::builder().redirect(policy);
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        engine_debug!("GET {} -> {}", url, status);
        if status != StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let bytes = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        let metadata = FetchMetadata {
            original_url: url.to_string(),
            final_url,
            status: status.as_u16(),
            redirect_count: redirect_counter.load(Ordering::Relaxed),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput { bytes, metadata })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
