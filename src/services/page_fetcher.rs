use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
    Client,
};
use thiserror::Error;

use crate::configuration::HttpSettings;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {0} timed out")]
    Timeout(String),
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid request header `{0}`")]
    InvalidHeader(String),
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Fetches a page body. Implementations treat non-2xx responses and
/// timeouts as errors.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent)
                .map_err(|_| FetchError::InvalidHeader(USER_AGENT.to_string()))?,
        );
        for (name, value) in settings.headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(FetchError::Request)?;

        Ok(ReqwestFetcher { client })
    }

    fn map_error(url: &str, e: reqwest::Error) -> FetchError {
        match e.is_timeout() {
            true => FetchError::Timeout(url.to_string()),
            false => FetchError::Request(e),
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_error(url, e))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res.text().await.map_err(|e| Self::map_error(url, e))?;

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}
