use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tubegrab_logging::{grab_debug, grab_info, grab_warn};
use url::Url;

use crate::{ArtifactQuery, ArtifactTicket, FailureKind, MediaInfo, ServiceError, ServiceSettings};

#[async_trait::async_trait]
pub trait MetadataService: Send + Sync {
    async fn resolve(&self, locator: &str) -> Result<MediaInfo, ServiceError>;
}

#[async_trait::async_trait]
pub trait ArtifactService: Send + Sync {
    async fn retrieve(&self, query: &ArtifactQuery) -> Result<ArtifactTicket, ServiceError>;
}

/// Error body both services use for rejections, e.g. `{"error": "Invalid YouTube URL"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for both collaborator services.
#[derive(Debug, Clone)]
pub struct ReqwestServiceClient {
    client: reqwest::Client,
    metadata_endpoint: Url,
    artifact_endpoint: Url,
}

impl ReqwestServiceClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        let metadata_endpoint = parse_endpoint(&settings.metadata_endpoint)?;
        let artifact_endpoint = parse_endpoint(&settings.artifact_endpoint)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            metadata_endpoint,
            artifact_endpoint,
        })
    }
}

#[async_trait::async_trait]
impl MetadataService for ReqwestServiceClient {
    async fn resolve(&self, locator: &str) -> Result<MediaInfo, ServiceError> {
        let mut url = self.metadata_endpoint.clone();
        url.query_pairs_mut().append_pair("url", locator);
        grab_info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }
}

#[async_trait::async_trait]
impl ArtifactService for ReqwestServiceClient {
    async fn retrieve(&self, query: &ArtifactQuery) -> Result<ArtifactTicket, ServiceError> {
        let body = serde_json::to_vec(query)
            .map_err(|err| ServiceError::new(FailureKind::MalformedBody, err.to_string()))?;
        grab_info!(
            "POST {} video_id={} format={} quality={}",
            self.artifact_endpoint,
            query.video_id,
            query.format,
            query.quality
        );

        let response = self
            .client
            .post(self.artifact_endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ServiceError> {
    let url = Url::parse(raw).map_err(|err| {
        ServiceError::new(FailureKind::InvalidEndpoint, format!("{raw}: {err}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ServiceError::new(
            FailureKind::InvalidEndpoint,
            format!("{raw}: unsupported scheme {other}"),
        )),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    let text = response.text().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let message = rejection_message(status, &text);
        grab_warn!("Service rejected request: {} {}", status.as_u16(), message);
        return Err(ServiceError::new(
            FailureKind::HttpStatus(status.as_u16()),
            message,
        ));
    }

    serde_json::from_str(&text).map_err(|err| {
        grab_debug!("Unparseable body ({} bytes): {}", text.len(), err);
        ServiceError::new(FailureKind::MalformedBody, err.to_string())
    })
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error,
        _ => status.to_string(),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
