use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// GET endpoint taking the locator as the `url` query parameter.
    pub metadata_endpoint: String,
    /// POST endpoint taking a JSON artifact query.
    pub artifact_endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Upper bound on a whole service call as seen by the engine. A call
    /// that outlives it is reported as a timeout.
    pub response_deadline: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            metadata_endpoint: "http://127.0.0.1:8080/youtube-info".to_string(),
            artifact_endpoint: "http://127.0.0.1:8080/youtube-download".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            response_deadline: Duration::from_secs(45),
        }
    }
}
