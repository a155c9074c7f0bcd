use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestSeq = u64;

/// Metadata service success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaInfo {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub thumbnail: String,
    pub duration: String,
    pub views: String,
}

/// Artifact service request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactQuery {
    pub video_id: String,
    /// Container, `mp4` or `mp3`.
    pub format: String,
    pub quality: String,
}

/// Artifact service success body. Echoed request fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactTicket {
    pub download_url: String,
    pub file_size: String,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ResolveCompleted {
        seq: RequestSeq,
        result: Result<MediaInfo, ServiceError>,
    },
    RetrieveCompleted {
        seq: RequestSeq,
        result: Result<ArtifactTicket, ServiceError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}
