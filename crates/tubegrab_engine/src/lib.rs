//! Tubegrab engine: collaborator service clients and request execution.
mod engine;
mod service;
mod settings;
mod types;

pub use engine::EngineHandle;
pub use service::{ArtifactService, MetadataService, ReqwestServiceClient};
pub use settings::ServiceSettings;
pub use types::{
    ArtifactQuery, ArtifactTicket, EngineEvent, FailureKind, MediaInfo, RequestSeq, ServiceError,
};
