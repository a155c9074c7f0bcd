use crate::{ArtifactRequest, Notification, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the metadata service to resolve a locator.
    Resolve { seq: RequestSeq, locator: String },
    /// Ask the artifact service for a retrieval link.
    Retrieve {
        seq: RequestSeq,
        request: ArtifactRequest,
    },
    /// Open a retrieval link in a new context. Never retried.
    OpenLink { url: String },
    Notify(Notification),
}
