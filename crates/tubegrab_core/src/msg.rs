use crate::{ArtifactLink, Format, MediaRecord, Quality, RequestSeq};

/// Why a service call did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReason {
    pub detail: String,
}

impl FailureReason {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the locator input box.
    InputChanged(String),
    /// User submitted the current input box contents.
    Submitted,
    /// Resolve a locator directly, bypassing the input box.
    ResolveRequested(String),
    /// User picked a format, optionally with an explicit quality.
    SelectionPicked {
        format: Format,
        quality: Option<Quality>,
    },
    /// User confirmed the download.
    DownloadClicked,
    /// Metadata service completion for request `seq`.
    ResolveCompleted {
        seq: RequestSeq,
        result: Result<MediaRecord, FailureReason>,
    },
    /// Artifact service completion for request `seq`.
    RetrieveCompleted {
        seq: RequestSeq,
        result: Result<ArtifactLink, FailureReason>,
    },
}
