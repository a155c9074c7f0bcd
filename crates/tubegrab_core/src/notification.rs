use crate::{ArtifactLink, FailureReason, MediaRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Resolved,
    ResolutionFailed,
    ArtifactReady,
    RetrievalFailed,
}

/// User-visible toast emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub(crate) fn resolved(record: &MediaRecord) -> Self {
        Self {
            level: NotificationLevel::Success,
            kind: NotificationKind::Resolved,
            text: format!("Found \"{}\"", record.title),
        }
    }

    pub(crate) fn resolution_failed(reason: &FailureReason) -> Self {
        Self {
            level: NotificationLevel::Failure,
            kind: NotificationKind::ResolutionFailed,
            text: format!("Could not get video info: {}", reason.detail),
        }
    }

    pub(crate) fn artifact_ready(link: &ArtifactLink) -> Self {
        let text = match link.expires_in_secs {
            Some(secs) => format!(
                "Download ready ({}), link valid for {} min",
                link.size,
                secs / 60
            ),
            None => format!("Download ready ({})", link.size),
        };
        Self {
            level: NotificationLevel::Success,
            kind: NotificationKind::ArtifactReady,
            text,
        }
    }

    pub(crate) fn retrieval_failed(reason: &FailureReason) -> Self {
        Self {
            level: NotificationLevel::Failure,
            kind: NotificationKind::RetrievalFailed,
            text: format!("Download failed: {}", reason.detail),
        }
    }
}
