use crate::{Format, Quality, Selection};

/// Descriptive metadata for a resolved locator.
///
/// Every field is a display-ready label; the controller never interprets
/// them beyond passing `id` back to the artifact service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub thumbnail: String,
    pub duration: String,
    pub views: String,
}

/// Payload of a single artifact retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub media_id: String,
    pub format: Format,
    pub quality: Quality,
}

impl ArtifactRequest {
    pub fn new(record: &MediaRecord, selection: Selection) -> Self {
        Self {
            media_id: record.id.clone(),
            format: selection.format(),
            quality: selection.quality(),
        }
    }
}

/// Retrieval target handed out by the artifact service. Used once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLink {
    pub url: String,
    pub size: String,
    pub expires_in_secs: Option<u64>,
}
