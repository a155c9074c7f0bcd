use crate::{ErrorKind, Format, MediaRecord, Notification, Quality, RequestState, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub input: String,
    pub status: RequestState,
    /// Locator of the resolution in flight, if any.
    pub pending_locator: Option<String>,
    pub record: Option<MediaRecord>,
    pub selection: Selection,
    pub format_options: Vec<FormatOptionView>,
    pub submit_enabled: bool,
    pub download_enabled: bool,
    pub selection_enabled: bool,
    pub last_error: Option<ErrorKind>,
    pub last_notification: Option<Notification>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptionView {
    pub format: Format,
    pub qualities: Vec<Quality>,
    pub selected: bool,
}
