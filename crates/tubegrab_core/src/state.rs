use tubegrab_logging::grab_debug;

use crate::view_model::{AppViewModel, FormatOptionView};
use crate::{ArtifactRequest, Format, MediaRecord, Notification, Selection};

/// Request-sequence token. Allocated from one monotonic counter per controller.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Resolving,
    Ready,
    Retrieving,
}

impl RequestState {
    pub fn is_busy(self) -> bool {
        matches!(self, RequestState::Resolving | RequestState::Retrieving)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blank locator. Never surfaced to the user.
    EmptyInput,
    ResolutionFailed,
    RetrievalFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    pending_locator: Option<String>,
    record: Option<MediaRecord>,
    selection: Selection,
    status: RequestState,
    last_error: Option<ErrorKind>,
    last_notification: Option<Notification>,
    next_seq: RequestSeq,
    in_flight_resolve: Option<RequestSeq>,
    in_flight_retrieve: Option<RequestSeq>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn record(&self) -> Option<&MediaRecord> {
        self.record.as_ref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn status(&self) -> RequestState {
        self.status
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn view(&self) -> AppViewModel {
        let selection_enabled = self.record.is_some();
        let format_options = Format::ALL
            .iter()
            .map(|&format| FormatOptionView {
                format,
                qualities: format.qualities().to_vec(),
                selected: self.selection.format() == format,
            })
            .collect();

        AppViewModel {
            input: self.input.clone(),
            status: self.status,
            pending_locator: self.pending_locator.clone(),
            record: self.record.clone(),
            selection: self.selection,
            format_options,
            submit_enabled: !self.status.is_busy(),
            download_enabled: self.can_retrieve(),
            selection_enabled,
            last_error: self.last_error,
            last_notification: self.last_notification.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn can_retrieve(&self) -> bool {
        self.record.is_some() && !self.status.is_busy()
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    fn allocate_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        self.next_seq
    }

    /// Marks a resolution in flight and returns its token. Any earlier
    /// resolution still in flight becomes stale.
    pub(crate) fn begin_resolve(&mut self, locator: &str) -> RequestSeq {
        let seq = self.allocate_seq();
        if let Some(previous) = self.in_flight_resolve.replace(seq) {
            grab_debug!("Resolve #{} superseded by #{}", previous, seq);
        }
        self.pending_locator = Some(locator.to_string());
        self.status = RequestState::Resolving;
        self.dirty = true;
        seq
    }

    /// Claims the in-flight resolution slot for `seq`. Returns false for
    /// stale completions, which must not touch the state.
    pub(crate) fn finish_resolve(&mut self, seq: RequestSeq) -> bool {
        if self.in_flight_resolve != Some(seq) {
            grab_debug!(
                "Discarding stale resolve #{} (in flight: {:?})",
                seq,
                self.in_flight_resolve
            );
            return false;
        }
        self.in_flight_resolve = None;
        self.pending_locator = None;
        self.dirty = true;
        true
    }

    pub(crate) fn apply_record(&mut self, record: MediaRecord) {
        self.record = Some(record);
        self.selection = Selection::default();
        self.status = RequestState::Ready;
        self.last_error = None;
    }

    pub(crate) fn apply_resolve_failure(&mut self) {
        self.status = RequestState::Idle;
        self.last_error = Some(ErrorKind::ResolutionFailed);
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_retrieve(&mut self) -> Option<(RequestSeq, ArtifactRequest)> {
        if !self.can_retrieve() {
            return None;
        }
        let request = ArtifactRequest::new(self.record.as_ref()?, self.selection);
        let seq = self.allocate_seq();
        self.in_flight_retrieve = Some(seq);
        self.status = RequestState::Retrieving;
        self.dirty = true;
        Some((seq, request))
    }

    pub(crate) fn finish_retrieve(&mut self, seq: RequestSeq) -> bool {
        if self.in_flight_retrieve != Some(seq) {
            grab_debug!(
                "Discarding stale retrieve #{} (in flight: {:?})",
                seq,
                self.in_flight_retrieve
            );
            return false;
        }
        self.in_flight_retrieve = None;
        self.status = RequestState::Ready;
        self.dirty = true;
        true
    }

    pub(crate) fn apply_retrieve_failure(&mut self) {
        self.last_error = Some(ErrorKind::RetrievalFailed);
    }

    pub(crate) fn set_notification(&mut self, notification: Notification) {
        self.last_notification = Some(notification);
        self.dirty = true;
    }
}
