//! Tubegrab core: pure workflow state machine and view-model helpers.
mod effect;
mod msg;
mod notification;
mod record;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FailureReason, Msg};
pub use notification::{Notification, NotificationKind, NotificationLevel};
pub use record::{ArtifactLink, ArtifactRequest, MediaRecord};
pub use selection::{Format, Quality, Selection, UnknownQuality};
pub use state::{AppState, ErrorKind, RequestSeq, RequestState};
pub use update::update;
pub use view_model::{AppViewModel, FormatOptionView};
