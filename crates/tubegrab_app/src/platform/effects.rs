use std::time::Duration;

use chrono::Local;
use tubegrab_core::{
    ArtifactLink, ArtifactRequest, Effect, FailureReason, MediaRecord, Msg,
};
use tubegrab_engine::{ArtifactQuery, ArtifactTicket, EngineEvent, EngineHandle, MediaInfo};
use tubegrab_logging::{grab_info, grab_warn};

use super::opener::LinkOpener;
use super::ui::render::render_notification;

pub struct EffectRunner {
    engine: EngineHandle,
    opener: Box<dyn LinkOpener>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, opener: Box<dyn LinkOpener>) -> Self {
        Self { engine, opener }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Resolve { seq, locator } => {
                    self.engine.resolve(seq, locator);
                }
                Effect::Retrieve { seq, request } => {
                    self.engine.retrieve(seq, to_query(&request));
                }
                Effect::Notify(notification) => {
                    let timestamp = Local::now().format("%H:%M:%S").to_string();
                    println!("{}", render_notification(&notification, &timestamp));
                }
                Effect::OpenLink { url } => {
                    println!("Link: {url}");
                    match self.opener.open(&url) {
                        Ok(()) => grab_info!("Handed link to opener: {}", url),
                        Err(err) => grab_warn!("Could not open {}: {}", url, err),
                    }
                }
            }
        }
    }

    /// Next finished service call, translated for the controller.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    /// Like [`poll`](Self::poll), but blocks for up to `timeout`.
    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

pub fn to_query(request: &ArtifactRequest) -> ArtifactQuery {
    ArtifactQuery {
        video_id: request.media_id.clone(),
        format: request.format.container().to_string(),
        quality: request.quality.label().to_string(),
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ResolveCompleted { seq, result } => Msg::ResolveCompleted {
            seq,
            result: result
                .map(to_record)
                .map_err(|err| FailureReason::new(err.to_string())),
        },
        EngineEvent::RetrieveCompleted { seq, result } => Msg::RetrieveCompleted {
            seq,
            result: result
                .map(to_link)
                .map_err(|err| FailureReason::new(err.to_string())),
        },
    }
}

fn to_record(info: MediaInfo) -> MediaRecord {
    MediaRecord {
        id: info.video_id,
        title: info.title,
        channel: info.channel,
        thumbnail: info.thumbnail,
        duration: info.duration,
        views: info.views,
    }
}

fn to_link(ticket: ArtifactTicket) -> ArtifactLink {
    ArtifactLink {
        url: ticket.download_url,
        size: ticket.file_size,
        expires_in_secs: ticket.expires_in,
    }
}
