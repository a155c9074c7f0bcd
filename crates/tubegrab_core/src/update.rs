use tubegrab_logging::{grab_debug, grab_info};

use crate::{AppState, Effect, Msg, Notification, RequestState, Selection};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => {
            let locator = state.input().to_string();
            resolve(&mut state, &locator)
        }
        Msg::ResolveRequested(locator) => resolve(&mut state, &locator),
        Msg::SelectionPicked { format, quality } => {
            if state.record().is_none() {
                return (state, Vec::new());
            }
            let selection = match quality {
                None => Some(Selection::for_format(format)),
                Some(quality) => Selection::new(format, quality),
            };
            match selection {
                Some(selection) => state.set_selection(selection),
                None => grab_debug!("Rejected quality {:?} for {:?}", quality, format),
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.begin_retrieve() {
            Some((seq, request)) => {
                grab_info!(
                    "Retrieve #{} id={} format={} quality={}",
                    seq,
                    request.media_id,
                    request.format.container(),
                    request.quality
                );
                vec![Effect::Retrieve { seq, request }]
            }
            None => Vec::new(),
        },
        Msg::ResolveCompleted { seq, result } => {
            if !state.finish_resolve(seq) {
                return (state, Vec::new());
            }
            let notification = match result {
                Ok(record) => {
                    let notification = Notification::resolved(&record);
                    state.apply_record(record);
                    notification
                }
                Err(reason) => {
                    state.apply_resolve_failure();
                    Notification::resolution_failed(&reason)
                }
            };
            state.set_notification(notification.clone());
            vec![Effect::Notify(notification)]
        }
        Msg::RetrieveCompleted { seq, result } => {
            if !state.finish_retrieve(seq) {
                return (state, Vec::new());
            }
            match result {
                Ok(link) => {
                    let notification = Notification::artifact_ready(&link);
                    state.set_notification(notification.clone());
                    vec![
                        Effect::Notify(notification),
                        Effect::OpenLink { url: link.url },
                    ]
                }
                Err(reason) => {
                    state.apply_retrieve_failure();
                    let notification = Notification::retrieval_failed(&reason);
                    state.set_notification(notification.clone());
                    vec![Effect::Notify(notification)]
                }
            }
        }
    };

    (state, effects)
}

fn resolve(state: &mut AppState, raw: &str) -> Vec<Effect> {
    let locator = raw.trim();
    if locator.is_empty() {
        return Vec::new();
    }
    // A retrieval owns the controller until it completes.
    if state.status() == RequestState::Retrieving {
        grab_debug!("Ignoring resolve while retrieving");
        return Vec::new();
    }
    let seq = state.begin_resolve(locator);
    grab_info!("Resolve #{} locator={}", seq, locator);
    vec![Effect::Resolve {
        seq,
        locator: locator.to_string(),
    }]
}
