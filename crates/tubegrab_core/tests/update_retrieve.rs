use std::sync::Once;

use pretty_assertions::assert_eq;
use tubegrab_core::{
    update, AppState, ArtifactLink, ArtifactRequest, Effect, ErrorKind, FailureReason, Format,
    MediaRecord, Msg, NotificationKind, NotificationLevel, Quality, RequestState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tubegrab_logging::initialize_for_tests);
}

fn scenario_record() -> MediaRecord {
    MediaRecord {
        id: "X".to_string(),
        title: "T".to_string(),
        channel: "C".to_string(),
        thumbnail: "th.jpg".to_string(),
        duration: "10:24".to_string(),
        views: "1.2M".to_string(),
    }
}

fn ready_state() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::ResolveRequested("https://example/watch?v=X".to_string()),
    );
    let (state, _) = update(
        state,
        Msg::ResolveCompleted {
            seq: 1,
            result: Ok(scenario_record()),
        },
    );
    assert_eq!(state.status(), RequestState::Ready);
    state
}

fn retrieve_seq(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Retrieve { seq, .. } => Some(*seq),
            _ => None,
        })
        .expect("retrieve effect")
}

#[test]
fn full_scenario_resolve_then_retrieve_default_selection() {
    init_logging();
    let (state, effects) = update(ready_state(), Msg::DownloadClicked);
    assert_eq!(state.status(), RequestState::Retrieving);
    assert_eq!(
        effects,
        vec![Effect::Retrieve {
            seq: 2,
            request: ArtifactRequest {
                media_id: "X".to_string(),
                format: Format::Video,
                quality: Quality::P1080,
            },
        }]
    );

    let (state, effects) = update(
        state,
        Msg::RetrieveCompleted {
            seq: 2,
            result: Ok(ArtifactLink {
                url: "https://cdn/x.mp4".to_string(),
                size: "42MB".to_string(),
                expires_in_secs: None,
            }),
        },
    );

    assert_eq!(state.status(), RequestState::Ready);
    assert_eq!(state.last_error(), None);
    match effects.as_slice() {
        [Effect::Notify(notification), Effect::OpenLink { url }] => {
            assert_eq!(notification.level, NotificationLevel::Success);
            assert_eq!(notification.kind, NotificationKind::ArtifactReady);
            assert!(notification.text.contains("42MB"));
            assert_eq!(url, "https://cdn/x.mp4");
        }
        other => panic!("unexpected effects {other:?}"),
    }
    let view = state.view();
    assert!(view
        .last_notification
        .map(|n| n.text.contains("42MB"))
        .unwrap_or(false));
}

#[test]
fn second_download_click_while_in_flight_is_a_noop() {
    init_logging();
    let (state, first) = update(ready_state(), Msg::DownloadClicked);
    assert_eq!(first.len(), 1);
    let before = state.clone();

    let (state, second) = update(state, Msg::DownloadClicked);
    assert!(second.is_empty());
    assert_eq!(state, before);
    assert!(!state.view().download_enabled);
}

#[test]
fn retrieval_carries_current_selection() {
    init_logging();
    let (state, _) = update(
        ready_state(),
        Msg::SelectionPicked {
            format: Format::Audio,
            quality: Some(Quality::Kbps128),
        },
    );
    let (_state, effects) = update(state, Msg::DownloadClicked);
    match effects.as_slice() {
        [Effect::Retrieve { request, .. }] => {
            assert_eq!(request.format, Format::Audio);
            assert_eq!(request.format.container(), "mp3");
            assert_eq!(request.quality.label(), "128kbps");
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn failed_retrieval_returns_to_ready_with_error() {
    init_logging();
    let (state, effects) = update(ready_state(), Msg::DownloadClicked);
    let (state, effects) = update(
        state,
        Msg::RetrieveCompleted {
            seq: retrieve_seq(&effects),
            result: Err(FailureReason::new("http status 502")),
        },
    );

    assert_eq!(state.status(), RequestState::Ready);
    assert_eq!(state.last_error(), Some(ErrorKind::RetrievalFailed));
    assert_eq!(state.record(), Some(&scenario_record()));
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::OpenLink { .. })));
    match effects.as_slice() {
        [Effect::Notify(notification)] => {
            assert_eq!(notification.level, NotificationLevel::Failure);
            assert_eq!(notification.kind, NotificationKind::RetrievalFailed);
        }
        other => panic!("unexpected effects {other:?}"),
    }

    // Re-enterable: the user can try again.
    let (state, effects) = update(state, Msg::DownloadClicked);
    assert_eq!(state.status(), RequestState::Retrieving);
    assert_eq!(effects.len(), 1);
}

#[test]
fn download_without_record_is_a_noop() {
    init_logging();
    let state = AppState::new();
    let before = state.clone();
    let (state, effects) = update(state, Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn download_rejected_while_resolving() {
    init_logging();
    let (state, _) = update(
        ready_state(),
        Msg::ResolveRequested("https://example/watch?v=Y".to_string()),
    );
    let (state, effects) = update(state, Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert_eq!(state.status(), RequestState::Resolving);
}

#[test]
fn resolve_rejected_while_retrieving() {
    init_logging();
    let (state, _) = update(ready_state(), Msg::DownloadClicked);
    assert!(!state.view().submit_enabled);
    let (state, effects) = update(
        state,
        Msg::ResolveRequested("https://example/watch?v=Y".to_string()),
    );
    assert!(effects.is_empty());
    assert_eq!(state.status(), RequestState::Retrieving);
}

#[test]
fn stale_retrieve_completion_is_ignored() {
    init_logging();
    let (state, effects) = update(ready_state(), Msg::DownloadClicked);
    let seq = retrieve_seq(&effects);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::RetrieveCompleted {
            seq: seq + 10,
            result: Ok(ArtifactLink {
                url: "https://cdn/other.mp4".to_string(),
                size: "1MB".to_string(),
                expires_in_secs: None,
            }),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn expiry_is_reported_in_minutes() {
    init_logging();
    let (state, effects) = update(ready_state(), Msg::DownloadClicked);
    let (_state, effects) = update(
        state,
        Msg::RetrieveCompleted {
            seq: retrieve_seq(&effects),
            result: Ok(ArtifactLink {
                url: "https://example.com/download/X".to_string(),
                size: "25.4 MB".to_string(),
                expires_in_secs: Some(3600),
            }),
        },
    );
    match effects.first() {
        Some(Effect::Notify(notification)) => {
            assert!(notification.text.contains("25.4 MB"));
            assert!(notification.text.contains("60 min"));
        }
        other => panic!("unexpected effect {other:?}"),
    }
}
