use tubegrab_core::{AppViewModel, Format, Msg, Quality, RequestState};

use super::constants::*;

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Submit(String),
    Pick {
        format: Format,
        quality: Option<Quality>,
    },
    Download,
    Help,
    Quit,
    Empty,
    Unrecognized(String),
}

/// What the surface does with a command given the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    Forward(Vec<Msg>),
    Refuse(String),
    Help,
    Quit,
    Ignore,
}

pub fn parse_command(line: &str) -> UserCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return UserCommand::Empty;
    }

    let mut words = trimmed.split_whitespace();
    let head = words.next().unwrap_or_default().to_ascii_lowercase();
    let rest: Vec<&str> = words.collect();
    let is = |set: &[&str]| is_word(set, &head);

    if is(WORDS_VIDEO) || is(WORDS_AUDIO) {
        let format = if is(WORDS_VIDEO) {
            Format::Video
        } else {
            Format::Audio
        };
        return match rest.as_slice() {
            [] => UserCommand::Pick {
                format,
                quality: None,
            },
            [word] => match word.parse::<Quality>() {
                Ok(quality) => UserCommand::Pick {
                    format,
                    quality: Some(quality),
                },
                Err(err) => UserCommand::Unrecognized(err.to_string()),
            },
            _ => UserCommand::Unrecognized(trimmed.to_string()),
        };
    }

    if rest.is_empty() {
        if is(WORDS_DOWNLOAD) {
            return UserCommand::Download;
        }
        if is(WORDS_HELP) {
            return UserCommand::Help;
        }
        if is(WORDS_QUIT) {
            return UserCommand::Quit;
        }
    }

    UserCommand::Submit(trimmed.to_string())
}

fn is_word(set: &[&str], word: &str) -> bool {
    set.iter().any(|candidate| *candidate == word)
}

/// Gates a command on the controls the view currently enables and turns
/// it into controller messages.
pub fn route(command: UserCommand, view: &AppViewModel) -> Routed {
    match command {
        UserCommand::Submit(locator) => {
            if !view.submit_enabled {
                let reason = match view.status {
                    RequestState::Resolving => "Still looking up the previous link, please wait.",
                    _ => "Wait for the download to finish first.",
                };
                return Routed::Refuse(reason.to_string());
            }
            Routed::Forward(vec![Msg::InputChanged(locator), Msg::Submitted])
        }
        UserCommand::Pick { format, quality } => {
            if !view.selection_enabled {
                return Routed::Refuse("Paste a video link first.".to_string());
            }
            if let Some(quality) = quality {
                if !quality.belongs_to(format) {
                    return Routed::Refuse(format!(
                        "{} is not available for {}.",
                        quality,
                        format.label()
                    ));
                }
            }
            Routed::Forward(vec![Msg::SelectionPicked { format, quality }])
        }
        UserCommand::Download => {
            if !view.download_enabled {
                let reason = if view.record.is_none() {
                    "Paste a video link first."
                } else {
                    "Busy, please wait."
                };
                return Routed::Refuse(reason.to_string());
            }
            Routed::Forward(vec![Msg::DownloadClicked])
        }
        UserCommand::Help => Routed::Help,
        UserCommand::Quit => Routed::Quit,
        UserCommand::Empty => Routed::Ignore,
        UserCommand::Unrecognized(text) => Routed::Refuse(format!("Not understood: {text}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubegrab_core::{update, AppState, MediaRecord};

    fn ready_view() -> AppViewModel {
        let (state, _) = update(
            AppState::new(),
            Msg::ResolveRequested("https://example/watch?v=X".to_string()),
        );
        let (state, _) = update(
            state,
            Msg::ResolveCompleted {
                seq: 1,
                result: Ok(MediaRecord {
                    id: "X".to_string(),
                    title: "T".to_string(),
                    channel: "C".to_string(),
                    thumbnail: "th.jpg".to_string(),
                    duration: "10:24".to_string(),
                    views: "1.2M".to_string(),
                }),
            },
        );
        state.view()
    }

    #[test]
    fn parses_format_words_with_and_without_quality() {
        assert_eq!(
            parse_command("audio 128kbps"),
            UserCommand::Pick {
                format: Format::Audio,
                quality: Some(Quality::Kbps128),
            }
        );
        assert_eq!(
            parse_command("  MP4 "),
            UserCommand::Pick {
                format: Format::Video,
                quality: None,
            }
        );
        assert!(matches!(
            parse_command("video 4k"),
            UserCommand::Unrecognized(_)
        ));
    }

    #[test]
    fn anything_else_is_a_locator() {
        assert_eq!(
            parse_command(" https://example/watch?v=X "),
            UserCommand::Submit("https://example/watch?v=X".to_string())
        );
        assert_eq!(parse_command("download"), UserCommand::Download);
        assert_eq!(parse_command("q"), UserCommand::Quit);
        assert_eq!(parse_command("   "), UserCommand::Empty);
    }

    #[test]
    fn submit_forwards_input_then_submit() {
        let view = AppState::new().view();
        assert_eq!(
            route(UserCommand::Submit("https://a".to_string()), &view),
            Routed::Forward(vec![
                Msg::InputChanged("https://a".to_string()),
                Msg::Submitted
            ])
        );
    }

    #[test]
    fn download_refused_without_record_or_while_busy() {
        let view = AppState::new().view();
        assert!(matches!(
            route(UserCommand::Download, &view),
            Routed::Refuse(_)
        ));

        let mut busy = ready_view();
        busy.download_enabled = false;
        busy.submit_enabled = false;
        assert_eq!(
            route(UserCommand::Download, &busy),
            Routed::Refuse("Busy, please wait.".to_string())
        );
        assert!(matches!(
            route(UserCommand::Submit("https://b".to_string()), &busy),
            Routed::Refuse(_)
        ));
    }

    #[test]
    fn submit_refused_while_resolving() {
        let (state, _) = update(
            AppState::new(),
            Msg::ResolveRequested("https://example/watch?v=X".to_string()),
        );
        let view = state.view();
        assert!(!view.submit_enabled);
        assert_eq!(
            route(UserCommand::Submit("https://example/watch?v=Y".to_string()), &view),
            Routed::Refuse("Still looking up the previous link, please wait.".to_string())
        );
        assert_eq!(
            route(UserCommand::Download, &view),
            Routed::Refuse("Paste a video link first.".to_string())
        );
    }

    #[test]
    fn ready_view_forwards_download_and_picks() {
        let view = ready_view();
        assert_eq!(
            route(UserCommand::Download, &view),
            Routed::Forward(vec![Msg::DownloadClicked])
        );
        assert!(matches!(
            route(
                UserCommand::Pick {
                    format: Format::Video,
                    quality: Some(Quality::Kbps320),
                },
                &view
            ),
            Routed::Refuse(_)
        ));
    }
}
