use tubegrab_core::{
    AppViewModel, ErrorKind, FormatOptionView, MediaRecord, Notification, NotificationLevel,
    RequestState, Selection,
};

use super::constants::RULE_WIDTH;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let header = format!("-- {} ", status_label(view.status));
    let fill = RULE_WIDTH.saturating_sub(header.chars().count());
    lines.push(format!("{header}{}", "-".repeat(fill)));

    if let Some(locator) = &view.pending_locator {
        lines.push(format!("Looking up {locator} ..."));
    }

    match &view.record {
        Some(record) => {
            lines.extend(record_card(record));
            lines.push("Choose a format:".to_string());
            lines.extend(
                view.format_options
                    .iter()
                    .map(|option| format_row(option, view.selection)),
            );
            lines.push(format!(
                "Download: {}",
                control_hint(view.download_enabled, "type `download`")
            ));
        }
        None if view.pending_locator.is_none() => {
            lines.push("No video yet.".to_string());
        }
        None => {}
    }

    lines.push(format!(
        "Link input: {}",
        control_hint(view.submit_enabled, "paste a link")
    ));

    if let Some(error) = view.last_error.and_then(error_label) {
        lines.push(format!("Last error: {error}"));
    }

    lines
}

pub fn render_notification(notification: &Notification, timestamp: &str) -> String {
    let marker = match notification.level {
        NotificationLevel::Success => "OK ",
        NotificationLevel::Failure => "ERR",
    };
    format!("[{timestamp}] {marker} {}", notification.text)
}

fn record_card(record: &MediaRecord) -> Vec<String> {
    vec![
        format!("  {}", record.title),
        format!(
            "  {} \u{2022} {} views \u{2022} {}",
            record.channel, record.views, record.duration
        ),
        format!("  thumbnail: {}", record.thumbnail),
    ]
}

fn format_row(option: &FormatOptionView, selection: Selection) -> String {
    let qualities = option
        .qualities
        .iter()
        .map(|quality| {
            if option.selected && *quality == selection.quality() {
                format!("({quality})")
            } else {
                quality.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let mark = if option.selected { "x" } else { " " };
    format!("  [{mark}] {:<10} {qualities}", option.format.label())
}

fn control_hint(enabled: bool, action: &str) -> String {
    if enabled {
        action.to_string()
    } else {
        "disabled while busy".to_string()
    }
}

fn status_label(status: RequestState) -> &'static str {
    match status {
        RequestState::Idle => "Idle",
        RequestState::Resolving => "Resolving",
        RequestState::Ready => "Ready",
        RequestState::Retrieving => "Preparing download",
    }
}

fn error_label(error: ErrorKind) -> Option<&'static str> {
    match error {
        ErrorKind::EmptyInput => None,
        ErrorKind::ResolutionFailed => Some("could not get video info"),
        ErrorKind::RetrievalFailed => Some("download failed"),
    }
}
