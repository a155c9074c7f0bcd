use super::constants::RULE_WIDTH;

pub fn banner() -> Vec<String> {
    vec![
        "=".repeat(RULE_WIDTH),
        "  tubegrab - fetch video and music in high quality".to_string(),
        "=".repeat(RULE_WIDTH),
        "Paste a video link and press Enter. Type `help` for commands.".to_string(),
    ]
}

pub fn help_lines() -> Vec<String> {
    [
        "<link>                 look up a video",
        "video [1080p|720p|480p]  pick MP4 video (default 1080p)",
        "audio [320kbps|128kbps]  pick MP3 audio (default 320kbps)",
        "download               get the file for the current choice",
        "help                   show this text",
        "quit                   leave",
    ]
    .iter()
    .map(|line| format!("  {line}"))
    .collect()
}
