pub const WORDS_VIDEO: &[&str] = &["video", "mp4"];
pub const WORDS_AUDIO: &[&str] = &["audio", "mp3"];
pub const WORDS_DOWNLOAD: &[&str] = &["download", "d"];
pub const WORDS_HELP: &[&str] = &["help", "?"];
pub const WORDS_QUIT: &[&str] = &["quit", "exit", "q"];

pub const RULE_WIDTH: usize = 60;
