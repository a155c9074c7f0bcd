use std::fmt;
use std::str::FromStr;

/// Output container family offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Video,
    Audio,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Video, Format::Audio];

    /// Valid qualities for this format, highest first.
    pub fn qualities(self) -> &'static [Quality] {
        match self {
            Format::Video => &[Quality::P1080, Quality::P720, Quality::P480],
            Format::Audio => &[Quality::Kbps320, Quality::Kbps128],
        }
    }

    pub fn default_quality(self) -> Quality {
        self.qualities()[0]
    }

    /// Container name sent to the artifact service.
    pub fn container(self) -> &'static str {
        match self {
            Format::Video => "mp4",
            Format::Audio => "mp3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Format::Video => "MP4 Video",
            Format::Audio => "MP3 Audio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    P1080,
    P720,
    P480,
    Kbps320,
    Kbps128,
}

impl Quality {
    pub fn format(self) -> Format {
        match self {
            Quality::P1080 | Quality::P720 | Quality::P480 => Format::Video,
            Quality::Kbps320 | Quality::Kbps128 => Format::Audio,
        }
    }

    /// Wire label understood by the artifact service.
    pub fn label(self) -> &'static str {
        match self {
            Quality::P1080 => "1080p",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::Kbps320 => "320kbps",
            Quality::Kbps128 => "128kbps",
        }
    }

    pub fn belongs_to(self, format: Format) -> bool {
        self.format() == format
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quality '{0}'")]
pub struct UnknownQuality(pub String);

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Format::ALL
            .iter()
            .flat_map(|format| format.qualities().iter().copied())
            .find(|quality| quality.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownQuality(wanted.to_string()))
    }
}

/// A format together with a quality that is valid for it.
///
/// The pairing invariant is enforced by construction: there is no way to
/// build a `Selection` whose quality belongs to the other format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    format: Format,
    quality: Quality,
}

impl Selection {
    pub fn new(format: Format, quality: Quality) -> Option<Self> {
        quality
            .belongs_to(format)
            .then_some(Self { format, quality })
    }

    pub fn for_format(format: Format) -> Self {
        Self {
            format,
            quality: format.default_quality(),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::for_format(Format::Video)
    }
}
