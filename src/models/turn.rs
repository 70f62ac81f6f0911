use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::Tag;

static TIMESTAMP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").unwrap());

/// Offset into the call, as printed by the export (`MM:SS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub minutes: u8,
    pub seconds: u8,
}

impl Timestamp {
    /// Parse a full line of exactly two digits, a colon and two digits
    pub fn parse(text: &str) -> Option<Self> {
        let caps = TIMESTAMP_PATTERN.captures(text)?;
        Some(Self {
            minutes: caps[1].parse().ok()?,
            seconds: caps[2].parse().ok()?,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One speaker turn, assembled from the lines between two speaker headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// When the turn starts
    pub timestamp: Timestamp,
    /// Speaker name exactly as it appeared in the export
    pub speaker: String,
    /// Tags in the order they were encountered
    pub tags: Vec<Tag>,
    /// Body fragments joined by single spaces
    pub utterance: String,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp, self.speaker)?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::label).collect();
            write!(f, " - [{}]", tags.join(", "))?;
        }
        write!(f, ": {}", self.utterance)
    }
}
