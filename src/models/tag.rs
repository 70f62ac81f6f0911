use std::fmt;

use serde::Serialize;

/// A label the export attaches to a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    #[serde(rename = "Question")]
    Question,
    #[serde(rename = "Longest Customer Story")]
    LongestCustomerStory,
    #[serde(rename = "Longest Monologue")]
    LongestMonologue,
    #[serde(rename = "Next Steps")]
    NextSteps,
    /// Two adjacent tags the export glued together without a separator.
    /// Recognized as its own literal so those lines are not read as speech.
    #[serde(rename = "Longest MonologueNext Steps")]
    LongestMonologueNextSteps,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Question,
        Tag::LongestCustomerStory,
        Tag::LongestMonologue,
        Tag::NextSteps,
        Tag::LongestMonologueNextSteps,
    ];

    /// Exact text of the tag line in the export
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Question => "Question",
            Tag::LongestCustomerStory => "Longest Customer Story",
            Tag::LongestMonologue => "Longest Monologue",
            Tag::NextSteps => "Next Steps",
            Tag::LongestMonologueNextSteps => "Longest MonologueNext Steps",
        }
    }

    /// First word of the label
    pub fn leading_word(&self) -> &'static str {
        let label = self.label();
        label.split(' ').next().unwrap_or(label)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The closed set of tags the classifier recognizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: Vec<Tag>,
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(Tag::ALL)
    }
}

impl TagVocabulary {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut unique = Vec::new();
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self { tags: unique }
    }

    /// Match a whole line against the vocabulary (exact, after trimming)
    pub fn match_line(&self, line: &str) -> Option<Tag> {
        let line = line.trim();
        self.tags.iter().copied().find(|tag| tag.label() == line)
    }

    /// Whether the line starts like a tag line would.
    ///
    /// Used at turn boundaries so that a tag followed by a timestamp is not
    /// mistaken for the next speaker.
    pub fn is_tag_prefix(&self, line: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| line.starts_with(tag.leading_word()))
    }
}
