use std::collections::HashSet;

use super::is_timestamp_line;

/// Decides whether a cleaned line could name a speaker.
///
/// A candidate only becomes a turn once the next line turns out to be a
/// timestamp; that confirmation lives in the assembler, not here.
pub trait SpeakerClassifier {
    fn is_candidate(&self, line: &str) -> bool;

    fn name(&self) -> &'static str;
}

/// Any non-timestamp line starting with an ASCII capital letter
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedName;

impl SpeakerClassifier for CapitalizedName {
    fn is_candidate(&self, line: &str) -> bool {
        !line.is_empty()
            && !is_timestamp_line(line)
            && line.chars().next().is_some_and(|c| c.is_ascii_uppercase())
    }

    fn name(&self) -> &'static str {
        "CapitalizedName"
    }
}

/// Only names from a known participant list
#[derive(Debug, Clone, Default)]
pub struct SpeakerAllowlist {
    names: HashSet<String>,
}

impl SpeakerAllowlist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl SpeakerClassifier for SpeakerAllowlist {
    fn is_candidate(&self, line: &str) -> bool {
        self.names.contains(line)
    }

    fn name(&self) -> &'static str {
        "SpeakerAllowlist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_name() {
        let classifier = CapitalizedName;

        assert!(classifier.is_candidate("Alice"));
        assert!(classifier.is_candidate("Speaker 2"));
        assert!(classifier.is_candidate("Question"));
        assert!(!classifier.is_candidate("alice"));
        assert!(!classifier.is_candidate("00:15"));
        assert!(!classifier.is_candidate(""));
        assert!(!classifier.is_candidate("\"Quoted\""));
    }

    #[test]
    fn test_non_ascii_capitals_are_not_candidates() {
        assert!(!CapitalizedName.is_candidate("Émilie"));
    }

    #[test]
    fn test_allowlist() {
        let classifier = SpeakerAllowlist::new(["Alice", "bob"]);

        assert!(classifier.is_candidate("Alice"));
        assert!(classifier.is_candidate("bob"));
        assert!(!classifier.is_candidate("Carol"));
    }
}
