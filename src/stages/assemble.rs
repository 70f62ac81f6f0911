use serde::Serialize;
use tracing::{debug, trace};

use crate::heuristics::{
    CapitalizedName, SpeakerClassifier, is_seek_directive, is_timestamp_line, strip_line_number,
    strip_line_prefix,
};
use crate::models::{LineCursor, Tag, TagVocabulary, Timestamp, Turn};

/// Configuration for turn assembly
pub struct AssemblyConfig {
    /// Tags recognized inside a turn body
    pub vocabulary: TagVocabulary,
    /// Decides which lines may name a speaker
    pub classifier: Box<dyn SpeakerClassifier>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            vocabulary: TagVocabulary::default(),
            classifier: Box::new(CapitalizedName),
        }
    }
}

impl std::fmt::Debug for AssemblyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyConfig")
            .field("vocabulary", &self.vocabulary)
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

/// Counters collected during a single pass over the input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Lines in the input, blank ones included
    pub lines_read: usize,
    pub turns_emitted: usize,
    /// Speaker candidates with no timestamp on the following line
    pub unconfirmed_candidates: usize,
    /// Confirmed turns whose body held no speech
    pub empty_turns_dropped: usize,
    pub seek_directives_removed: usize,
}

/// Result of turn assembly
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    pub turns: Vec<Turn>,
    pub stats: ScanStats,
}

/// Tags and speech collected after a confirmed speaker header
#[derive(Debug, Default)]
struct TurnBody<'a> {
    tags: Vec<Tag>,
    fragments: Vec<&'a str>,
}

impl TurnBody<'_> {
    /// Emit the turn, or nothing if no speech was collected
    fn finish(self, timestamp: Timestamp, speaker: &str) -> Option<Turn> {
        let utterance = self.fragments.join(" ").trim().to_string();
        if utterance.is_empty() {
            return None;
        }
        Some(Turn {
            timestamp,
            speaker: speaker.to_string(),
            tags: self.tags,
            utterance,
        })
    }
}

/// Group the lines of a transcript export into turns.
///
/// Runs once from top to bottom. A speaker candidate only opens a turn when
/// the next line is a timestamp; the turn body then runs until a blank line,
/// a seek directive, or the header of the next turn.
pub fn assemble_turns(lines: &[String], config: &AssemblyConfig) -> AssemblyResult {
    let mut cursor = LineCursor::new(lines);
    let mut turns = Vec::new();
    let mut stats = ScanStats {
        lines_read: lines.len(),
        ..Default::default()
    };

    while let Some(raw) = cursor.current() {
        let line = strip_line_number(raw);

        if line.trim().is_empty() {
            cursor.advance();
            continue;
        }

        if is_seek_directive(line) {
            trace!(line = cursor.position(), "Dropping seek directive");
            stats.seek_directives_removed += 1;
            cursor.advance();
            continue;
        }

        if !config.classifier.is_candidate(line) {
            cursor.advance();
            continue;
        }

        let Some(timestamp) = cursor
            .peek()
            .map(strip_line_prefix)
            .and_then(Timestamp::parse)
        else {
            trace!(line = cursor.position(), candidate = line, "Speaker candidate not confirmed");
            stats.unconfirmed_candidates += 1;
            cursor.advance();
            continue;
        };

        let start = cursor.position();
        cursor.advance_by(2);
        let body = collect_body(&mut cursor, config);

        match body.finish(timestamp, line) {
            Some(turn) => turns.push(turn),
            None => {
                debug!(line = start, speaker = line, %timestamp, "Dropping turn with no speech");
                stats.empty_turns_dropped += 1;
            }
        }
    }

    stats.turns_emitted = turns.len();
    debug!(
        "Assembled {} turns from {} lines ({} unconfirmed candidates, {} empty turns)",
        stats.turns_emitted,
        stats.lines_read,
        stats.unconfirmed_candidates,
        stats.empty_turns_dropped
    );

    AssemblyResult { turns, stats }
}

/// Collect body lines until the turn ends, leaving the cursor on the line
/// that ended it
fn collect_body<'a>(cursor: &mut LineCursor<'a>, config: &AssemblyConfig) -> TurnBody<'a> {
    let mut body = TurnBody::default();

    while let Some(raw) = cursor.current() {
        let line = strip_line_prefix(raw);

        if line.is_empty() || is_seek_directive(line) {
            break;
        }
        if starts_next_turn(line, cursor.peek(), config) {
            break;
        }

        match config.vocabulary.match_line(line) {
            Some(tag) => body.tags.push(tag),
            None => body.fragments.push(line),
        }
        cursor.advance();
    }

    body
}

/// Whether `line` together with the line after it forms a new speaker header
fn starts_next_turn(line: &str, next: Option<&str>, config: &AssemblyConfig) -> bool {
    config.classifier.is_candidate(line)
        && !config.vocabulary.is_tag_prefix(line)
        && next.map(strip_line_prefix).is_some_and(is_timestamp_line)
}
