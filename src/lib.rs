pub mod error;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use error::CleanupError;
pub use heuristics::{CapitalizedName, SpeakerAllowlist, SpeakerClassifier};
pub use io::{MachineTranscript, read_transcript_lines, write_transcript};
pub use models::{LineCursor, Tag, TagVocabulary, Timestamp, Turn};
pub use pipeline::{CleanupSummary, clean_transcript};
pub use stages::{AssemblyConfig, AssemblyResult, ScanStats, assemble_turns, render};
