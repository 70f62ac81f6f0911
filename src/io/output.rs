use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{CleanupError, Result};
use crate::models::Turn;
use crate::stages::ScanStats;

/// Machine-readable output format
#[derive(Debug, Clone, Serialize)]
pub struct MachineTranscript<'a> {
    pub turns: &'a [Turn],
    pub metadata: ScanStats,
}

impl<'a> MachineTranscript<'a> {
    pub fn new(turns: &'a [Turn], metadata: ScanStats) -> Self {
        Self { turns, metadata }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|err| {
            if err.is_io() {
                write_error(path, err.into())
            } else {
                CleanupError::Json(err)
            }
        })?;
        writer.flush().map_err(|source| write_error(path, source))
    }
}

/// Render turns as the normalized text transcript
pub fn format_transcript(turns: &[Turn]) -> String {
    let mut output = String::new();
    for turn in turns {
        output.push_str(&turn.to_string());
        output.push('\n');
    }
    output
}

/// Write one formatted turn per line
pub fn write_transcript(path: &Path, turns: &[Turn]) -> Result<()> {
    let mut file = create(path)?;
    file.write_all(format_transcript(turns).as_bytes())
        .map_err(|source| write_error(path, source))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: std::io::Error) -> CleanupError {
    CleanupError::Write {
        path: path.to_path_buf(),
        source,
    }
}
