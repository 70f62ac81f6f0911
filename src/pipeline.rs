use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::read_transcript_lines;
use crate::stages::{AssemblyConfig, ScanStats, assemble_turns, render};

/// Outcome of a cleanup run
#[derive(Debug, Clone)]
pub struct CleanupSummary {
    pub stats: ScanStats,
}

/// Read an export, assemble its turns and write the normalized transcript.
///
/// Nothing is written until the whole input has been scanned, so a failed
/// read leaves the output path untouched.
pub fn clean_transcript(
    input: &Path,
    output: &Path,
    json_output: Option<&Path>,
    config: &AssemblyConfig,
) -> Result<CleanupSummary> {
    info!("Loading transcript from {:?}", input);
    let lines = read_transcript_lines(input)?;

    let assembled = assemble_turns(&lines, config);
    info!(
        "Assembled {} turns, removed {} seek directives",
        assembled.turns.len(),
        assembled.stats.seek_directives_removed
    );

    let rendered = render(&assembled, output, json_output)?;
    info!("Transcript written to {:?}", rendered.transcript_path);
    if let Some(json_path) = rendered.json_path {
        info!("JSON transcript written to {:?}", json_path);
    }

    Ok(CleanupSummary {
        stats: assembled.stats,
    })
}
