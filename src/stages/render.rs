use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::io::{MachineTranscript, write_transcript};
use crate::stages::AssemblyResult;

/// Result of rendering
#[derive(Debug)]
pub struct RenderResult {
    pub transcript_path: PathBuf,
    /// Path to the JSON transcript (if requested)
    pub json_path: Option<PathBuf>,
}

/// Write the assembled turns.
///
/// Produces the normalized text transcript and, when a path is given, a JSON
/// document with the same turns plus the scan counters.
pub fn render(
    assembled: &AssemblyResult,
    transcript_output: &Path,
    json_output: Option<&Path>,
) -> Result<RenderResult> {
    info!("Writing {} turns to {:?}", assembled.turns.len(), transcript_output);
    write_transcript(transcript_output, &assembled.turns)?;

    let json_path = match json_output {
        Some(path) => {
            info!("Writing JSON transcript to {:?}", path);
            MachineTranscript::new(&assembled.turns, assembled.stats.clone()).write_json(path)?;
            Some(path.to_path_buf())
        }
        None => None,
    };

    Ok(RenderResult {
        transcript_path: transcript_output.to_path_buf(),
        json_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{AssemblyConfig, assemble_turns};

    #[test]
    fn test_render_both_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let text = tmp.path().join("clean.txt");
        let json = tmp.path().join("clean.json");
        let lines: Vec<String> = ["Alice", "00:15", "Hi"].iter().map(|s| s.to_string()).collect();
        let assembled = assemble_turns(&lines, &AssemblyConfig::default());

        let result = render(&assembled, &text, Some(&json)).unwrap();

        assert_eq!(result.json_path.as_deref(), Some(json.as_path()));
        assert_eq!(std::fs::read_to_string(&text).unwrap(), "00:15 - Alice: Hi\n");
        assert!(std::fs::read_to_string(&json).unwrap().contains("\"Alice\""));
    }

    #[test]
    fn test_render_text_only() {
        let tmp = tempfile::tempdir().unwrap();
        let text = tmp.path().join("clean.txt");
        let assembled = assemble_turns(&[], &AssemblyConfig::default());

        let result = render(&assembled, &text, None).unwrap();

        assert!(result.json_path.is_none());
        assert_eq!(std::fs::read_to_string(&text).unwrap(), "");
    }
}
