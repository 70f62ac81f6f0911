use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CleanupError, Result};

/// Read a whole transcript export into memory, one entry per line
pub fn read_transcript_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CleanupError::InputNotFound(path.to_path_buf()),
        _ => CleanupError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(split_lines(&content))
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{AssemblyConfig, assemble_turns};

    #[test]
    fn test_split_lines() {
        let lines = split_lines("1→Alice\r\n2→00:15\n\n3→Hi\n");
        assert_eq!(lines, vec!["1→Alice", "2→00:15", "", "3→Hi"]);
    }

    #[test]
    fn test_split_lines_on_bare_carriage_returns() {
        let lines = split_lines("Alice\r00:15\rhello\r\rBob\r");
        assert_eq!(lines, vec!["Alice", "00:15", "hello", "", "Bob"]);
    }

    #[test]
    fn test_carriage_return_export_assembles() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mac.txt");
        std::fs::write(&path, "Alice\r00:15\rhello").unwrap();

        let lines = read_transcript_lines(&path).unwrap();
        let result = assemble_turns(&lines, &AssemblyConfig::default());

        assert_eq!(result.turns.len(), 1);
        assert_eq!(result.turns[0].to_string(), "00:15 - Alice: hello");
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.txt");

        let err = read_transcript_lines(&path).unwrap_err();
        assert!(matches!(err, CleanupError::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = read_transcript_lines(&path).unwrap_err();
        assert!(matches!(err, CleanupError::Read { .. }));
    }

    #[test]
    fn test_reads_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("call.txt");
        std::fs::write(&path, "1→Alice\n2→00:15\n").unwrap();

        let lines = read_transcript_lines(&path).unwrap();
        assert_eq!(lines, vec!["1→Alice", "2→00:15"]);
    }
}
