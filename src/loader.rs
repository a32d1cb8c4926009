//! Input loading for timetable JSON
//!
//! Reads a file or stdin line by line and assembles the text in chunks,
//! so large exports are streamed instead of read in one syscall burst.

use crate::error::{TimetableError, TimetableResult};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of lines appended to the buffer per chunk
pub const LINES_PER_CHUNK: usize = 500;

const UTF8_BOM: char = '\u{FEFF}';

/// Where the timetable JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Load the full JSON text from the given source
pub fn load_text(source: &InputSource) -> TimetableResult<String> {
    match source {
        InputSource::File(path) => {
            let file = File::open(path).map_err(|e| {
                TimetableError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to open '{}': {}", path.display(), e),
                ))
            })?;
            read_chunked(file)
        }
        InputSource::Stdin => read_chunked(io::stdin().lock()),
    }
}

/// Read UTF-8 text line by line, flushing every [`LINES_PER_CHUNK`] lines
///
/// A leading byte-order mark is dropped.
pub fn read_chunked<R: Read>(reader: R) -> TimetableResult<String> {
    let reader = BufReader::new(reader);
    let mut text = String::new();
    let mut chunk = String::new();
    let mut in_chunk = 0usize;
    let mut total = 0usize;

    for line in reader.lines() {
        let raw = line?;
        let line = if total == 0 {
            raw.strip_prefix(UTF8_BOM).unwrap_or(&raw)
        } else {
            &raw
        };
        chunk.push_str(line);
        chunk.push('\n');
        in_chunk += 1;
        total += 1;

        if in_chunk >= LINES_PER_CHUNK {
            text.push_str(&chunk);
            chunk.clear();
            in_chunk = 0;
            debug!(lines = total, "loaded chunk");
        }
    }

    if !chunk.is_empty() {
        text.push_str(&chunk);
    }
    debug!(lines = total, bytes = text.len(), "input loaded");

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("plan.json")),
            InputSource::File(PathBuf::from("plan.json"))
        );
    }

    #[test]
    fn test_read_chunked_spans_multiple_chunks() {
        let input: String = (0..LINES_PER_CHUNK * 2 + 7)
            .map(|i| format!("{i}\n"))
            .collect();

        let text = read_chunked(input.as_bytes()).unwrap();

        assert_eq!(text, input);
        assert_eq!(text.lines().count(), LINES_PER_CHUNK * 2 + 7);
    }

    #[test]
    fn test_read_chunked_normalizes_crlf() {
        let text = read_chunked("{\r\n\"days\": []\r\n}".as_bytes()).unwrap();
        assert_eq!(text, "{\n\"days\": []\n}\n");
    }

    #[test]
    fn test_read_chunked_strips_bom() {
        let text = read_chunked(&b"\xEF\xBB\xBF{\"days\":[],\"slots\":[]}\r\n"[..]).unwrap();
        assert_eq!(text, "{\"days\":[],\"slots\":[]}\n");
    }

    #[test]
    fn test_read_chunked_keeps_inner_bom() {
        let text = read_chunked("a\n\u{FEFF}b\n".as_bytes()).unwrap();
        assert_eq!(text, "a\n\u{FEFF}b\n");
    }

    #[test]
    fn test_load_text_from_bom_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBF{\"days\":[],\"slots\":[]}\r\n").unwrap();

        let timetable =
            crate::parser::parse_timetable(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert!(timetable.days.is_empty());
    }

    #[test]
    fn test_load_text_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"days\":[],\"slots\":[]}}").unwrap();

        let text = load_text(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(text.trim(), r#"{"days":[],"slots":[]}"#);
    }

    #[test]
    fn test_load_text_missing_file() {
        let result = load_text(&InputSource::File(PathBuf::from("does/not/exist.json")));
        match result {
            Err(TimetableError::Io(e)) => assert!(e.to_string().contains("exist.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_source() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }
}
