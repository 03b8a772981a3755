// src/filtering/text_detection.rs

use log::debug;
use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

/// Checks if a byte buffer looks like binary data.
///
/// Uses the `content_inspector` heuristic, which only inspects the first
/// kilobyte. This is advisory: it never decides whether a file's content is
/// collected.
///
/// # Examples
/// ```
/// use weaver::filtering::looks_binary;
///
/// assert!(!looks_binary(b"def main():\n    pass\n"));
/// assert!(looks_binary(b"binary \0 data"));
/// ```
pub fn looks_binary(buffer: &[u8]) -> bool {
    content_inspector::inspect(buffer).is_binary()
}

/// Reads a whole file as UTF-8 text, byte for byte.
///
/// Any valid UTF-8 is accepted, including content with NUL bytes.
///
/// # Errors
/// Propagates I/O errors, and returns `ErrorKind::InvalidData` when the
/// content is not valid UTF-8.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    if looks_binary(&bytes) {
        debug!(
            "'{}' looks binary but is kept if it decodes as UTF-8",
            path.display()
        );
    }
    String::from_utf8(bytes).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}

/// Counts `\n` terminators in a text file. A final line without a
/// terminator is not counted.
///
/// # Errors
/// Same as [`read_text`].
pub fn count_lines(path: &Path) -> io::Result<usize> {
    Ok(read_text(path)?.bytes().filter(|&b| b == b'\n').count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_looks_binary() {
        assert!(!looks_binary(&[0xEF, 0xBB, 0xBF, b'h', b'i']));
        assert!(!looks_binary(b""));
        assert!(looks_binary(b"\x7fELF\0\0\0"));
    }

    #[test]
    fn test_count_lines() -> io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("main.py");
        fs::write(&path, "a\nb\nc\n")?;
        assert_eq!(count_lines(&path)?, 3);
        fs::write(&path, "a\nb\nno newline at end")?;
        assert_eq!(count_lines(&path)?, 2);
        fs::write(&path, "")?;
        assert_eq!(count_lines(&path)?, 0);
        Ok(())
    }

    #[test]
    fn test_read_text_keeps_content_verbatim() -> io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("crlf.py");
        fs::write(&path, "x = 1\r\ny = 'é'\r\n")?;
        assert_eq!(read_text(&path)?, "x = 1\r\ny = 'é'\r\n");
        Ok(())
    }

    #[test]
    fn test_read_text_keeps_nul_bytes_in_valid_utf8() -> io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.py");
        let mut file = fs::File::create(&path)?;
        file.write_all(b"x = 1\n\0\ny = 2\n")?;
        drop(file);
        assert_eq!(read_text(&path)?, "x = 1\n\0\ny = 2\n");
        assert_eq!(count_lines(&path)?, 3);
        Ok(())
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() -> io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("latin1.py");
        fs::write(&path, [b'c', b'a', b'f', 0xE9, b'\n'])?;
        assert_eq!(read_text(&path).unwrap_err().kind(), ErrorKind::InvalidData);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_text(Path::new("no_such_file_for_weaver.py")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
