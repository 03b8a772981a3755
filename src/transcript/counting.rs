// src/transcript/counting.rs

use std::io::{self, Write};

/// A writer adapter that counts the bytes and UTF-8 characters passed through.
///
/// Characters are counted as non-continuation bytes, which is exact for
/// valid UTF-8 even when a character is split across `write` calls.
pub(crate) struct CountingWriter<W> {
    inner: W,
    bytes: u64,
    chars: u64,
}

impl<W: Write> CountingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: 0,
            chars: 0,
        }
    }

    pub(crate) fn bytes(&self) -> u64 {
        self.bytes
    }

    pub(crate) fn chars(&self) -> u64 {
        self.chars
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        let accepted = &buf[..written];
        self.bytes += written as u64;
        self.chars += accepted.iter().filter(|&&b| (b & 0xC0) != 0x80).count() as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
