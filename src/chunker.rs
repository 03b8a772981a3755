// src/chunker.rs

//! Splits a realized transcript into ordered chunks for transfer.
//!
//! Chunk sizes are measured in UTF-8 characters, so a chunk never ends in
//! the middle of a multi-byte character and every chunk is valid text.

use std::io::{self, ErrorKind, Read};
use std::mem;

const READ_BLOCK_SIZE: usize = 64 * 1024;

/// One piece of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position in the transmission order.
    pub index: usize,
    /// At most `chunk_size` characters of transcript text. Never empty.
    pub content: String,
}

/// Number of chunks a transcript of `chars` characters splits into.
///
/// # Examples
///
/// ```
/// use weaver::chunker::chunk_count;
///
/// assert_eq!(chunk_count(0, 10), 0);
/// assert_eq!(chunk_count(10, 10), 1);
/// assert_eq!(chunk_count(11, 10), 2);
/// ```
pub fn chunk_count(chars: u64, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 0;
    }
    chars.div_ceil(chunk_size as u64) as usize
}

/// Lazy iterator of chunks read sequentially from a transcript source.
///
/// # Examples
///
/// ```
/// use weaver::chunker::Chunks;
///
/// let chunks: Vec<String> = Chunks::new("héllo wörld".as_bytes(), 4)
///     .unwrap()
///     .map(|chunk| chunk.unwrap().content)
///     .collect();
/// assert_eq!(chunks, vec!["héll", "o wö", "rld"]);
/// ```
pub struct Chunks<R> {
    reader: R,
    chunk_size: usize,
    next_index: usize,
    pending: Vec<u8>,
    // Bytes of `pending` already scanned, and character starts seen in them.
    scanned: usize,
    seen: usize,
    done: bool,
}

impl<R: Read> Chunks<R> {
    /// # Errors
    /// Returns `ErrorKind::InvalidInput` if `chunk_size` is zero.
    pub fn new(reader: R, chunk_size: usize) -> io::Result<Self> {
        if chunk_size == 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "chunk size must be greater than 0",
            ));
        }
        Ok(Self {
            reader,
            chunk_size,
            next_index: 1,
            pending: Vec::new(),
            scanned: 0,
            seen: 0,
            done: false,
        })
    }

    /// Byte offset where the `chunk_size + 1`-th character starts, if it has
    /// been read yet.
    fn split_point(&mut self) -> Option<usize> {
        while self.scanned < self.pending.len() {
            let at = self.scanned;
            self.scanned += 1;
            if is_char_start(self.pending[at]) {
                if self.seen == self.chunk_size {
                    return Some(at);
                }
                self.seen += 1;
            }
        }
        None
    }

    /// Reads one more block. Returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        let mut block = vec![0u8; READ_BLOCK_SIZE];
        loop {
            match self.reader.read(&mut block) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.pending.extend_from_slice(&block[..n]);
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn emit(&mut self, bytes: Vec<u8>) -> io::Result<Chunk> {
        let content =
            String::from_utf8(bytes).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        let chunk = Chunk {
            index: self.next_index,
            content,
        };
        self.next_index += 1;
        Ok(chunk)
    }
}

impl<R: Read> Iterator for Chunks<R> {
    type Item = io::Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(at) = self.split_point() {
                let rest = self.pending.split_off(at);
                let bytes = mem::replace(&mut self.pending, rest);
                self.scanned = 0;
                self.seen = 0;
                return Some(self.emit(bytes));
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => {
                    self.done = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    let bytes = mem::take(&mut self.pending);
                    return Some(self.emit(bytes));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[inline]
fn is_char_start(byte: u8) -> bool {
    (byte & 0xC0) != 0x80
}
