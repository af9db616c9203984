// src/tests/common.rs

//! Common data and readers shared by tests.

#![allow(non_upper_case_globals)]

use crate::common::FPath;
use crate::debug::helpers::{create_temp_file, create_temp_file_bytes, ntf_fpath, NamedTempFile};

use std::io::{Error, ErrorKind, Read, Result};

use ::lazy_static::lazy_static;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// files
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const BYTES_EMPTY: &[u8] = b"";
pub const BYTES_AB_CD: &[u8] = b"ab\ncd\n";
pub const BYTES_AB_CD_NONL: &[u8] = b"ab\ncd";
pub const BYTES_ABCDEFGH_NL: &[u8] = b"abcdefgh\n";
pub const BYTES_STRINGS: &[u8] = b"\
First String
Second String
Third String
Fourth String
Fifth String
Sixth String
Seventh String
Eighth String
Ninth String
Tenth String
";

lazy_static! {
    pub static ref NTF_EMPTY: NamedTempFile = create_temp_file("");
    pub static ref NTF_EMPTY_FPATH: FPath = ntf_fpath(&NTF_EMPTY);
    pub static ref NTF_AB_CD: NamedTempFile = create_temp_file_bytes(BYTES_AB_CD);
    pub static ref NTF_AB_CD_FPATH: FPath = ntf_fpath(&NTF_AB_CD);
    pub static ref NTF_AB_CD_NONL: NamedTempFile = create_temp_file_bytes(BYTES_AB_CD_NONL);
    pub static ref NTF_AB_CD_NONL_FPATH: FPath = ntf_fpath(&NTF_AB_CD_NONL);
    pub static ref NTF_ABCDEFGH_NL: NamedTempFile = create_temp_file_bytes(BYTES_ABCDEFGH_NL);
    pub static ref NTF_ABCDEFGH_NL_FPATH: FPath = ntf_fpath(&NTF_ABCDEFGH_NL);
    pub static ref NTF_STRINGS: NamedTempFile = create_temp_file_bytes(BYTES_STRINGS);
    pub static ref NTF_STRINGS_FPATH: FPath = ntf_fpath(&NTF_STRINGS);
}

/// A path that does not exist.
pub const FPATH_NOT_EXIST: &str = "/THIS/PATH/DOES/NOT/EXIST/blr-test.log";

/// Create `count` lines of varying lengths, each line `i` is
/// `(i * 7) % 53` bytes long, followed by a newline.
pub fn lines_varied(count: usize) -> Vec<u8> {
    let mut data: Vec<u8> = Vec::new();
    for i in 0..count {
        let len = (i * 7) % 53;
        for j in 0..len {
            data.push(b'a' + ((i + j) % 26) as u8);
        }
        data.push(b'\n');
    }

    data
}

/// Split `data` the way a `LineReader` should; by newline, with a final
/// unterminated line if any.
pub fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = data
        .split(|b| *b == b'\n')
        .map(|s| s.to_vec())
        .collect();
    // `split` yields an empty trailing element after a final newline,
    // or for empty `data`
    if let Some(last) = lines.last() {
        if last.is_empty() {
            lines.pop();
        }
    }

    lines
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// test readers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Returns at most `chunk` bytes per `read`.
pub struct TrickleReader {
    data: Vec<u8>,
    at: usize,
    chunk: usize,
}

impl TrickleReader {
    pub fn new(data: &[u8], chunk: usize) -> TrickleReader {
        assert_ne!(chunk, 0, "chunk must not be zero");
        TrickleReader {
            data: data.to_vec(),
            at: 0,
            chunk,
        }
    }
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remain = self.data.len() - self.at;
        let n = std::cmp::min(std::cmp::min(remain, self.chunk), buf.len());
        buf[..n].copy_from_slice(&self.data[self.at..self.at + n]);
        self.at += n;

        Ok(n)
    }
}

/// Every other `read` fails with `ErrorKind::Interrupted`.
pub struct InterruptingReader {
    inner: TrickleReader,
    interrupt: bool,
}

impl InterruptingReader {
    pub fn new(data: &[u8], chunk: usize) -> InterruptingReader {
        InterruptingReader {
            inner: TrickleReader::new(data, chunk),
            interrupt: true,
        }
    }
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.interrupt = !self.interrupt;
        if !self.interrupt {
            return Err(Error::new(ErrorKind::Interrupted, "interrupted"));
        }

        self.inner.read(buf)
    }
}

/// Message of the error returned by a [`FailingReader`].
pub const ERR_FAILING_READER: &str = "FailingReader failed";

/// Returns all of `data` in one `read`, then fails every `read` after.
pub struct FailingReader {
    data: Vec<u8>,
    done: bool,
}

impl FailingReader {
    pub fn new(data: &[u8]) -> FailingReader {
        FailingReader {
            data: data.to_vec(),
            done: data.is_empty(),
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.done {
            return Err(Error::new(ErrorKind::Other, ERR_FAILING_READER));
        }
        let n = std::cmp::min(self.data.len(), buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data.drain(..n);
        if self.data.is_empty() {
            self.done = true;
        }

        Ok(n)
    }
}
