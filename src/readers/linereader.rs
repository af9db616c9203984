// src/readers/linereader.rs

//! Implements a [`LineReader`],
//! the driver of deriving lines from a [`ByteSource`] using a
//! [`LineBuffer`].
//!
//! [`ByteSource`]: crate::readers::bytesource::ByteSource
//! [`LineBuffer`]: crate::readers::linebuffer::LineBuffer

use crate::common::{Bytes, Count, FPath, ResultS3};
#[allow(unused_imports)]
use crate::debug::printers::{buffer_to_String_noraw, de_wrn};
use crate::readers::bytesource::ByteSource;
use crate::readers::linebuffer::{LineBuffer, ResultFill, ShiftResult};
use crate::readers::summary::SummaryLineReader;

use std::fmt;
use std::io::{Error, ErrorKind, Read, Result};

#[allow(unused_imports)]
use ::more_asserts::{debug_assert_ge, debug_assert_le};
#[allow(unused_imports)]
use ::si_trace_print::{def1n, def1x, defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`LineReader::read_next`] results.
///
/// `Found` holds a view into the `LineReader` buffer of the line bytes
/// without the trailing newline.
pub type ResultReadLine<'a> = ResultS3<&'a [u8], Error>;

/// [`LineReader::read_next_owned`] results.
pub type ResultReadLineOwned = ResultS3<Bytes, Error>;

/// Message of the error returned by `read_next` after a prior error.
pub const ERR_READER_FAILED: &str = "reader failed; it must be closed";

/// Message of the error returned by `grow` after `close`.
pub const ERR_READER_CLOSED: &str = "reader is closed";

/// Lifecycle of a [`LineReader`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReaderState {
    /// Reading may continue.
    Open,
    /// A prior `read_next` returned an error. No further reads.
    Failed,
    /// Buffer released and source closed.
    Closed,
}

/// A `LineReader` incrementally extracts newline-terminated lines from a
/// [`ByteSource`] without reading the entire source first.
///
/// Lines may be of any length, the buffer doubles in capacity whenever one
/// line does not fit.
///
/// A line returned by [`read_next`] is a view into the internal buffer. The
/// view is valid until the next call to `read_next`, `grow`, or `close`; the
/// borrow checker enforces this. A caller that must retain a line should copy
/// it, e.g. use [`read_next_owned`].
///
/// A `LineReader` never examines a byte twice while searching for newlines.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`ByteSource`]: crate::readers::bytesource::ByteSource
/// [`read_next`]: LineReader::read_next
/// [`read_next_owned`]: LineReader::read_next_owned
/// [`Read`]: std::io::Read
pub struct LineReader {
    source: ByteSource,
    buffer: LineBuffer,
    state: ReaderState,
    /// The source returned zero bytes; it will not be read again.
    source_exhausted: bool,
    /// `Count` of lines returned.
    lines_processed: Count,
    /// `Count` of line bytes returned, excluding newlines.
    bytes_processed: Count,
    /// `Count` of bytes examined while searching for a newline.
    bytes_scanned: Count,
}

impl fmt::Debug for LineReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("source", &self.source)
            .field("buffer", &self.buffer)
            .field("state", &self.state)
            .field("source_exhausted", &self.source_exhausted)
            .field("lines_processed", &self.lines_processed)
            .finish()
    }
}

/// Implement the LineReader.
impl LineReader {
    /// Default initial buffer capacity in bytes.
    pub const CAPACITY_DEFAULT: usize = 0xFFFF;

    /// Minimum initial buffer capacity in bytes (inclusive).
    pub const CAPACITY_MIN: usize = 1;

    /// Create a new `LineReader`.
    ///
    /// Opens the file at `path`, or uses the inherited standard input if
    /// `path` is `None`. Allocates a buffer of `capacity` bytes and reads
    /// once from the source.
    ///
    /// If allocating or the first read fails then the opened file is closed
    /// before the error is returned.
    pub fn new(
        capacity: usize,
        path: Option<&FPath>,
    ) -> Result<LineReader> {
        def1n!("({}, {:?})", capacity, path);
        if capacity < LineReader::CAPACITY_MIN {
            let err = Error::new(
                ErrorKind::InvalidInput,
                format!("capacity {} is less than minimum {}", capacity, LineReader::CAPACITY_MIN),
            );
            def1x!("return {:?}", err);
            return Err(err);
        }
        let source = ByteSource::open(path)?;
        let linereader = LineReader::with_source(capacity, source);
        def1x!("return {:?}", linereader);

        linereader
    }

    /// Create a new `LineReader` reading from some caller-supplied reader.
    ///
    /// The `reader` is owned by the `LineReader` and dropped on `close`.
    pub fn from_reader(
        capacity: usize,
        reader: Box<dyn Read + Send>,
    ) -> Result<LineReader> {
        defñ!("({})", capacity);

        LineReader::with_source(capacity, ByteSource::from_reader(reader))
    }

    fn with_source(
        capacity: usize,
        mut source: ByteSource,
    ) -> Result<LineReader> {
        defn!("({}, {:?})", capacity, source);
        // on any error return the `source` is dropped, an opened file is closed
        let mut buffer = LineBuffer::new(capacity)?;
        let source_exhausted: bool = match buffer.fill(&mut source) {
            ResultFill::Found(_n) => {
                defo!("initial fill read {} bytes", _n);
                false
            }
            ResultFill::Done => {
                defo!("initial fill; source is empty");
                true
            }
            ResultFill::Err(err) => {
                defx!("initial fill return {:?}", err);
                return Err(err);
            }
        };
        defx!();

        Ok(LineReader {
            source,
            buffer,
            state: ReaderState::Open,
            source_exhausted,
            lines_processed: 0,
            bytes_processed: 0,
            bytes_scanned: 0,
        })
    }

    /// Path of the opened file. `None` for standard input, other readers, or
    /// after `close`.
    pub const fn path(&self) -> Option<&FPath> {
        self.source.path()
    }

    /// Current buffer capacity in bytes. Zero after `close`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Count of bytes read from the source but not yet returned.
    #[inline(always)]
    pub const fn len_unread(&self) -> usize {
        self.buffer.len_unread()
    }

    /// Count of free bytes in the buffer available for the next read.
    #[inline(always)]
    pub fn len_free(&self) -> usize {
        self.buffer.len_free()
    }

    #[inline(always)]
    pub const fn state(&self) -> ReaderState {
        self.state
    }

    #[inline(always)]
    pub const fn is_closed(&self) -> bool {
        matches!(self.state, ReaderState::Closed)
    }

    /// The source returned zero bytes and will not be read again.
    #[inline(always)]
    pub const fn is_exhausted(&self) -> bool {
        self.source_exhausted
    }

    /// `Count` of lines returned by `read_next`.
    #[inline(always)]
    pub const fn count_lines_processed(&self) -> Count {
        self.lines_processed
    }

    /// `Count` of bytes read from the source.
    #[inline(always)]
    pub const fn count_bytes_read(&self) -> Count {
        self.buffer.count_bytes_read
    }

    /// `Count` of bytes examined while searching for newlines.
    ///
    /// Once `read_next` has returned `Done`, this equals
    /// [`count_bytes_read`](LineReader::count_bytes_read).
    #[inline(always)]
    pub const fn count_bytes_scanned(&self) -> Count {
        self.bytes_scanned
    }

    /// `Count` of times the buffer grew.
    #[inline(always)]
    pub const fn count_grows(&self) -> Count {
        self.buffer.count_grows
    }

    /// Grow the buffer to `new_capacity` bytes, preserving unread bytes.
    ///
    /// `new_capacity` must be larger than the current capacity, else returns
    /// [`ErrorKind::InvalidInput`] and nothing changes.
    pub fn grow(
        &mut self,
        new_capacity: usize,
    ) -> Result<()> {
        if self.is_closed() {
            defñ!("({}) return Err; {}", new_capacity, ERR_READER_CLOSED);
            return Err(Error::new(ErrorKind::Other, ERR_READER_CLOSED));
        }

        self.buffer.grow(new_capacity)
    }

    /// Mark this reader as failed and pass back the `err`.
    fn fail<'a>(
        &mut self,
        err: Error,
    ) -> ResultReadLine<'a> {
        de_wrn!("LineReader failed: {}", err);
        self.state = ReaderState::Failed;

        ResultReadLine::Err(err)
    }

    /// Double the buffer capacity.
    fn grow_double(&mut self) -> Result<()> {
        let capacity: usize = self.buffer.capacity();
        let new_capacity: usize = match capacity.checked_mul(2) {
            Some(val) => val,
            None => {
                return Err(Error::new(
                    ErrorKind::OutOfMemory,
                    format!("cannot double capacity {}", capacity),
                ));
            }
        };
        defo!("grow {} → {}", capacity, new_capacity);

        self.buffer.grow(new_capacity)
    }

    /// Return the next line.
    ///
    /// Returns `Found(line)` with the bytes before the next newline, or all
    /// remaining bytes if the source ends without a trailing newline.
    /// Returns `Done` when there are no more lines; `Done` is not an error.
    ///
    /// The returned line is valid until the next mutating call on this
    /// `LineReader`.
    ///
    /// Scanning resumes where it last left off; bytes already searched for a
    /// newline are not searched again, even after the buffer is shifted or
    /// grown.
    ///
    /// After an `Err` the `LineReader` is failed; no partial line is returned
    /// and later calls return `Err` until it is closed.
    pub fn read_next(&mut self) -> ResultReadLine<'_> {
        defn!("{:?}", self.state);
        match self.state {
            ReaderState::Open => {}
            ReaderState::Failed => {
                defx!("return Err; {}", ERR_READER_FAILED);
                return ResultReadLine::Err(Error::new(ErrorKind::Other, ERR_READER_FAILED));
            }
            ReaderState::Closed => {
                defx!("return Done; reader is closed");
                return ResultReadLine::Done;
            }
        }

        // count of unread bytes, starting from `read_offset`, that are known
        // to not contain a newline
        let mut scanned: usize = 0;
        loop {
            let scan_at = self.buffer.read_offset() + scanned;
            let write_offset = self.buffer.write_offset();
            debug_assert_le!(scan_at, write_offset);
            match self.buffer.find_delimiter(scan_at) {
                Some(at) => {
                    self.bytes_scanned += (at + 1 - scan_at) as Count;
                    self.bytes_processed += (at - self.buffer.read_offset()) as Count;
                    self.lines_processed += 1;
                    let line: &[u8] = self.buffer.take_record(at, true);
                    defx!("return Found(len {}) {:?}", line.len(), buffer_to_String_noraw(line));
                    return ResultReadLine::Found(line);
                }
                None => {
                    self.bytes_scanned += (write_offset - scan_at) as Count;
                    scanned = self.buffer.len_unread();
                }
            }

            if self.source_exhausted {
                if self.buffer.len_unread() == 0 {
                    defx!("return Done");
                    return ResultReadLine::Done;
                }
                // final line without a trailing newline
                self.bytes_processed += self.buffer.len_unread() as Count;
                self.lines_processed += 1;
                let line: &[u8] = self.buffer.take_record(write_offset, false);
                defx!("return Found(len {}) (final) {:?}", line.len(), buffer_to_String_noraw(line));
                return ResultReadLine::Found(line);
            }

            // make room for more bytes
            match self.buffer.shift() {
                ShiftResult::Moved(_moved) => {
                    defo!("shift moved {}", _moved);
                }
                ShiftResult::Full => {
                    // one line is longer than the entire buffer
                    if let Err(err) = self.grow_double() {
                        defx!("grow failed, return Err({:?})", err);
                        return self.fail(err);
                    }
                }
            }
            debug_assert_ge!(self.buffer.len_free(), 1, "no free space after shift or grow");

            match self.buffer.fill(&mut self.source) {
                ResultFill::Found(_n) => {
                    defo!("fill read {} bytes; resume scan at {}", _n, self.buffer.read_offset() + scanned);
                }
                ResultFill::Done => {
                    defo!("fill; source exhausted");
                    self.source_exhausted = true;
                }
                ResultFill::Err(err) => {
                    defx!("fill failed, return Err({:?})", err);
                    return self.fail(err);
                }
            }
        }
    }

    /// Return the next line as an owned copy.
    pub fn read_next_owned(&mut self) -> ResultReadLineOwned {
        self.read_next().map(|line| line.to_vec())
    }

    /// Release the buffer and close the source if the `LineReader` opened it.
    /// The inherited standard input is never closed.
    ///
    /// Afterwards `read_next` returns `Done`. Statistics are kept for
    /// [`summary`](LineReader::summary).
    ///
    /// Calling `close` again does nothing.
    pub fn close(&mut self) {
        defn!("{:?}", self.state);
        if self.is_closed() {
            defx!("already closed");
            return;
        }
        self.buffer.release();
        self.source.close();
        self.source_exhausted = true;
        self.state = ReaderState::Closed;
        defx!();
    }

    /// Return an up-to-date [`SummaryLineReader`] instance for this
    /// `LineReader`.
    ///
    /// [`SummaryLineReader`]: crate::readers::summary::SummaryLineReader
    pub fn summary(&self) -> SummaryLineReader {
        SummaryLineReader {
            linereader_lines: self.lines_processed,
            linereader_bytes: self.bytes_processed,
            linereader_bytes_read: self.buffer.count_bytes_read,
            linereader_bytes_scanned: self.bytes_scanned,
            linereader_fills: self.buffer.count_fills,
            linereader_shifts: self.buffer.count_shifts,
            linereader_grows: self.buffer.count_grows,
            linereader_capacity_highest: self.buffer.capacity_highest,
        }
    }
}

impl Drop for LineReader {
    fn drop(&mut self) {
        defñ!();
        self.close();
    }
}
