// src/readers/linebuffer.rs

//! Implements a [`LineBuffer`], the growable byte storage of a
//! [`LineReader`].
//!
//! A `LineBuffer` is a contiguous region of `capacity` bytes with two
//! cursors, `read_offset` and `write_offset`.
//!
//! ```text
//!  0            read_offset         write_offset           capacity
//!  ├─ returned ─┼───── unread ──────┼──────── free ─────────┤
//! ```
//!
//! The invariant `0 ≤ read_offset ≤ write_offset ≤ capacity` always holds.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader

use crate::common::{Count, NLu8, ResultS3};

use std::fmt;
use std::io::{Error, ErrorKind, Read, Result};

use ::memchr::memchr;
#[allow(unused_imports)]
use ::more_asserts::{debug_assert_ge, debug_assert_le};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Byte offset (Index) _into_ a [`LineBuffer`]. Zero based.
pub type BufIndex = usize;

/// A typed [`ResultS3`] for function [`LineBuffer::fill`].
///
/// `Found(n)` for `n` bytes read, `Done` when the source is exhausted.
///
/// [`ResultS3`]: crate::common::ResultS3
pub type ResultFill = ResultS3<usize, Error>;

/// Returned by [`LineBuffer::shift`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShiftResult {
    /// The unread bytes span the entire capacity, shifting cannot reclaim
    /// any space. The buffer must grow.
    Full,
    /// The unread bytes now begin at offset 0. Holds the count of unread
    /// bytes, which may be zero.
    Moved(usize),
}

/// Message of the error returned when [`LineBuffer::fill`] is called without
/// free space.
pub const ERR_NO_BUFFER_SPACE: &str = "no buffer space";

/// Allocate a zeroed region of `capacity` bytes. An allocation failure is
/// returned as [`ErrorKind::OutOfMemory`] instead of aborting the process.
fn allocate(capacity: usize) -> Result<Vec<u8>> {
    let mut region: Vec<u8> = Vec::new();
    if let Err(err) = region.try_reserve_exact(capacity) {
        defo!("try_reserve_exact({}) failed {}", capacity, err);
        return Err(Error::new(ErrorKind::OutOfMemory, err));
    }
    region.resize(capacity, 0);

    Ok(region)
}

/// A growable byte buffer with explicit read and write cursors.
///
/// A `LineBuffer` does not know about lines beyond
/// [`find_delimiter`](LineBuffer::find_delimiter), the
/// [`LineReader`] drives it.
///
/// [`LineReader`]: crate::readers::linereader::LineReader
pub struct LineBuffer {
    /// The region. `region.len()` is the capacity.
    region: Vec<u8>,
    /// Start of unread bytes.
    read_offset: BufIndex,
    /// End of unread bytes, start of free space.
    write_offset: BufIndex,
    /// `Count` of calls to `fill` that read bytes.
    pub(crate) count_fills: Count,
    /// `Count` of bytes read from the source.
    pub(crate) count_bytes_read: Count,
    /// `Count` of calls to `shift` that moved bytes.
    pub(crate) count_shifts: Count,
    /// `Count` of successful calls to `grow`.
    pub(crate) count_grows: Count,
    /// "high watermark" of capacity
    pub(crate) capacity_highest: usize,
}

impl fmt::Debug for LineBuffer {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &self.capacity())
            .field("read_offset", &self.read_offset)
            .field("write_offset", &self.write_offset)
            .field("fills", &self.count_fills)
            .field("shifts", &self.count_shifts)
            .field("grows", &self.count_grows)
            .finish()
    }
}

impl LineBuffer {
    /// Create a new `LineBuffer` of `capacity` bytes.
    ///
    /// `capacity` must be greater than zero.
    pub fn new(capacity: usize) -> Result<LineBuffer> {
        defn!("({})", capacity);
        if capacity == 0 {
            let err = Error::new(ErrorKind::InvalidInput, "capacity must be greater than zero");
            defx!("return {:?}", err);
            return Err(err);
        }
        let region = allocate(capacity)?;
        defx!("return LineBuffer capacity {}", capacity);

        Ok(LineBuffer {
            region,
            read_offset: 0,
            write_offset: 0,
            count_fills: 0,
            count_bytes_read: 0,
            count_shifts: 0,
            count_grows: 0,
            capacity_highest: capacity,
        })
    }

    /// Total size of the region in bytes.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    #[inline(always)]
    pub const fn read_offset(&self) -> BufIndex {
        self.read_offset
    }

    #[inline(always)]
    pub const fn write_offset(&self) -> BufIndex {
        self.write_offset
    }

    /// Count of bytes fetched from the source but not yet returned.
    #[inline(always)]
    pub const fn len_unread(&self) -> usize {
        self.write_offset - self.read_offset
    }

    /// Count of bytes available to `fill`.
    #[inline(always)]
    pub fn len_free(&self) -> usize {
        self.capacity() - self.write_offset
    }

    /// The unread bytes.
    pub fn unread(&self) -> &[u8] {
        &self.region[self.read_offset..self.write_offset]
    }

    /// Assert the cursor invariant in debug builds.
    #[inline(always)]
    fn debug_assert_cursors(&self) {
        debug_assert_le!(self.read_offset, self.write_offset, "read_offset past write_offset");
        debug_assert_le!(self.write_offset, self.capacity(), "write_offset past capacity");
    }

    /// Grow to `new_capacity` bytes.
    ///
    /// Allocates a new region, copies the unread bytes to the start of the new
    /// region, then releases the old region. Afterwards `read_offset` is `0`.
    ///
    /// `new_capacity` must be larger than the current capacity, else returns
    /// [`ErrorKind::InvalidInput`] and nothing changes.
    pub fn grow(
        &mut self,
        new_capacity: usize,
    ) -> Result<()> {
        defn!("({}) capacity {}", new_capacity, self.capacity());
        if new_capacity <= self.capacity() {
            let err = Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "new capacity {} must be larger than current capacity {}",
                    new_capacity,
                    self.capacity()
                ),
            );
            defx!("return {:?}", err);
            return Err(err);
        }
        let mut region = allocate(new_capacity)?;
        let len = self.len_unread();
        region[..len].copy_from_slice(&self.region[self.read_offset..self.write_offset]);
        // old region is released here
        self.region = region;
        self.read_offset = 0;
        self.write_offset = len;
        self.count_grows += 1;
        if new_capacity > self.capacity_highest {
            self.capacity_highest = new_capacity;
        }
        self.debug_assert_cursors();
        defx!("capacity {}, unread {}", self.capacity(), len);

        Ok(())
    }

    /// Read from `source` into the free space.
    ///
    /// Returns `Found(n)` for `n` bytes read, `Done` if the source is
    /// exhausted (a read returned zero bytes).
    ///
    /// There must be free space; if there is none then returns an error
    /// [`ErrorKind::Other`] with message [`ERR_NO_BUFFER_SPACE`]. Callers
    /// must `shift` or `grow` first.
    ///
    /// A read interrupted by a signal is retried.
    pub fn fill<R>(
        &mut self,
        source: &mut R,
    ) -> ResultFill
    where
        R: Read + ?Sized,
    {
        defn!("read_offset {}, write_offset {}, capacity {}", self.read_offset, self.write_offset, self.capacity());
        if self.len_free() == 0 {
            defx!("return Err; {}", ERR_NO_BUFFER_SPACE);
            return ResultFill::Err(Error::new(ErrorKind::Other, ERR_NO_BUFFER_SPACE));
        }
        loop {
            match source.read(&mut self.region[self.write_offset..]) {
                Ok(0) => {
                    defx!("return Done; source exhausted");
                    return ResultFill::Done;
                }
                Ok(n) => {
                    debug_assert_le!(n, self.len_free(), "read more bytes than the free space");
                    self.write_offset += n;
                    self.count_fills += 1;
                    self.count_bytes_read += n as Count;
                    self.debug_assert_cursors();
                    defx!("return Found({}); write_offset {}", n, self.write_offset);
                    return ResultFill::Found(n);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {
                    defo!("read interrupted, retry");
                    continue;
                }
                Err(err) => {
                    defx!("return Err({:?})", err);
                    return ResultFill::Err(err);
                }
            }
        }
    }

    /// Move the unread bytes to the start of the region to reclaim the space
    /// used by already returned bytes.
    ///
    /// Returns [`ShiftResult::Full`] if the unread bytes span the entire
    /// capacity, the caller must `grow`.
    pub fn shift(&mut self) -> ShiftResult {
        let len = self.len_unread();
        if len >= self.capacity() {
            defñ!("return Full; unread {} capacity {}", len, self.capacity());
            return ShiftResult::Full;
        }
        if len == 0 {
            self.read_offset = 0;
            self.write_offset = 0;
            defñ!("return Moved(0); reset cursors");
            return ShiftResult::Moved(0);
        }
        if self.read_offset == 0 {
            defñ!("return Moved({}); already at start", len);
            return ShiftResult::Moved(len);
        }
        // regions may overlap
        self.region.copy_within(self.read_offset..self.write_offset, 0);
        self.read_offset = 0;
        self.write_offset = len;
        self.count_shifts += 1;
        self.debug_assert_cursors();
        defñ!("return Moved({})", len);

        ShiftResult::Moved(len)
    }

    /// Search for the delimiter within `[from, write_offset)`.
    /// Returns the index of the delimiter.
    ///
    /// `from` must be within `[read_offset, write_offset]`.
    pub fn find_delimiter(
        &self,
        from: BufIndex,
    ) -> Option<BufIndex> {
        debug_assert_ge!(from, self.read_offset, "from is before read_offset");
        debug_assert_le!(from, self.write_offset, "from is past write_offset");

        memchr(NLu8, &self.region[from..self.write_offset]).map(|at| from + at)
    }

    /// Return the record `[read_offset, end)` and advance `read_offset` past
    /// it. If `delimited` then also advance past the delimiter at `end`.
    ///
    /// The returned slice is valid until the next mutating call.
    pub fn take_record(
        &mut self,
        end: BufIndex,
        delimited: bool,
    ) -> &[u8] {
        let beg: BufIndex = self.read_offset;
        debug_assert_le!(beg, end, "end is before read_offset");
        debug_assert_le!(end, self.write_offset, "end is past write_offset");
        self.read_offset = match delimited {
            true => end + 1,
            false => end,
        };
        self.debug_assert_cursors();

        &self.region[beg..end]
    }

    /// Release the region. Afterwards the capacity is zero. Calling `release`
    /// again does nothing.
    pub fn release(&mut self) {
        defñ!("capacity {}", self.capacity());
        self.region = Vec::new();
        self.read_offset = 0;
        self.write_offset = 0;
    }
}
