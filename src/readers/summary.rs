// src/readers/summary.rs

//! Implements `SummaryLineReader` statistics tracking struct.

use crate::common::Count;

use std::fmt;

/// Accumulated statistics about the processing activity of a
/// [`LineReader`] and its underlying [`LineBuffer`].
///
/// For CLI option `--summary`.
///
/// [`LineReader`]: crate::readers::linereader::LineReader
/// [`LineBuffer`]: crate::readers::linebuffer::LineBuffer
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SummaryLineReader {
    /// `Count` of lines returned.
    pub linereader_lines: Count,
    /// `Count` of line bytes returned, excluding newlines.
    pub linereader_bytes: Count,
    /// `Count` of bytes read from the source.
    pub linereader_bytes_read: Count,
    /// `Count` of bytes examined while searching for newlines.
    pub linereader_bytes_scanned: Count,
    /// `Count` of reads that returned bytes.
    pub linereader_fills: Count,
    /// `Count` of shifts that moved bytes.
    pub linereader_shifts: Count,
    /// `Count` of buffer growths.
    pub linereader_grows: Count,
    /// "high watermark" of buffer capacity.
    pub linereader_capacity_highest: usize,
}

impl fmt::Display for SummaryLineReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        writeln!(f, "lines          : {}", self.linereader_lines)?;
        writeln!(f, "line bytes     : {}", self.linereader_bytes)?;
        writeln!(f, "bytes read     : {}", self.linereader_bytes_read)?;
        writeln!(f, "bytes scanned  : {}", self.linereader_bytes_scanned)?;
        writeln!(f, "reads          : {}", self.linereader_fills)?;
        writeln!(f, "shifts         : {}", self.linereader_shifts)?;
        writeln!(f, "grows          : {}", self.linereader_grows)?;
        write!(f, "capacity (high): {} (0x{:X})", self.linereader_capacity_highest, self.linereader_capacity_highest)
    }
}
