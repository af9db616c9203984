// src/printer/printers.rs

//! Specialized printer struct [`PrinterLine`] for printing lines returned by
//! a [`LineReader`].
//!
//! Byte-oriented printing (no `char`s). Line bytes are written as-is.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader

use crate::common::{Count, NLu8};
use crate::debug::printers::de_err;

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing the prepended line length or line number.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_PREPEND: Color = Color::Green;

/// [`Color`] for printing some user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// Single-quote byte surrounding printed lines.
const QUOTE: &[u8] = b"'";

/// Newline byte slice for terminating printed lines.
const NL: &[u8] = &[NLu8];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterLine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Prints lines with a colored prefix to some [`WriteColor`].
///
/// Two formats:
/// - [`print_line_len`]: `LEN: 'LINE'`
/// - [`print_line_number`]: `NUM: LINE`
///
/// In both, the prefix number is right-aligned to width 2.
///
/// [`WriteColor`]: https://docs.rs/termcolor/1.1.3/termcolor/trait.WriteColor.html
/// [`print_line_len`]: PrinterLine::print_line_len
/// [`print_line_number`]: PrinterLine::print_line_number
pub struct PrinterLine<W: WriteColor> {
    out: W,
    color_spec_prepend: ColorSpec,
    /// `Count` of lines printed.
    printed: Count,
}

impl PrinterLine<StandardStream> {
    /// Create a `PrinterLine` printing to STDOUT.
    pub fn stdout(color_choice: ColorChoice) -> PrinterLine<StandardStream> {
        PrinterLine::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> PrinterLine<W> {
    pub fn new(out: W) -> PrinterLine<W> {
        let mut color_spec_prepend = ColorSpec::new();
        color_spec_prepend.set_fg(Some(COLOR_PREPEND));

        PrinterLine {
            out,
            color_spec_prepend,
            printed: 0,
        }
    }

    /// `Count` of lines printed.
    pub const fn count_printed(&self) -> Count {
        self.printed
    }

    /// Write `prepend` in color then reset the color.
    fn write_prepend(
        &mut self,
        prepend: &[u8],
    ) -> Result<()> {
        if let Err(err) = self.out.set_color(&self.color_spec_prepend) {
            de_err!("set_color({:?}) returned error {}", self.color_spec_prepend, err);
            return Err(err);
        }
        self.out.write_all(prepend)?;
        self.out.reset()
    }

    /// Print `LEN: 'LINE'`.
    pub fn print_line_len(
        &mut self,
        line: &[u8],
    ) -> Result<()> {
        let prepend = format!("{:2}:", line.len());
        self.write_prepend(prepend.as_bytes())?;
        self.out.write_all(b" ")?;
        self.out.write_all(QUOTE)?;
        self.out.write_all(line)?;
        self.out.write_all(QUOTE)?;
        self.out.write_all(NL)?;
        self.printed += 1;

        Ok(())
    }

    /// Print `NUM: LINE`.
    pub fn print_line_number(
        &mut self,
        number: Count,
        line: &[u8],
    ) -> Result<()> {
        let prepend = format!("{:2}:", number);
        self.write_prepend(prepend.as_bytes())?;
        self.out.write_all(b" ")?;
        self.out.write_all(line)?;
        self.out.write_all(NL)?;
        self.printed += 1;

        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()
    }

    /// Consume the `PrinterLine` and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
