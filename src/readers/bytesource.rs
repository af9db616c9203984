// src/readers/bytesource.rs

//! Implements [`ByteSource`], the endpoint of bytes read by a
//! [`LineReader`].
//!
//! [`LineReader`]: crate::readers::linereader::LineReader

use crate::common::{FPath, File, FileOpenOptions, Path};

use std::fmt;
use std::io::{Read, Result, Stdin};

#[allow(unused_imports)]
use ::si_trace_print::{def1n, def1o, def1x, defn, defx, defñ};

/// An open byte-producing endpoint for a [`LineReader`].
///
/// A read returning zero bytes signals permanent end-of-source.
///
/// Ownership of the underlying handle matters for [`close`]: a file opened
/// by the `ByteSource` is closed when the `ByteSource` is closed or dropped,
/// the process's inherited standard input is never closed.
///
/// [`LineReader`]: crate::readers::linereader::LineReader
/// [`close`]: ByteSource::close
pub enum ByteSource {
    /// A file opened by the reader, owned by the reader.
    File {
        path: FPath,
        file: File,
    },
    /// The process's inherited standard input. Not owned; never closed.
    Stdin(Stdin),
    /// Some other caller-supplied reader, e.g. an in-memory
    /// [`Cursor`]. Owned; dropped on close.
    ///
    /// [`Cursor`]: std::io::Cursor
    Reader(Box<dyn Read + Send>),
    /// Nothing; every read returns zero bytes.
    Closed,
}

impl fmt::Debug for ByteSource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            ByteSource::File { path, file } => f
                .debug_struct("ByteSource::File")
                .field("path", path)
                .field("file", file)
                .finish(),
            ByteSource::Stdin(_) => write!(f, "ByteSource::Stdin"),
            ByteSource::Reader(_) => write!(f, "ByteSource::Reader"),
            ByteSource::Closed => write!(f, "ByteSource::Closed"),
        }
    }
}

impl ByteSource {
    /// Open the file at `path` for reading. If `path` is `None` then use
    /// the inherited standard input.
    pub fn open(path: Option<&FPath>) -> Result<ByteSource> {
        def1n!("({:?})", path);
        let path = match path {
            Some(path) => path,
            None => {
                def1x!("return ByteSource::Stdin");
                return Ok(ByteSource::Stdin(std::io::stdin()));
            }
        };
        let mut open_options = FileOpenOptions::new();
        def1o!("open_options.read(true).open({:?})", path);
        let file: File = match open_options
            .read(true)
            .open(Path::new(path))
        {
            Ok(val) => val,
            Err(err) => {
                def1x!("return {:?}", err);
                return Err(err);
            }
        };
        def1x!("return ByteSource::File({:?})", path);

        Ok(ByteSource::File {
            path: path.clone(),
            file,
        })
    }

    /// Wrap some caller-supplied reader.
    pub fn from_reader(reader: Box<dyn Read + Send>) -> ByteSource {
        defñ!();

        ByteSource::Reader(reader)
    }

    /// Path of the opened file, if this is a [`ByteSource::File`].
    pub const fn path(&self) -> Option<&FPath> {
        match self {
            ByteSource::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Is this the inherited standard input?
    pub const fn is_stdin(&self) -> bool {
        matches!(self, ByteSource::Stdin(_))
    }

    /// Does closing this `ByteSource` release an underlying handle?
    pub const fn is_owned(&self) -> bool {
        matches!(self, ByteSource::File { .. } | ByteSource::Reader(_))
    }

    pub const fn is_closed(&self) -> bool {
        matches!(self, ByteSource::Closed)
    }

    /// Release the source. An opened file is closed, a caller-supplied
    /// reader is dropped, the inherited standard input is only forgotten.
    ///
    /// Calling `close` on a closed `ByteSource` does nothing.
    pub fn close(&mut self) {
        defn!("{:?}", self);
        // dropping a `std::fs::File` closes the file descriptor,
        // dropping a `std::io::Stdin` handle does not close file descriptor 0
        let _old = std::mem::replace(self, ByteSource::Closed);
        defx!();
    }
}

impl Read for ByteSource {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> Result<usize> {
        match self {
            ByteSource::File { file, .. } => file.read(buf),
            ByteSource::Stdin(stdin) => stdin.read(buf),
            ByteSource::Reader(reader) => reader.read(buf),
            ByteSource::Closed => Ok(0),
        }
    }
}
