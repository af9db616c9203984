// src/readers/mod.rs

//! "Readers" for _blrlib_.
//!
//! ## Overview of readers
//!
//! * A [`LineReader`] drives a [`LineBuffer`] to derive lines.
//! * A `LineBuffer` is filled from a [`ByteSource`].
//!
//! <br/>
//!
//! * A `ByteSource` and a `LineBuffer` only handle `u8` bytes.
//! * A `LineReader` only knows one delimiter, the newline byte `'\n'`.
//!   It does not interpret text encodings.
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`ByteSource`]: crate::readers::bytesource::ByteSource
//! [`LineBuffer`]: crate::readers::linebuffer::LineBuffer
//! [`LineReader`]: crate::readers::linereader::LineReader

pub mod bytesource;
pub mod linebuffer;
pub mod linereader;
pub mod summary;
