// src/printer/mod.rs

//! The `printer` module is for printing user-facing lines read by a
//! [`LineReader`] with a colored per-line prefix.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader

pub mod printers;
