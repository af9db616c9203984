// src/lib.rs

//! _blrlib_ incrementally reads newline-terminated lines from a file or the
//! inherited standard input without reading the entire input first.
//!
//! Lines may be of any length. The buffer starts at a caller-chosen capacity
//! and doubles whenever a single line does not fit.
//!
//! ```no_run
//! use blrlib::common::ResultS3;
//! use blrlib::readers::linereader::LineReader;
//!
//! let path = String::from("./file.log");
//! let mut linereader = LineReader::new(100, Some(&path)).unwrap();
//! loop {
//!     match linereader.read_next() {
//!         ResultS3::Found(line) => println!("{:2}: {:?}", line.len(), line),
//!         ResultS3::Done => break,
//!         ResultS3::Err(err) => panic!("{}", err),
//!     }
//! }
//! linereader.close();
//! ```
//!
//! The _blr_ binary program drives a [`LineReader`].
//!
//! [`LineReader`]: crate::readers::linereader::LineReader

pub mod common;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
