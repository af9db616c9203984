// src/tests/printers_tests.rs

//! tests for `src/printer/printers.rs` and `src/debug/printers.rs`

#![allow(non_snake_case)]

use crate::debug::printers::{
    buffer_to_String_noraw,
    byte_to_char_noraw,
    char_to_char_noraw,
};
use crate::printer::printers::{
    ColorChoice,
    PrinterLine,
};

use ::termcolor::{Ansi, NoColor};
use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterLine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_PrinterLine_stdout() {
    let printer = PrinterLine::stdout(ColorChoice::Never);
    assert_eq!(printer.count_printed(), 0);
}

#[test_case(b"ab", b" 2: 'ab'\n")]
#[test_case(b"", b" 0: ''\n"; "empty")]
#[test_case(b"First String", b"12: 'First String'\n")]
#[test_case(b"a\xFFb", b" 3: 'a\xFFb'\n"; "bytes as-is")]
fn test_PrinterLine_print_line_len(
    line: &[u8],
    expect: &[u8],
) {
    let mut printer = PrinterLine::new(NoColor::new(Vec::<u8>::new()));
    printer.print_line_len(line).unwrap();
    printer.flush().unwrap();
    assert_eq!(printer.count_printed(), 1);
    let out = printer.into_inner().into_inner();
    assert_eq!(out.as_slice(), expect, "{:?}", String::from_utf8_lossy(&out));
}

#[test]
fn test_PrinterLine_print_line_number() {
    let mut printer = PrinterLine::new(NoColor::new(Vec::<u8>::new()));
    printer.print_line_number(1, b"First").unwrap();
    printer.print_line_number(2, b"").unwrap();
    printer.print_line_number(100, b"x").unwrap();
    assert_eq!(printer.count_printed(), 3);
    let out = printer.into_inner().into_inner();
    assert_eq!(out.as_slice(), b" 1: First\n 2: \n100: x\n");
}

#[test]
fn test_PrinterLine_color() {
    let mut printer = PrinterLine::new(Ansi::new(Vec::<u8>::new()));
    printer.print_line_len(b"ab").unwrap();
    let out = printer.into_inner().into_inner();
    let s = String::from_utf8_lossy(&out);
    // prefix is colored, then reset
    assert!(s.starts_with("\x1b["), "{:?}", s);
    assert!(s.contains(" 2:"), "{:?}", s);
    assert!(s.ends_with(" 'ab'\n"), "{:?}", s);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// noraw helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case('\n', '␊')]
#[test_case('\0', '␀')]
#[test_case('\x7F', '␡')]
#[test_case('a', 'a')]
fn test_char_to_char_noraw(
    c: char,
    expect: char,
) {
    assert_eq!(char_to_char_noraw(c), expect);
}

#[test]
fn test_byte_to_char_noraw() {
    assert_eq!(byte_to_char_noraw(b'\r'), '␍');
    assert_eq!(byte_to_char_noraw(b'z'), 'z');
}

#[test_case(b"ab\ncd", "ab␊cd")]
#[test_case(b"", "")]
#[test_case(b"\xFFa", "\u{FFFD}a"; "invalid utf8")]
fn test_buffer_to_String_noraw(
    buffer: &[u8],
    expect: &str,
) {
    assert_eq!(buffer_to_String_noraw(buffer), expect);
}
