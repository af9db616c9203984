// src/bin/blr.rs
//
// ‥ … ≤ ≥ ≠ ≟ ×

//! Driver program _blr_ drives the [_blrlib_].
//!
//! Processes user-passed command-line arguments. Then reads lines from the
//! passed file path, or STDIN, using a [`LineReader`].
//!
//! By default each line is printed as soon as it is read, prepended with the
//! line length.
//!
//! If passed CLI option `--collect N` then up to `N` lines are first copied
//! into an owned list, then the list is printed, each line prepended with the
//! line number.
//!
//! If passed CLI option `--summary`, a [`SummaryLineReader`] is printed to
//! STDERR.
//!
//! [_blrlib_]: blrlib
//! [`LineReader`]: blrlib::readers::linereader::LineReader
//! [`SummaryLineReader`]: blrlib::readers::summary::SummaryLineReader

#![allow(non_camel_case_types)]

use std::io::ErrorKind;
use std::process::ExitCode;

use ::clap::{
    Parser,
    ValueEnum,
};
use ::const_format::concatcp;

use ::blrlib::common::{
    Bytes,
    Count,
    FPath,
    ResultS3,
};
#[allow(unused_imports)]
use ::blrlib::debug::printers::{
    de_err,
    de_wrn,
    e_err,
    e_wrn,
};
use ::blrlib::printer::printers::{
    ColorChoice,
    PrinterLine,
    StandardStream,
};
use ::blrlib::readers::linereader::LineReader;

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
    stack::stack_offset_set,
};

// --------------------
// command-line parsing

/// user-passed signifier to read from STDIN
const PATH_STDIN: &str = "-";

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

const CLI_HELP_AFTER: &str = concatcp!(
    r#"Lines are delimited by a single newline byte '\n'. Line bytes are printed
as-is; no text encoding is assumed.

The buffer doubles in size whenever one line does not fit, without limit.

BUFFER_SIZE may be passed in decimal, hexadecimal "0x", octal "0o", or
binary "0b" notation.

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
Author: "#, env!("CARGO_PKG_AUTHORS"), r#"
"#,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "blr",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Buffered Line Reader)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of file to read lines from.
    /// If not passed, or passed "-", then read from STDIN.
    #[clap(
        required = false,
        verbatim_doc_comment,
    )]
    path: Option<String>,

    /// Initial buffer size in bytes.
    #[clap(
        required = false,
        short = 'z',
        long = "buffer-size",
        verbatim_doc_comment,
        value_parser = cli_parse_buffer_size,
        default_value_t = LineReader::CAPACITY_DEFAULT,
    )]
    buffer_size: usize,

    /// Copy up to COLLECT lines into a list, then print the list with line
    /// numbers.
    #[clap(
        required = false,
        short = 'c',
        long = "collect",
        verbatim_doc_comment,
    )]
    collect: Option<usize>,

    /// Choose to print using colors.
    #[clap(
        required = false,
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of reading activity to STDERR.
    #[clap(
        required = false,
        short = 's',
        long = "summary",
        verbatim_doc_comment,
        default_value_t = false,
    )]
    summary: bool,
}

/// `clap` argument processor for `--buffer-size`.
fn cli_parse_buffer_size(sizes: &str) -> std::result::Result<usize, String> {
    let errs = format!("Unable to parse a number for --buffer-size {:?}", sizes);

    let size: usize = if let Some(digits) = sizes.strip_prefix("0x") {
        usize::from_str_radix(digits, 16)
    } else if let Some(digits) = sizes.strip_prefix("0o") {
        usize::from_str_radix(digits, 8)
    } else if let Some(digits) = sizes.strip_prefix("0b") {
        usize::from_str_radix(digits, 2)
    } else {
        sizes.parse::<usize>()
    }
    .map_err(|err| format!("{} {}", errs, err))?;

    if size < LineReader::CAPACITY_MIN {
        return Err(format!(
            "--buffer-size must be ≥ {}, it was {:?}",
            LineReader::CAPACITY_MIN,
            sizes
        ));
    }

    Ok(size)
}

/// Process user-passed CLI argument strings into expected types.
fn cli_process_args() -> (Option<FPath>, usize, Option<usize>, ColorChoice, bool) {
    let args = CLI_Args::parse();

    defo!("args {:?}", args);

    let path: Option<FPath> = match args.path {
        Some(path) if path == PATH_STDIN => None,
        Some(path) => Some(path),
        None => None,
    };

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    (path, args.buffer_size, args.collect, color_choice, args.summary)
}

// -------------
// main function

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (path, buffer_size, collect, color_choice, cli_opt_summary) = cli_process_args();

    let mut linereader = match LineReader::new(buffer_size, path.as_ref()) {
        Ok(val) => val,
        Err(err) => {
            match path {
                Some(path) => e_err!("{} for file {:?}", err, path),
                None => e_err!("{} for STDIN", err),
            }
            defx!("return FAILURE");
            return ExitCode::FAILURE;
        }
    };
    defo!("{:?}", linereader);

    let mut printer = PrinterLine::stdout(color_choice);
    let ret: bool = match collect {
        Some(count) => process_collect(&mut linereader, &mut printer, count),
        None => process_print(&mut linereader, &mut printer),
    };
    if let Err(_err) = printer.flush() {
        de_err!("printer.flush() error {}", _err);
    }

    if cli_opt_summary {
        eprintln!("Summary:");
        eprintln!("{}", linereader.summary());
    }

    linereader.close();

    let exitcode = match ret {
        true => ExitCode::SUCCESS,
        false => ExitCode::FAILURE,
    };
    defx!("return {:?}", exitcode);

    exitcode
}

/// Is this printing error only a closed STDOUT, e.g. `blr file | head`?
fn is_broken_pipe(err: &std::io::Error) -> bool {
    err.kind() == ErrorKind::BrokenPipe
}

/// Print each line as it is read.
fn process_print(
    linereader: &mut LineReader,
    printer: &mut PrinterLine<StandardStream>,
) -> bool {
    defn!();
    loop {
        match linereader.read_next() {
            ResultS3::Found(line) => {
                if let Err(err) = printer.print_line_len(line) {
                    if is_broken_pipe(&err) {
                        defx!("broken pipe");
                        return true;
                    }
                    e_err!("printing failed {}", err);
                    defx!("return false");
                    return false;
                }
            }
            ResultS3::Done => {
                break;
            }
            ResultS3::Err(err) => {
                e_err!(
                    "Line reader of buffer capacity {} terminated due to {}",
                    linereader.capacity(),
                    err
                );
                defx!("return false");
                return false;
            }
        }
    }
    defx!("return true");

    true
}

/// Copy up to `count` lines into a list, then print the list.
fn process_collect(
    linereader: &mut LineReader,
    printer: &mut PrinterLine<StandardStream>,
    count: usize,
) -> bool {
    defn!("({})", count);
    let mut lines: Vec<Bytes> = Vec::with_capacity(std::cmp::min(count, 0xFFFF));
    let mut ret: bool = true;
    while lines.len() < count {
        match linereader.read_next_owned() {
            ResultS3::Found(line) => lines.push(line),
            ResultS3::Done => break,
            ResultS3::Err(err) => {
                e_err!(
                    "Line reader of buffer capacity {} terminated due to {}",
                    linereader.capacity(),
                    err
                );
                ret = false;
                break;
            }
        }
    }
    defo!("collected {} lines", lines.len());

    for (index, line) in lines.iter().enumerate() {
        if let Err(err) = printer.print_line_number((index + 1) as Count, line) {
            if !is_broken_pipe(&err) {
                e_err!("printing failed {}", err);
                ret = false;
            }
            break;
        }
    }
    defx!("return {}", ret);

    ret
}
