//! lox: scan Lox source and print its tokens.
//!
//! Usage:
//!   lox [SCRIPT] [--json] [--pretty <bool>] [--ast-demo]
//!
//! With a script, every token of the file is printed and the exit status
//! reports whether scanning found errors. Without one, an interactive
//! prompt scans each line on its own.

use clap::Parser as ClapParser;
use lox_core::{Arena, MAX_SOURCE_LEN};
use lox_diagnostics::{Diagnostic, DiagnosticCollection};
use lox_printer::{demo_expression, AstPrinter};
use lox_scanner::{scan, Token};
use std::io::{self, BufRead, Write};
use std::process;
use thiserror::Error;

// Exit codes from <sysexits.h>
const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_SOFTWARE: i32 = 70;
const EX_IOERR: i32 = 74;

#[derive(ClapParser, Debug)]
#[command(name = "lox", about = "Scan Lox source into tokens")]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<String>,

    /// Print tokens as one JSON array instead of one per line.
    #[arg(long)]
    json: bool,

    /// Color diagnostics when stderr is a terminal.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pretty: bool,

    /// Print a hand-built sample expression tree and exit.
    #[arg(long = "ast-demo")]
    ast_demo: bool,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path} is {len} bytes; scripts are limited to {} bytes", MAX_SOURCE_LEN)]
    TooLarge { path: String, len: usize },
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: String },
    #[error("could not read from the prompt: {0}")]
    Prompt(#[source] io::Error),
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
    #[error("could not encode tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl DriverError {
    fn exit_code(&self) -> i32 {
        match self {
            DriverError::Read { .. } | DriverError::Prompt(_) | DriverError::Output(_) => EX_IOERR,
            DriverError::TooLarge { .. } | DriverError::InvalidUtf8 { .. } => EX_DATAERR,
            DriverError::Json(_) => EX_SOFTWARE,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EX_USAGE } else { 0 });
        }
    };

    let use_color = cli.pretty && atty_is_terminal();
    let exit_code = match dispatch(&cli, use_color) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e.to_string(), use_color);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn dispatch(cli: &Cli, use_color: bool) -> Result<i32, DriverError> {
    if cli.ast_demo {
        let arena = Arena::new();
        println!("{}", AstPrinter::new().print(demo_expression(&arena)));
        return Ok(0);
    }

    match cli.scripts.as_slice() {
        [] => run_prompt(cli, use_color),
        [path] => run_file(path, cli, use_color),
        _ => {
            eprintln!("Usage: lox [script]");
            Ok(EX_USAGE)
        }
    }
}

fn run_file(path: &str, cli: &Cli, use_color: bool) -> Result<i32, DriverError> {
    let bytes = std::fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_string(),
        source,
    })?;
    if bytes.len() > MAX_SOURCE_LEN {
        return Err(DriverError::TooLarge {
            path: path.to_string(),
            len: bytes.len(),
        });
    }
    let source = simdutf8::basic::from_utf8(&bytes).map_err(|_| DriverError::InvalidUtf8 {
        path: path.to_string(),
    })?;
    tracing::debug!(path, bytes = bytes.len(), "loaded script");

    let mut diagnostics = run(source, cli, &mut io::stdout().lock())?;
    if diagnostics.is_empty() {
        return Ok(0);
    }

    diagnostics.sort();
    let count = diagnostics.error_count();
    for diag in diagnostics.into_diagnostics() {
        print_diagnostic(&diag.with_file(path), use_color);
    }
    if use_color {
        eprintln!(
            "\n{}Found {} error{}.{}",
            RED,
            count,
            if count == 1 { "" } else { "s" },
            RESET
        );
    }
    Ok(EX_DATAERR)
}

fn run_prompt(cli: &Cli, use_color: bool) -> Result<i32, DriverError> {
    tracing::debug!("starting prompt");
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        {
            let mut out = io::stdout().lock();
            write!(out, ">> ")?;
            out.flush()?;
        }

        line.clear();
        let read = reader.read_line(&mut line).map_err(DriverError::Prompt)?;
        let input = line.trim_end_matches(['\n', '\r']);
        if read == 0 || input.is_empty() {
            println!("Exiting the REPL...");
            break;
        }

        // Each line is scanned on its own; nothing carries over.
        let diagnostics = run(input, cli, &mut io::stdout().lock())?;
        for diag in &diagnostics {
            print_diagnostic(diag, use_color);
        }
    }

    tracing::debug!("prompt closed");
    Ok(0)
}

/// Scan `source`, write its tokens to `out` and hand back what was reported.
fn run(source: &str, cli: &Cli, out: &mut impl Write) -> Result<DiagnosticCollection, DriverError> {
    let result = scan(source);
    if cli.json {
        write_json(&result.tokens, out)?;
    } else {
        for token in &result.tokens {
            writeln!(out, "{}", token)?;
        }
    }
    out.flush()?;
    Ok(result.diagnostics)
}

fn write_json(tokens: &[Token<'_>], out: &mut impl Write) -> Result<(), DriverError> {
    serde_json::to_writer(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if use_color {
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}: ", CYAN, file, RESET);
        }
        eprintln!(
            "{}[line {}]{} {}{}Error{}: {}",
            GRAY, diag.line, RESET, BOLD, RED, RESET, diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
