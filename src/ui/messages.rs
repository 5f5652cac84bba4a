//! Status lines (info / success / warning / error) with icon and color.
//!
//! `write` targets any writer, so session output captured in tests carries
//! the same lines as the real console.

use std::fmt;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn color(&self) -> &'static str {
        match self {
            Kind::Info => "\x1b[34m",
            Kind::Success => "\x1b[32m",
            Kind::Warning => "\x1b[33m",
            Kind::Error => "\x1b[31m",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
        }
    }
}

pub fn write<W: Write, T: fmt::Display>(out: &mut W, kind: Kind, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", kind.color(), BOLD, kind.icon(), RESET, msg)
}

// Console shortcuts; a failed write to the terminal is not worth an error.

pub fn info<T: fmt::Display>(msg: T) {
    let _ = write(&mut io::stdout().lock(), Kind::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    let _ = write(&mut io::stdout().lock(), Kind::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let _ = write(&mut io::stdout().lock(), Kind::Warning, msg);
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    let _ = write(&mut io::stderr().lock(), Kind::Error, msg);
}
