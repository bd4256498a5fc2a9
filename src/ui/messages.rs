use std::fmt;
use std::io::{self, IsTerminal, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

/// Colors only on a terminal, and never when NO_COLOR is set.
fn use_color(stream: Stream) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match stream {
        Stream::Out => io::stdout().is_terminal(),
        Stream::Err => io::stderr().is_terminal(),
    }
}

fn emit(stream: Stream, color: &str, icon: &str, msg: &dyn fmt::Display) {
    let line = if use_color(stream) {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    };
    // write errors (closed pipe) are ignored
    let _ = match stream {
        Stream::Out => writeln!(io::stdout(), "{line}"),
        Stream::Err => writeln!(io::stderr(), "{line}"),
    };
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Stream::Out, FG_BLUE, ICON_INFO, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Stream::Out, FG_GREEN, ICON_OK, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Stream::Out, FG_YELLOW, ICON_WARN, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Stream::Err, FG_RED, ICON_ERR, &msg);
}
