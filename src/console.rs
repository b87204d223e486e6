// Console log lines: `[HH:MM:SS] LEVEL: message`, colored by level when
// stdout is a terminal. No global state; every call formats and writes one
// line.

use chrono::{DateTime, Utc};
use crossterm::style::{style, Color, Stylize};
use crossterm::tty::IsTty;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Info => Color::Blue,
            Level::Success => Color::Green,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

/// Render a line without color codes.
pub fn format_line(level: Level, message: &str, at: DateTime<Utc>) -> String {
    format!("[{}] {}: {}", at.format("%H:%M:%S"), level.tag(), message)
}

/// Where log lines go. `Console::stdout()` colors lines when stdout is a
/// terminal; `Console::plain` writes uncolored lines to any writer.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_tty();
        Console { out, color }
    }
}

impl<W: Write> Console<W> {
    pub fn plain(out: W) -> Self {
        Console { out, color: false }
    }

    pub fn log(&mut self, level: Level, message: impl Display) {
        let line = format_line(level, &message.to_string(), Utc::now());
        // A closed stdout is not worth aborting an upload over.
        let _ = if self.color {
            writeln!(self.out, "{}", style(line).with(level.color()))
        } else {
            writeln!(self.out, "{}", line)
        };
    }

    pub fn info(&mut self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn success(&mut self, message: impl Display) {
        self.log(Level::Success, message);
    }

    pub fn warning(&mut self, message: impl Display) {
        self.log(Level::Warning, message);
    }

    pub fn error(&mut self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn error(message: impl Display) {
    Console::stdout().error(message);
}
