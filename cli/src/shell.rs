//! Terminal output for the CLI.
//!
//! Results go to stdout, either as styled text or as one JSON object per
//! line. Status chatter goes to stderr and is silent in JSON mode.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::OnceLock;

use anstyle::{AnsiColor, Color, RgbColor, Style};
use serde::Serialize;
use tintspace_color::Rgb;

static SHELL: OnceLock<Shell> = OnceLock::new();

mod styles {
    use super::{AnsiColor, Color, Style};

    pub const HEADER: Style = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)));
    pub const WARN: Style = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
    pub const LABEL: Style = Style::new().dimmed();
}

/// Initialize the global shell. Later calls are ignored.
pub fn init(json: bool) {
    let _ = SHELL.set(Shell { json });
}

fn get() -> &'static Shell {
    SHELL.get_or_init(|| Shell { json: false })
}

#[derive(Debug)]
pub struct Shell {
    json: bool,
}

impl Shell {
    fn status(&self, status: impl Display, message: impl Display) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        let mut stderr = anstream::stderr().lock();
        writeln!(
            stderr,
            "{}{status}{} {message}",
            styles::HEADER,
            styles::HEADER.render_reset()
        )
    }

    fn warn(&self, message: impl Display) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        let mut stderr = anstream::stderr().lock();
        writeln!(
            stderr,
            "{}warning{}: {message}",
            styles::WARN,
            styles::WARN.render_reset()
        )
    }

    fn emit<T: Serialize>(
        &self,
        payload: &T,
        human: impl FnOnce(&mut dyn Write) -> io::Result<()>,
    ) -> io::Result<()> {
        if self.json {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer(&mut stdout, payload)?;
            writeln!(stdout)?;
            stdout.flush()
        } else {
            let mut stdout = anstream::stdout().lock();
            human(&mut stdout)?;
            stdout.flush()
        }
    }
}

/// Print a status line to stderr (human mode only).
pub fn status(status: impl Display, message: impl Display) -> io::Result<()> {
    get().status(status, message)
}

/// Print a warning to stderr (human mode only).
pub fn warn(message: impl Display) -> io::Result<()> {
    get().warn(message)
}

/// Print a command result: `payload` as JSON, or whatever `human` writes.
pub fn emit<T: Serialize>(
    payload: &T,
    human: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> io::Result<()> {
    get().emit(payload, human)
}

/// `label  value` with a dimmed, padded label.
pub fn field(out: &mut dyn Write, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(
        out,
        "{}{label:<12}{} {value}",
        styles::LABEL,
        styles::LABEL.render_reset()
    )
}

/// A two-space block painted in `rgb`, followed by its hex.
pub fn swatch(rgb: Rgb) -> String {
    let style = Style::new().bg_color(Some(Color::Rgb(RgbColor(rgb.red, rgb.green, rgb.blue))));
    format!("{style}  {} {rgb}", style.render_reset())
}
