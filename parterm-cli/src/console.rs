//! Interactive input and output channel shared by the modes

use crossterm::style::{style, Color, Stylize};
use parterm_config::Config;
use std::io::{self, BufRead, Write};

/// A source of text lines.
///
/// `Ok(None)` marks end-of-stream. A source may yield more lines after an
/// end-of-stream, as a terminal does after Ctrl+D.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// [`LineSource`] over any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
/// line is still a line.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.inner.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }
}

/// Paints messages, or leaves them plain when colors are off
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Everything a mode needs: settings plus the interactive channel
pub struct Session<'a> {
    pub config: &'a Config,
    pub palette: Palette,
    pub input: &'a mut dyn LineSource,
    pub output: &'a mut dyn Write,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a Config,
        input: &'a mut dyn LineSource,
        output: &'a mut dyn Write,
    ) -> Self {
        Self {
            config,
            palette: Palette::new(config.ui.color),
            input,
            output,
        }
    }

    /// Print one colored line
    pub fn say(&mut self, text: &str, color: Color) -> io::Result<()> {
        writeln!(self.output, "{}", self.palette.paint(text, color))
    }

    /// Print a prompt without a newline, then read the answer
    pub fn ask(&mut self, prompt: &str, color: Color) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.palette.paint_bold(prompt, color))?;
        self.output.flush()?;
        self.input.next_line()
    }
}
