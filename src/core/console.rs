//! Line-oriented console I/O for the interactive menu.
//!
//! The console owns the input reader plus the output and error writers so the
//! command loop can be driven by real terminals and by scripted buffers alike.

use crate::config::OutputConfig;
use crate::errors::ExplorerResult;
use std::ffi::OsString;
use std::io::{BufRead, Write};

/// Status indicator placed in front of a user-visible line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Success,
    Failure,
    Directory,
    Farewell,
}

impl Indicator {
    pub fn render(self, glyphs: bool) -> &'static str {
        match (self, glyphs) {
            (Indicator::Success, true) => "✅",
            (Indicator::Failure, true) => "❌",
            (Indicator::Directory, true) => "📂",
            (Indicator::Farewell, true) => "👋",
            (Indicator::Success, false) => "[ok]",
            (Indicator::Failure, false) => "[error]",
            (Indicator::Directory, false) => "[dir]",
            (Indicator::Farewell, false) => "[bye]",
        }
    }
}

pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
    glyphs: bool,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E, output: &OutputConfig) -> Self {
        Self {
            input,
            out,
            err,
            glyphs: output.glyphs,
        }
    }

    /// Read one raw line. Only the line terminator is stripped.
    /// Returns `None` at end of input.
    ///
    /// Lines are taken as bytes, so input that is not UTF-8 still reaches
    /// the caller as a (possibly non-Unicode) OS string.
    pub fn read_line(&mut self) -> ExplorerResult<Option<OsString>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }
        Ok(Some(bytes_to_os_string(line)))
    }

    /// Print `text` without a newline and read the answer
    pub fn prompt(&mut self, text: &str) -> ExplorerResult<Option<OsString>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    pub fn println(&mut self, line: &str) -> ExplorerResult<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub fn eprintln(&mut self, line: &str) -> ExplorerResult<()> {
        writeln!(self.err, "{line}")?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> ExplorerResult<()> {
        let tag = Indicator::Success.render(self.glyphs);
        writeln!(self.out, "{tag} {message}")?;
        Ok(())
    }

    pub fn failure(&mut self, message: &str) -> ExplorerResult<()> {
        let tag = Indicator::Failure.render(self.glyphs);
        writeln!(self.err, "{tag} {message}")?;
        Ok(())
    }

    /// A negative but non-exceptional outcome, e.g. a search with no hits
    pub fn not_found(&mut self, message: &str) -> ExplorerResult<()> {
        let tag = Indicator::Failure.render(self.glyphs);
        writeln!(self.out, "{tag} {message}")?;
        Ok(())
    }

    pub fn indicated(&mut self, indicator: Indicator, message: &str) -> ExplorerResult<()> {
        let tag = indicator.render(self.glyphs);
        writeln!(self.out, "{tag} {message}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> ExplorerResult<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Give back the underlying streams
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    String::from_utf8_lossy(&bytes).into_owned().into()
}
