use std::io::{BufRead, Write};

use tracing::debug;

use crate::input::InputError;
use crate::input::validate::ValidationError;

/// Line-oriented prompt shell over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: String::new(),
        }
    }

    /// Writes `prompt` without a newline and blocks for one line of input.
    /// The returned line has its terminator stripped.
    pub fn ask(&mut self, prompt: &str) -> Result<&str, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        self.buf.clear();
        let read = self.reader.read_line(&mut self.buf)?;
        if read == 0 {
            return Err(InputError::UnexpectedEof {
                prompt: prompt.trim_end().to_string(),
            });
        }
        Ok(self.buf.trim_end_matches(['\r', '\n']))
    }

    /// Re-asks `prompt` until `parse` accepts the line, printing each
    /// rejection's message in between.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, InputError>
    where
        F: FnMut(&str) -> Result<T, ValidationError>,
    {
        loop {
            let line = self.ask(prompt)?;
            match parse(line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(prompt = prompt.trim_end(), error = ?err, "input rejected");
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    pub fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Writes a pre-rendered block verbatim.
    pub fn emit(&mut self, text: &str) -> Result<(), InputError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/console.rs"]
mod tests;
