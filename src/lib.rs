// Copyright (C) 2023  Alex Crawford
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod error;
mod eval;
mod statement;
mod token;

pub use error::{Error, Found, RunError};
pub use token::{is_identifier, is_integer, tokenize, Cursor};

use eval::Evaluator;
use statement::Statement;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Printed when a single input line cannot be read.
pub const BAD_INPUT: &str = "bad input, try again";

/// How `print` renders its value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Decimal,
    Hexadecimal,
    Binary,
}

impl DisplayMode {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "dec" => Some(Self::Decimal),
            "hex" => Some(Self::Hexadecimal),
            "bin" => Some(Self::Binary),
            _ => None,
        }
    }

    /// Hex and binary show the 32-bit two's-complement pattern.
    pub fn format(self, value: i32) -> String {
        let bits = value as u32;
        match self {
            Self::Decimal => value.to_string(),
            Self::Hexadecimal => format!("0x{bits:x}"),
            Self::Binary => format!("{bits:032b}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Interpreter {
    mode: DisplayMode,
    variables: HashMap<String, i32>,
}

impl Interpreter {
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn variable(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    /// Forgets every variable and returns to decimal output.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.mode = DisplayMode::default();
    }

    /// Evaluates one line, returning the text a `print` produced.
    pub fn eval<'a>(&mut self, line: &'a str) -> Result<Option<String>, Error<'a>> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(None);
        }

        let mut cursor = Cursor::new(tokens);
        let statement = statement::recognize(&mut cursor)?;
        debug!(?statement, "execute");

        let output = match statement {
            Statement::Config(mode) => {
                self.mode = mode;
                None
            }
            Statement::Assign(name) => {
                let value = Evaluator::new(&mut cursor, &self.variables).expr()?;
                self.variables.insert(name.to_string(), value);
                None
            }
            Statement::Print => {
                let value = Evaluator::new(&mut cursor, &self.variables).expr()?;
                Some(self.mode.format(value))
            }
        };

        if !cursor.is_at_end() {
            debug!(ignored = ?cursor.remaining(), "trailing tokens");
        }
        Ok(output)
    }

    /// Runs every line in turn, writing results and per-line errors to `output`.
    ///
    /// A line that cannot be decoded is reported and skipped. Any other read
    /// failure ends the run.
    pub fn run<I, W>(&mut self, lines: I, output: &mut W) -> Result<(), RunError>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write,
    {
        for line in lines {
            let line = match line {
                Ok(line) => line,
                Err(err)
                    if matches!(
                        err.kind(),
                        io::ErrorKind::InvalidData | io::ErrorKind::Interrupted
                    ) =>
                {
                    debug!(%err, "skipping unreadable line");
                    writeln!(output, "{BAD_INPUT}").map_err(RunError::Write)?;
                    continue;
                }
                Err(err) => return Err(RunError::Read(err)),
            };

            let written = match self.eval(&line) {
                Ok(Some(text)) => writeln!(output, "{text}"),
                Ok(None) => Ok(()),
                Err(err) => writeln!(output, "{err}"),
            };
            written.map_err(RunError::Write)?;
        }
        output.flush().map_err(RunError::Write)
    }

    pub fn run_reader<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        output: &mut W,
    ) -> Result<(), RunError> {
        self.run(reader.lines(), output)
    }

    pub fn run_file<P: AsRef<Path>, W: Write>(
        &mut self,
        path: P,
        output: &mut W,
    ) -> Result<(), RunError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RunError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "running file");
        self.run_reader(BufReader::new(file), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_modes() {
        assert_eq!(DisplayMode::Decimal.format(-42), "-42");
        assert_eq!(DisplayMode::Hexadecimal.format(255), "0xff");
        assert_eq!(DisplayMode::Hexadecimal.format(-1), "0xffffffff");
        assert_eq!(DisplayMode::Hexadecimal.format(0), "0x0");
        assert_eq!(DisplayMode::Binary.format(5), "00000000000000000000000000000101");
        assert_eq!(DisplayMode::Binary.format(-1), "1".repeat(32));
        assert_eq!(DisplayMode::Binary.format(i32::MIN), format!("1{}", "0".repeat(31)));
    }

    #[test]
    fn eval_statements() {
        let mut interp = Interpreter::default();
        assert_eq!(interp.eval("x = 3 * 4"), Ok(None));
        assert_eq!(interp.variable("x"), Some(12));
        assert_eq!(interp.eval("print x - 2"), Ok(Some("10".to_string())));
        assert_eq!(interp.eval("config hex"), Ok(None));
        assert_eq!(interp.mode(), DisplayMode::Hexadecimal);
        assert_eq!(interp.eval("print x"), Ok(Some("0xc".to_string())));
    }

    #[test]
    fn blank_line_is_skipped() {
        let mut interp = Interpreter::default();
        assert_eq!(interp.eval(""), Ok(None));
        assert_eq!(interp.eval("   \t "), Ok(None));
    }

    #[test]
    fn failed_assignment_keeps_old_value() {
        let mut interp = Interpreter::default();
        interp.eval("x = 1").unwrap();
        assert_eq!(interp.eval("x = 1 / 0"), Err(Error::DivisionByZero));
        assert_eq!(interp.variable("x"), Some(1));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let mut interp = Interpreter::default();
        assert_eq!(interp.eval("print 1 2 3"), Ok(Some("1".to_string())));
        assert_eq!(interp.eval("config bin dec"), Ok(None));
        assert_eq!(interp.mode(), DisplayMode::Binary);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut interp = Interpreter::default();
        interp.eval("config bin").unwrap();
        interp.eval("a = 1").unwrap();
        interp.reset();
        assert_eq!(interp.mode(), DisplayMode::Decimal);
        assert_eq!(interp.variable("a"), None);
    }

    #[test]
    fn run_reports_bad_input_and_continues() {
        let lines = vec![
            Ok("print 1".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8")),
            Ok("print 2".to_string()),
        ];
        let mut out = Vec::new();
        Interpreter::default().run(lines, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\nbad input, try again\n2\n");
    }

    #[test]
    fn run_treats_interrupted_read_as_bad_input() {
        let lines = vec![
            Err(io::Error::new(io::ErrorKind::Interrupted, "signal")),
            Ok("print 3".to_string()),
        ];
        let mut out = Vec::new();
        Interpreter::default().run(lines, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bad input, try again\n3\n");
    }

    #[test]
    fn run_stops_on_stream_fault() {
        let lines = vec![
            Ok("print 1".to_string()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone")),
            Ok("print 2".to_string()),
        ];
        let mut out = Vec::new();
        let result = Interpreter::default().run(lines, &mut out);
        assert!(matches!(result, Err(RunError::Read(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    }

    #[test]
    fn run_file_missing_is_fatal() {
        let mut out = Vec::new();
        let result = Interpreter::default().run_file("does/not/exist.txt", &mut out);
        assert!(matches!(result, Err(RunError::Open { .. })));
        assert!(out.is_empty());
    }
}
