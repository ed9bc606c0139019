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

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure while evaluating one statement. Aborts that line only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<'a> {
    #[error("'{0}' is not a valid statement; expected: config, = or print")]
    UnrecognizedStatement(&'a str),
    #[error("expected '{expected}', found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Found<'a>,
    },
    #[error("{0} is not a valid configuration; expected: dec, hex or bin")]
    Configuration(Found<'a>),
    #[error("variable '{0}' is not defined")]
    UndefinedVariable(&'a str),
    #[error("no enclosing parenthesis found; found {0}")]
    UnbalancedParenthesis(Found<'a>),
    #[error("the given expression: {0} is not valid")]
    InvalidExpression(Found<'a>),
    #[error("integer literal '{0}' does not fit in 32 bits")]
    LiteralOutOfRange(&'a str),
    #[error("division by zero")]
    DivisionByZero,
}

/// The token an error was raised on, or the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<'a>(pub Option<&'a str>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(token) => write!(f, "'{token}'"),
            None => f.write_str("end of line"),
        }
    }
}

/// A failure of the input source or output sink. Ends the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("unable to open file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("error reading input: {0}")]
    Read(#[source] io::Error),
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}
