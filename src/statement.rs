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

use crate::error::{Error, Found};
use crate::token::{is_identifier, Cursor};
use crate::DisplayMode;

/// The statement a line holds, recognized from its leading tokens.
///
/// Recognition consumes those leading tokens; any expression that follows is
/// left on the cursor for the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `config (dec|hex|bin)`
    Config(DisplayMode),
    /// `IDENTIFIER = Expr`, carrying the assignment target.
    Assign(&'a str),
    /// `print Expr`
    Print,
}

pub fn recognize<'a>(cursor: &mut Cursor<'a>) -> Result<Statement<'a>, Error<'a>> {
    match cursor.peek(0) {
        Some(name) if is_identifier(name) && cursor.peek(1) == Some("=") => {
            cursor.advance();
            cursor.consume("=")?;
            Ok(Statement::Assign(name))
        }
        Some("config") => {
            cursor.consume("config")?;
            let found = cursor.peek(0);
            let mode = found
                .and_then(DisplayMode::from_keyword)
                .ok_or(Error::Configuration(Found(found)))?;
            cursor.advance();
            Ok(Statement::Config(mode))
        }
        Some("print") => {
            cursor.consume("print")?;
            Ok(Statement::Print)
        }
        Some(token) => Err(Error::UnrecognizedStatement(token)),
        None => Err(Error::UnexpectedToken {
            expected: "statement",
            found: Found(None),
        }),
    }
}
