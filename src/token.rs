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
use tracing::trace;

/// Splits a line into whitespace-delimited tokens, dropping empty fragments.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_ascii_whitespace().collect()
}

/// `-?[0-9]+`
pub fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[A-Za-z][A-Za-z0-9]*`
pub fn is_identifier(token: &str) -> bool {
    let mut bytes = token.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => bytes.all(|b| b.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Reader over the tokens of a single statement.
///
/// `peek` returns `None` once it looks past the last token; that is the
/// end-of-text marker and never collides with real token text.
pub struct Cursor<'a> {
    tokens: Vec<&'a str>,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[&'a str] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }

    /// Looks `offset` tokens away from the current position without moving.
    ///
    /// # Panics
    ///
    /// Panics if a negative `offset` reaches before the first token.
    pub fn peek(&self, offset: isize) -> Option<&'a str> {
        let index = self.position.checked_add_signed(offset).unwrap_or_else(|| {
            panic!(
                "peek offset {offset} is before the start of the line (position {})",
                self.position
            )
        });
        self.tokens.get(index).copied()
    }

    /// Advances past the current token if it is exactly `expected`.
    pub fn consume(&mut self, expected: &'static str) -> Result<&'a str, Error<'a>> {
        match self.peek(0) {
            Some(token) if token == expected => {
                trace!(token, position = self.position, "consume");
                self.position += 1;
                Ok(token)
            }
            found => Err(Error::UnexpectedToken {
                expected,
                found: Found(found),
            }),
        }
    }

    /// Advances past the current token, whatever it is.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek(0)?;
        trace!(token, position = self.position, "advance");
        self.position += 1;
        Some(token)
    }
}
