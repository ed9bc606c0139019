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

//! Integer arithmetic, parsed and evaluated in a single recursive-descent pass.
//!
//! ```text
//! Expr   := Term (('+' | '-') Term)*
//! Term   := Factor (('*' | '/') Factor)*
//! Factor := INTEGER | IDENTIFIER | '(' Expr ')'
//! ```
//!
//! Arithmetic is 32-bit two's complement and wraps on overflow.

use crate::error::{Error, Found};
use crate::token::{is_identifier, is_integer, Cursor};
use std::collections::HashMap;

pub struct Evaluator<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    variables: &'c HashMap<String, i32>,
}

impl<'c, 'a> Evaluator<'c, 'a> {
    pub fn new(cursor: &'c mut Cursor<'a>, variables: &'c HashMap<String, i32>) -> Self {
        Self { cursor, variables }
    }

    pub fn expr(&mut self) -> Result<i32, Error<'a>> {
        let mut value = self.term()?;
        loop {
            match self.cursor.peek(0) {
                Some("+") => {
                    self.cursor.consume("+")?;
                    value = value.wrapping_add(self.term()?);
                }
                Some("-") => {
                    self.cursor.consume("-")?;
                    value = value.wrapping_sub(self.term()?);
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<i32, Error<'a>> {
        let mut value = self.factor()?;
        loop {
            match self.cursor.peek(0) {
                Some("*") => {
                    self.cursor.consume("*")?;
                    value = value.wrapping_mul(self.factor()?);
                }
                Some("/") => {
                    self.cursor.consume("/")?;
                    let divisor = self.factor()?;
                    if divisor == 0 {
                        return Err(Error::DivisionByZero);
                    }
                    value = value.wrapping_div(divisor);
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<i32, Error<'a>> {
        match self.cursor.peek(0) {
            Some(token) if is_integer(token) => {
                self.cursor.advance();
                token.parse().map_err(|_| Error::LiteralOutOfRange(token))
            }
            Some(token) if is_identifier(token) => {
                self.cursor.advance();
                self.variables
                    .get(token)
                    .copied()
                    .ok_or(Error::UndefinedVariable(token))
            }
            Some("(") => {
                self.cursor.consume("(")?;
                let value = self.expr()?;
                match self.cursor.peek(0) {
                    Some(")") => {
                        self.cursor.consume(")")?;
                        Ok(value)
                    }
                    found => Err(Error::UnbalancedParenthesis(Found(found))),
                }
            }
            found => Err(Error::InvalidExpression(Found(found))),
        }
    }
}
