//! Recursive-descent parser over the token stream.
//!
//! One mutable cursor is shared by every grammar routine for the duration of
//! a statement; there is exactly one parse in flight per statement. All
//! terminal consumption goes through [`Parser::consume_token`], so every
//! grammar mismatch surfaces as a syntax error naming the offending lexeme
//! and its position.

mod attributes;
mod ddl;

use super::decl::{Decl, Statement};
use super::lexer::{Token, TokenKind};
use crate::error::{Error, Result};

/// Cursor-based parser building the declaration tree.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, index: 0 }
    }

    /// Parses one statement, allowing an optional trailing semicolon and
    /// rejecting anything after it.
    pub fn parse(tokens: Vec<Token>) -> Result<Statement> {
        let mut parser = Parser::new(tokens);
        let statement = parser.parse_statement()?;
        if parser.is(TokenKind::Semicolon) {
            parser.consume_token(&[TokenKind::Semicolon])?;
        }
        if parser.index < parser.tokens.len() {
            return Err(parser.syntax_error());
        }
        Ok(statement)
    }

    /// Dispatches on the leading token kind.
    pub fn parse_statement(&mut self) -> Result<Statement> {
        match self.current()?.kind {
            TokenKind::Create => {
                let create = self.parse_create()?;
                Ok(Statement { decls: vec![create] })
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// The token under the cursor.
    pub(super) fn current(&self) -> Result<&Token> {
        self.tokens.get(self.index).ok_or(Error::UnexpectedEndOfInput)
    }

    /// True if a token exists after the cursor.
    pub(super) fn has_next(&self) -> bool {
        self.index + 1 < self.tokens.len()
    }

    /// Moves the cursor to the next token.
    pub(super) fn advance(&mut self) -> Result<()> {
        if self.has_next() {
            self.index += 1;
            Ok(())
        } else {
            Err(Error::UnexpectedEndOfInput)
        }
    }

    /// True if the current token has the given kind.
    pub(super) fn is(&self, kind: TokenKind) -> bool {
        matches!(self.tokens.get(self.index), Some(token) if token.kind == kind)
    }

    /// True if the current token exists and has none of the given kinds.
    pub(super) fn is_not(&self, kinds: &[TokenKind]) -> bool {
        match self.tokens.get(self.index) {
            Some(token) => !kinds.contains(&token.kind),
            None => false,
        }
    }

    /// Checks the token after the cursor without consuming anything.
    pub(super) fn is_next(&self, kind: TokenKind) -> Result<()> {
        let token = self
            .tokens
            .get(self.index + 1)
            .ok_or(Error::UnexpectedEndOfInput)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(Error::SyntaxError {
                position: self.index + 1,
                lexeme: token.lexeme.clone(),
            })
        }
    }

    /// Wraps the current token in a new declaration and advances, if its
    /// kind is one of the expected kinds.
    pub(super) fn consume_token(&mut self, kinds: &[TokenKind]) -> Result<Decl> {
        let token = self.current()?;
        if !kinds.contains(&token.kind) {
            return Err(self.syntax_error());
        }
        let decl = Decl::new(token);
        self.index += 1;
        Ok(decl)
    }

    /// A syntax error naming the offending lexeme and cursor position.
    pub(super) fn syntax_error(&self) -> Error {
        match self.tokens.get(self.index) {
            Some(token) => Error::SyntaxError {
                position: self.index,
                lexeme: token.lexeme.clone(),
            },
            None => Error::UnexpectedEndOfInput,
        }
    }
}
