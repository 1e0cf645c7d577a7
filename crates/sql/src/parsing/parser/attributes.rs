//! Shared identifier, alias, and type primitives used across statement
//! kinds.

use super::Parser;
use crate::error::Result;
use crate::parsing::decl::Decl;
use crate::parsing::lexer::TokenKind;

impl Parser {
    /// Parses a bare or quoted name with an optional `AS` alias, nested as
    /// `name -> AS -> alias`.
    pub(super) fn parse_attribute(&mut self) -> Result<Decl> {
        let mut attribute = self.parse_quoted_token()?;
        if self.is(TokenKind::As) {
            let mut as_decl = self.consume_token(&[TokenKind::As])?;
            let alias = self.parse_quoted_token()?;
            as_decl.add(alias);
            attribute.add(as_decl);
        }
        Ok(attribute)
    }

    /// Parses a name token. Quoting is resolved by the tokenizer, so both
    /// bare identifiers and quoted names arrive here as a single token.
    pub(super) fn parse_quoted_token(&mut self) -> Result<Decl> {
        self.consume_token(&[TokenKind::Identifier, TokenKind::String])
    }

    /// Parses a column type, with an optional parenthesized size such as
    /// `VARCHAR(255)`.
    pub(super) fn parse_type(&mut self) -> Result<Decl> {
        let mut type_decl = self.consume_token(&[TokenKind::Identifier])?;
        if self.is(TokenKind::OpenParen) {
            self.consume_token(&[TokenKind::OpenParen])?;
            let size = self.consume_token(&[TokenKind::Number])?;
            type_decl.add(size);
            self.consume_token(&[TokenKind::CloseParen])?;
        }
        Ok(type_decl)
    }
}
