//! `CREATE` statement grammar: table definitions and primary-key clauses.

use super::Parser;
use crate::error::{Error, Result};
use crate::parsing::decl::Decl;
use crate::parsing::lexer::TokenKind;

impl Parser {
    /// Parses a `CREATE ...` statement, dispatching on the token that
    /// follows `CREATE`. Only tables can be created here today; the dispatch
    /// is where index and view creation would plug in.
    pub(super) fn parse_create(&mut self) -> Result<Decl> {
        let mut create = Decl::new(self.current()?);
        self.advance()?;
        match self.current()?.kind {
            TokenKind::Table => {
                let table = self.parse_table()?;
                create.add(table);
            }
            _ => return Err(self.syntax_error()),
        }
        Ok(create)
    }

    /// Parses a table definition starting at the `TABLE` token.
    fn parse_table(&mut self) -> Result<Decl> {
        let mut table = self.consume_token(&[TokenKind::Table])?;

        // Optional IF NOT EXISTS, nested as IF -> NOT -> EXISTS.
        if self.is(TokenKind::If) {
            let mut if_decl = self.consume_token(&[TokenKind::If])?;
            if !self.is(TokenKind::Not) {
                return Err(self.syntax_error());
            }
            let mut not_decl = self.consume_token(&[TokenKind::Not])?;
            if !self.is(TokenKind::Exists) {
                return Err(self.syntax_error());
            }
            let exists_decl = self.consume_token(&[TokenKind::Exists])?;
            not_decl.add(exists_decl);
            if_decl.add(not_decl);
            table.add(if_decl);
        }

        // Table name, possibly quoted and possibly aliased.
        let name = self.parse_attribute()?;
        table.add(name);

        // The column list must open with a bracket; a missing bracket is a
        // more specific mistake than a generic syntax error.
        if !self.is(TokenKind::OpenParen) {
            return Err(Error::MissingTableDefinition);
        }
        self.consume_token(&[TokenKind::OpenParen])?;

        while self.index < self.tokens.len() {
            // A PRIMARY token at column position is a composite primary-key
            // clause. It is validated and dropped: rows are keyed internally
            // and key membership is read from inline constraints only.
            if self.is(TokenKind::Primary) {
                self.parse_primary_key()?;
                continue;
            }

            if self.is(TokenKind::CloseParen) {
                self.consume_token(&[TokenKind::CloseParen])?;
                break;
            }

            // New column: name, type, then constraints in any order until a
            // comma or the closing bracket. An unrecognized token here is a
            // hard parse error, never a silent end of the column.
            let mut column = self.parse_quoted_token()?;
            let mut column_type = self.parse_type()?;
            let mut constraints = Vec::new();

            while self.is_not(&[TokenKind::CloseParen, TokenKind::Comma]) {
                match self.current()?.kind {
                    TokenKind::Unique => {
                        constraints.push(self.consume_token(&[TokenKind::Unique])?);
                    }
                    TokenKind::Not => {
                        self.is_next(TokenKind::Null)?;
                        let mut not_decl = self.consume_token(&[TokenKind::Not])?;
                        let null_decl = self.consume_token(&[TokenKind::Null])?;
                        not_decl.add(null_decl);
                        constraints.push(not_decl);
                    }
                    TokenKind::Primary => {
                        self.is_next(TokenKind::Key)?;
                        let mut primary = self.consume_token(&[TokenKind::Primary])?;
                        let key = self.consume_token(&[TokenKind::Key])?;
                        primary.add(key);
                        constraints.push(primary);
                    }
                    TokenKind::Autoincrement => {
                        constraints.push(self.consume_token(&[TokenKind::Autoincrement])?);
                    }
                    TokenKind::With => {
                        // WITH TIME ZONE is only legal after a timestamp type.
                        if !column_type.lexeme.eq_ignore_ascii_case("timestamp") {
                            return Err(self.syntax_error());
                        }
                        let mut with = self.consume_token(&[TokenKind::With])?;
                        let mut time = self.consume_token(&[TokenKind::Time])?;
                        let zone = self.consume_token(&[TokenKind::Zone])?;
                        time.add(zone);
                        with.add(time);
                        column_type.add(with);
                    }
                    TokenKind::Default => {
                        let mut default = self.consume_token(&[TokenKind::Default])?;
                        let value = self.consume_token(&[
                            TokenKind::False,
                            TokenKind::String,
                            TokenKind::Number,
                            TokenKind::Localtimestamp,
                        ])?;
                        default.add(value);
                        constraints.push(default);
                    }
                    _ => return Err(self.syntax_error()),
                }
            }

            column.add(column_type);
            for constraint in constraints {
                column.add(constraint);
            }
            table.add(column);

            // The constraint loop only exits on a comma or closing bracket.
            let separator = self.consume_token(&[TokenKind::Comma, TokenKind::CloseParen])?;
            if separator.kind == TokenKind::CloseParen {
                break;
            }
        }

        Ok(table)
    }

    /// Parses a composite primary-key clause: `PRIMARY KEY (name [, ...])`.
    /// At least one column name is required.
    fn parse_primary_key(&mut self) -> Result<Decl> {
        let mut primary = self.consume_token(&[TokenKind::Primary])?;
        let key = self.consume_token(&[TokenKind::Key])?;
        primary.add(key);
        self.consume_token(&[TokenKind::OpenParen])?;

        loop {
            let name = self.parse_quoted_token()?;
            primary.add(name);
            let separator = self.consume_token(&[TokenKind::Comma, TokenKind::CloseParen])?;
            if separator.kind == TokenKind::CloseParen {
                break;
            }
        }

        Ok(primary)
    }
}
