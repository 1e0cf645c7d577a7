//! Statement parsing: lexer, declaration tree, and recursive-descent parser.

mod decl;
mod lexer;
mod parser;

pub use decl::{Decl, Statement};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Tokenizes and parses a single SQL statement.
pub fn parse_sql(input: &str) -> Result<Statement> {
    let tokens = Lexer::new(input).tokenize()?;
    Parser::parse(tokens)
}
