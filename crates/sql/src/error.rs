//! Error types for the schema engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexer errors
    #[error("unexpected character '{0}' in statement")]
    UnexpectedCharacter(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    // Parser errors
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("syntax error near '{lexeme}' at token {position}")]
    SyntaxError { position: usize, lexeme: String },

    #[error("table name must be followed by a table definition")]
    MissingTableDefinition,

    // Executor errors
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error("table {0} already exists")]
    DuplicateTable(String),

    #[error("column {0} already exists")]
    DuplicateColumn(String),

    #[error("table {name} exceeds the limit of {max} columns")]
    TooManyColumns { name: String, max: usize },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    // Session errors
    #[error("protocol error: {0}")]
    Protocol(#[from] quarry_protocol::Error),
}
