//! Hand-written scanner producing the token stream the parser consumes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Structural markers
    OpenParen,
    CloseParen,
    Comma,
    Period,
    Semicolon,
    // Operators, lexed for the wider engine; the CREATE grammar rejects them
    Star,
    Equal,
    Plus,
    Minus,
    Slash,
    // Keywords
    Create,
    Table,
    If,
    Not,
    Exists,
    Primary,
    Key,
    Unique,
    Autoincrement,
    With,
    Time,
    Zone,
    Default,
    Null,
    As,
    // Literals
    False,
    Localtimestamp,
    String,
    Number,
    /// Bare or double-quoted words: table names, column names, type names.
    Identifier,
}

/// A lexical token: a kind plus the original source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token { kind, lexeme: lexeme.into() }
    }
}

/// Maps a word to its keyword kind, case-insensitively.
fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word.to_ascii_lowercase().as_str() {
        "create" => TokenKind::Create,
        "table" => TokenKind::Table,
        "if" => TokenKind::If,
        "not" => TokenKind::Not,
        "exists" => TokenKind::Exists,
        "primary" => TokenKind::Primary,
        "key" => TokenKind::Key,
        "unique" => TokenKind::Unique,
        "autoincrement" => TokenKind::Autoincrement,
        "with" => TokenKind::With,
        "time" => TokenKind::Time,
        "zone" => TokenKind::Zone,
        "default" => TokenKind::Default,
        "null" => TokenKind::Null,
        "as" => TokenKind::As,
        "false" => TokenKind::False,
        "localtimestamp" => TokenKind::Localtimestamp,
        _ => return None,
    };
    Some(kind)
}

/// Scanner over statement text.
///
/// Keywords are recognized case-insensitively. Double-quoted words become
/// identifiers with the quotes resolved; single-quoted text becomes a string
/// literal with the quotes stripped.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer { chars: input.chars().collect(), position: 0 }
    }

    /// Scans the entire input into tokens.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scan_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.position += 1;
        }
    }

    fn symbol(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        self.position += 1;
        Token::new(kind, lexeme)
    }

    fn scan_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            '(' => self.symbol(TokenKind::OpenParen, "("),
            ')' => self.symbol(TokenKind::CloseParen, ")"),
            ',' => self.symbol(TokenKind::Comma, ","),
            '.' => self.symbol(TokenKind::Period, "."),
            ';' => self.symbol(TokenKind::Semicolon, ";"),
            '*' => self.symbol(TokenKind::Star, "*"),
            '=' => self.symbol(TokenKind::Equal, "="),
            '+' => self.symbol(TokenKind::Plus, "+"),
            '-' => self.symbol(TokenKind::Minus, "-"),
            '/' => self.symbol(TokenKind::Slash, "/"),
            '\'' => self.scan_quoted(TokenKind::String, '\'')?,
            '"' => self.scan_quoted(TokenKind::Identifier, '"')?,
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_word(),
            other => return Err(Error::UnexpectedCharacter(other)),
        };
        Ok(Some(token))
    }

    // Quoted text; the lexeme is the inner text without the quotes.
    fn scan_quoted(&mut self, kind: TokenKind, quote: char) -> Result<Token> {
        self.position += 1;
        let start = self.position;
        while let Some(c) = self.peek() {
            if c == quote {
                let lexeme: String = self.chars[start..self.position].iter().collect();
                self.position += 1;
                return Ok(Token::new(kind, lexeme));
            }
            self.position += 1;
        }
        Err(Error::UnterminatedString)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.position += 1;
        }
        // Fractional part only when a digit follows the point, so "42."
        // lexes as a number and a period.
        if self.peek() == Some('.')
            && matches!(self.chars.get(self.position + 1), Some(c) if c.is_ascii_digit())
        {
            self.position += 1;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.position += 1;
            }
        }
        let lexeme: String = self.chars[start..self.position].iter().collect();
        Token::new(TokenKind::Number, lexeme)
    }

    fn scan_word(&mut self) -> Token {
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.position += 1;
        }
        let lexeme: String = self.chars[start..self.position].iter().collect();
        match keyword(&lexeme) {
            Some(kind) => Token::new(kind, lexeme),
            None => Token::new(TokenKind::Identifier, lexeme),
        }
    }
}
