//! The generic declaration tree produced by the parser.

use serde::{Deserialize, Serialize};

use super::lexer::{Token, TokenKind};

/// A node in the declaration tree.
///
/// Each node records the token it was built from and the grammar
/// constituents nested beneath it. Child order encodes grammar position and
/// is never re-sorted: a column node's children are its type first, then its
/// constraints in the order they were parsed. The parser owns and builds the
/// tree; the executor only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decl {
    pub kind: TokenKind,
    pub lexeme: String,
    pub children: Vec<Decl>,
}

impl Decl {
    /// Creates a leaf node from a token.
    pub fn new(token: &Token) -> Self {
        Decl {
            kind: token.kind,
            lexeme: token.lexeme.clone(),
            children: Vec::new(),
        }
    }

    /// Appends a grammar constituent.
    pub fn add(&mut self, child: Decl) {
        self.children.push(child);
    }

    /// Returns the first child of the given kind, if any.
    pub fn child_of_kind(&self, kind: TokenKind) -> Option<&Decl> {
        self.children.iter().find(|child| child.kind == kind)
    }
}

/// A parsed statement: the ordered top-level declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub decls: Vec<Decl>,
}
