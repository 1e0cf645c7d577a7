//! Schema-definition front end for the quarry embedded SQL engine.
//!
//! A hand-written lexer turns statement text into tokens, a cursor-based
//! recursive-descent parser builds a generic declaration tree for
//! `CREATE TABLE`, and a catalog executor validates the tree and registers
//! the table definition in the engine's catalog. Row storage and the
//! network session layer live elsewhere; results flow out through the
//! narrow `quarry_protocol::Connection` contract.

mod catalog;
mod config;
mod engine;
mod error;
mod execution;
mod parsing;
mod types;

pub use catalog::{Catalog, Relation};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{Error, Result};
pub use parsing::{parse_sql, Decl, Lexer, Parser, Statement, Token, TokenKind};
pub use types::schema::{Attribute, Table, Tables};
pub use types::value::Value;
