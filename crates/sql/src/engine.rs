//! The engine facade: parser in front, executor registry and catalog behind.

use std::collections::HashMap;

use parking_lot::Mutex;
use quarry_protocol::Connection;

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::execution::{self, OpExecutor};
use crate::parsing::{self, Parser, Statement, Token, TokenKind};
use crate::types::schema::Table;

/// The schema engine.
///
/// One engine instance is shared across sessions. Parsing touches no shared
/// state; catalog mutation is serialized by a whole-catalog mutex, which is
/// coarse but sufficient since every operation here is in-memory and
/// CPU-bound. The executor registry is populated once at construction and
/// read-only afterwards.
pub struct Engine {
    config: EngineConfig,
    catalog: Mutex<Catalog>,
    ops: HashMap<TokenKind, OpExecutor>,
}

impl Engine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            config,
            catalog: Mutex::new(Catalog::new()),
            ops: execution::registry(),
        }
    }

    /// Tokenizes, parses, and executes a single statement.
    pub fn execute(&self, statement: &str, conn: &mut dyn Connection) -> Result<()> {
        let parsed = parsing::parse_sql(statement)?;
        self.run(&parsed, conn)
    }

    /// Parses and executes a statement from an already-tokenized stream.
    pub fn execute_tokens(&self, tokens: Vec<Token>, conn: &mut dyn Connection) -> Result<()> {
        let parsed = Parser::parse(tokens)?;
        self.run(&parsed, conn)
    }

    fn run(&self, statement: &Statement, conn: &mut dyn Connection) -> Result<()> {
        for decl in &statement.decls {
            tracing::debug!(token = %decl.lexeme, "executing statement");
            let executor = self.op(decl.kind).ok_or_else(|| {
                Error::MalformedQuery(format!("no executor for '{}'", decl.lexeme))
            })?;
            executor(self, decl, conn)?;
        }
        Ok(())
    }

    /// The registered executor for a token kind.
    pub(crate) fn op(&self, kind: TokenKind) -> Option<OpExecutor> {
        self.ops.get(&kind).copied()
    }

    pub(crate) fn catalog(&self) -> &Mutex<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A snapshot of the table definition registered under `name`.
    pub fn table(&self, name: &str) -> Option<Table> {
        self.catalog
            .lock()
            .lookup(name)
            .map(|relation| relation.table().clone())
    }

    /// All registered table names.
    pub fn tables(&self) -> Vec<String> {
        self.catalog.lock().list_tables()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
