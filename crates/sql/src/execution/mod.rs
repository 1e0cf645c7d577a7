//! Statement executors, dispatched by token kind.
//!
//! The registry maps a declaration's token kind to its handler. It is built
//! once when the engine starts and never mutated afterwards, so new
//! statement kinds and clause handlers plug in without touching existing
//! call sites.

mod create_table;

use std::collections::HashMap;

use quarry_protocol::Connection;

use crate::engine::Engine;
use crate::error::Result;
use crate::parsing::{Decl, TokenKind};

/// A statement or clause executor.
pub(crate) type OpExecutor = fn(&Engine, &Decl, &mut dyn Connection) -> Result<()>;

/// Builds the executor registry.
pub(crate) fn registry() -> HashMap<TokenKind, OpExecutor> {
    let mut ops: HashMap<TokenKind, OpExecutor> = HashMap::new();
    ops.insert(TokenKind::Create, create_table::create_executor);
    ops.insert(TokenKind::Table, create_table::create_table_executor);
    ops.insert(TokenKind::If, create_table::if_not_exists_executor);
    ops
}
