//! CREATE TABLE execution: declaration-tree validation and catalog insert.

use quarry_protocol::Connection;

use crate::catalog::Relation;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::parsing::{Decl, TokenKind};
use crate::types::schema::{Attribute, Table};

/// Executes a `CREATE` declaration by dispatching on its first child.
pub(crate) fn create_executor(
    engine: &Engine,
    decl: &Decl,
    conn: &mut dyn Connection,
) -> Result<()> {
    let target = decl
        .children
        .first()
        .ok_or_else(|| Error::MalformedQuery("CREATE declaration has no target".into()))?;
    let executor = engine
        .op(target.kind)
        .ok_or_else(|| Error::MalformedQuery(format!("no executor for '{}'", target.lexeme)))?;
    executor(engine, target, conn)
}

/// Validates an `IF -> NOT -> EXISTS` chain.
///
/// The clause is carried in the declaration tree but does not suppress the
/// duplicate-table check: a CREATE for an existing name still fails.
pub(crate) fn if_not_exists_executor(
    _engine: &Engine,
    decl: &Decl,
    _conn: &mut dyn Connection,
) -> Result<()> {
    let not_decl = decl
        .children
        .first()
        .filter(|child| child.kind == TokenKind::Not)
        .ok_or_else(|| Error::MalformedQuery("IF clause without NOT".into()))?;
    not_decl
        .children
        .first()
        .filter(|child| child.kind == TokenKind::Exists)
        .ok_or_else(|| Error::MalformedQuery("IF NOT clause without EXISTS".into()))?;
    Ok(())
}

/// Builds a table from a parsed table declaration and registers it.
///
/// The existence check and the insertion happen under one catalog lock, so
/// two concurrent CREATEs for the same name cannot both pass the check. Any
/// failure aborts the whole operation; no partial table is ever inserted.
pub(crate) fn create_table_executor(
    engine: &Engine,
    decl: &Decl,
    conn: &mut dyn Connection,
) -> Result<()> {
    if decl.children.is_empty() {
        return Err(Error::MalformedQuery("table declaration is empty".into()));
    }

    // Leading children with registered handlers are clause pre-processing,
    // currently the IF NOT EXISTS chain. The first child without a handler
    // is the table name.
    let mut index = 0;
    while index < decl.children.len() {
        match engine.op(decl.children[index].kind) {
            Some(executor) => executor(engine, &decl.children[index], conn)?,
            None => break,
        }
        index += 1;
    }

    let name_decl = decl
        .children
        .get(index)
        .ok_or_else(|| Error::MalformedQuery("table declaration has no name".into()))?;

    let mut catalog = engine.catalog().lock();
    if catalog.lookup(&name_decl.lexeme).is_some() {
        return Err(Error::DuplicateTable(name_decl.lexeme.clone()));
    }

    let mut table = Table::from_decl(name_decl);
    for child in &decl.children[index + 1..] {
        let attribute = Attribute::from_decl(child)?;
        table.add_attribute(attribute)?;
    }

    let max = engine.config().max_columns_per_table;
    if table.attributes().len() > max {
        return Err(Error::TooManyColumns { name: table.name().into(), max });
    }

    tracing::debug!(
        table = %table.name(),
        columns = table.attributes().len(),
        "registering table"
    );
    let name = table.name().to_string();
    catalog.insert(name, Relation::new(table));
    drop(catalog);

    // Schema-change convention: no rows returned, one row affected.
    conn.write_result(0, 1)?;
    Ok(())
}
