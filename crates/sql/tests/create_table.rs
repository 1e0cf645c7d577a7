//! CREATE TABLE integration tests, from statement text through catalog
//! registration.

mod common;

use std::sync::Arc;
use std::thread;

use common::{setup_test, TestContext};
use quarry_protocol::{BufferedConnection, StatementResult};
use quarry_sql::{Engine, EngineConfig, Error, Value};
use rust_decimal::Decimal;

#[test]
fn test_create_table_registers_columns_in_order() {
    let mut ctx = setup_test();
    ctx.exec(
        "CREATE TABLE users (
            id INT PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(255) NOT NULL,
            email TEXT UNIQUE
        )",
    );

    let table = ctx.table("users");
    let names: Vec<_> = table
        .attributes()
        .iter()
        .map(|attribute| attribute.name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "name", "email"]);

    assert!(table.attributes()[0].primary_key);
    assert!(table.attributes()[0].autoincrement);
    assert!(!table.attributes()[1].nullable);
    assert_eq!(table.attributes()[1].size, Some(255));
    assert!(table.attributes()[2].unique);

    // Schema changes report zero rows returned, one row affected.
    assert_eq!(
        ctx.last_result(),
        Some(StatementResult { rows_returned: 0, rows_affected: 1 })
    );
}

#[test]
fn test_duplicate_table_is_rejected() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE t (id INT)");

    let err = ctx.exec_err("CREATE TABLE t (id INT)");
    assert_eq!(err, Error::DuplicateTable("t".into()));

    assert_eq!(ctx.engine.tables(), vec!["t"]);
    assert_eq!(ctx.results_written(), 1);
}

// The IF NOT EXISTS clause is carried through the declaration tree and its
// handler runs, but this engine does not suppress the duplicate error.
#[test]
fn test_if_not_exists_parses_but_duplicate_still_fires() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE IF NOT EXISTS t (id INT)");
    assert!(ctx.engine.table("t").is_some());

    let err = ctx.exec_err("CREATE TABLE IF NOT EXISTS t (id INT)");
    assert_eq!(err, Error::DuplicateTable("t".into()));
}

#[test]
fn test_constraint_order_is_insensitive() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE a (id INT UNIQUE NOT NULL)");
    ctx.exec("CREATE TABLE b (id INT NOT NULL UNIQUE)");

    assert_eq!(ctx.table("a").attributes(), ctx.table("b").attributes());
}

#[test]
fn test_with_time_zone_requires_timestamp_type() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE ok (created TIMESTAMP WITH TIME ZONE)");
    assert!(ctx.table("ok").attributes()[0].with_time_zone);

    let err = ctx.exec_err("CREATE TABLE bad (created INT WITH TIME ZONE)");
    match err {
        Error::SyntaxError { lexeme, .. } => assert_eq!(lexeme, "WITH"),
        other => panic!("expected a syntax error, got {:?}", other),
    }
    assert!(ctx.engine.table("bad").is_none());
}

#[test]
fn test_missing_table_definition() {
    let mut ctx = setup_test();
    let err = ctx.exec_err("CREATE TABLE t id INT)");
    assert_eq!(err, Error::MissingTableDefinition);
}

#[test]
fn test_empty_composite_primary_key_is_rejected() {
    let mut ctx = setup_test();
    let err = ctx.exec_err("CREATE TABLE t (PRIMARY KEY ())");
    assert!(matches!(err, Error::SyntaxError { .. }));
}

// The composite clause is validated in final position but the schema keys
// rows internally; it does not mark the attributes.
#[test]
fn test_composite_primary_key_is_not_materialized() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE t (a INT, b INT, PRIMARY KEY (a, b))");

    let table = ctx.table("t");
    assert_eq!(table.attributes().len(), 2);
    assert!(table.attributes().iter().all(|a| !a.primary_key));
}

#[test]
fn test_default_literals() {
    let mut ctx = setup_test();
    ctx.exec(
        "CREATE TABLE t (
            active BOOLEAN DEFAULT FALSE,
            label TEXT DEFAULT 'new',
            score INT DEFAULT 42,
            created TIMESTAMP DEFAULT LOCALTIMESTAMP
        )",
    );

    let table = ctx.table("t");
    let defaults: Vec<_> = table
        .attributes()
        .iter()
        .map(|attribute| attribute.default.clone())
        .collect();
    assert_eq!(
        defaults,
        vec![
            Some(Value::Bool(false)),
            Some(Value::Str("new".into())),
            Some(Value::Number(Decimal::from(42))),
            Some(Value::LocalTimestamp),
        ]
    );
}

#[test]
fn test_default_rejects_a_non_literal() {
    let mut ctx = setup_test();
    let err = ctx.exec_err("CREATE TABLE t (id INT DEFAULT +)");
    match err {
        Error::SyntaxError { lexeme, .. } => assert_eq!(lexeme, "+"),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

// TRUE is not in the DEFAULT literal set, so it arrives as a plain
// identifier and fails the consume.
#[test]
fn test_default_true_is_not_a_literal() {
    let mut ctx = setup_test();
    let err = ctx.exec_err("CREATE TABLE t (flag BOOLEAN DEFAULT true)");
    assert!(matches!(err, Error::SyntaxError { lexeme, .. } if lexeme == "true"));
}

#[test]
fn test_duplicate_column_aborts_the_whole_statement() {
    let mut ctx = setup_test();
    let err = ctx.exec_err("CREATE TABLE t (id INT, id TEXT)");
    assert_eq!(err, Error::DuplicateColumn("id".into()));

    // No partial table, no result written.
    assert!(ctx.engine.table("t").is_none());
    assert_eq!(ctx.results_written(), 0);
}

#[test]
fn test_column_limit_is_enforced() {
    let mut ctx = TestContext::with_config(EngineConfig::for_testing());
    let max = ctx.engine.config().max_columns_per_table;

    let columns: Vec<String> = (0..=max).map(|i| format!("c{} INT", i)).collect();
    let statement = format!("CREATE TABLE wide ({})", columns.join(", "));

    let err = ctx.exec_err(&statement);
    assert_eq!(err, Error::TooManyColumns { name: "wide".into(), max });
    assert!(ctx.engine.table("wide").is_none());
}

// A registered table serializes back to a CREATE TABLE statement that
// produces an equivalent definition when executed again.
#[test]
fn test_round_trip_serialization() {
    let mut ctx = setup_test();
    ctx.exec(
        "CREATE TABLE t (
            id INT PRIMARY KEY,
            name VARCHAR(64) NOT NULL UNIQUE,
            created TIMESTAMP WITH TIME ZONE DEFAULT LOCALTIMESTAMP,
            score INT DEFAULT 42,
            label TEXT DEFAULT 'x',
            active BOOLEAN DEFAULT FALSE
        )",
    );
    let table = ctx.table("t");

    let mut replay = setup_test();
    replay.exec(&table.to_string());

    assert_eq!(replay.table("t"), table);
}

#[test]
fn test_concurrent_creates_serialize() {
    let engine = Arc::new(Engine::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut conn = BufferedConnection::new();
                engine.execute("CREATE TABLE contested (id INT)", &mut conn)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let successes = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(successes, 1);
    for result in results.iter().filter(|result| result.is_err()) {
        assert!(matches!(result, Err(Error::DuplicateTable(name)) if name == "contested"));
    }
    assert_eq!(engine.tables(), vec!["contested"]);
}

#[test]
fn test_multiple_tables_coexist() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE users (id INT)");
    ctx.exec("CREATE TABLE orders (id INT, user_id INT)");

    let mut tables = ctx.engine.tables();
    tables.sort();
    assert_eq!(tables, vec!["orders", "users"]);
    assert_eq!(ctx.results_written(), 2);
}

#[test]
fn test_quoted_table_and_column_names() {
    let mut ctx = setup_test();
    ctx.exec("CREATE TABLE \"user data\" (\"full name\" TEXT NOT NULL)");

    let table = ctx.table("user data");
    assert_eq!(table.attributes()[0].name, "full name");
    assert!(!table.attributes()[0].nullable);
}
