//! Common test utilities for schema engine integration tests.
#![allow(dead_code)]

use quarry_protocol::{BufferedConnection, StatementResult};
use quarry_sql::{Engine, EngineConfig, Error, Table};

/// Test context bundling an engine with a buffered connection.
pub struct TestContext {
    pub engine: Engine,
    pub conn: BufferedConnection,
}

impl TestContext {
    pub fn new() -> Self {
        TestContext {
            engine: Engine::new(),
            conn: BufferedConnection::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        TestContext {
            engine: Engine::with_config(config),
            conn: BufferedConnection::new(),
        }
    }

    /// Executes a statement, panicking on failure.
    pub fn exec(&mut self, sql: &str) {
        if let Err(err) = self.engine.execute(sql, &mut self.conn) {
            panic!("statement failed: {} - {}", sql, err);
        }
    }

    /// Executes a statement that must fail, returning the error.
    pub fn exec_err(&mut self, sql: &str) -> Error {
        match self.engine.execute(sql, &mut self.conn) {
            Ok(()) => panic!("statement unexpectedly succeeded: {}", sql),
            Err(err) => err,
        }
    }

    /// The most recent result written to the connection.
    pub fn last_result(&self) -> Option<StatementResult> {
        self.conn.results().last().copied()
    }

    /// How many results have been written to the connection.
    pub fn results_written(&self) -> usize {
        self.conn.results().len()
    }

    /// The registered definition for `name`, panicking if absent.
    pub fn table(&self, name: &str) -> Table {
        self.engine
            .table(name)
            .unwrap_or_else(|| panic!("table {} not found", name))
    }
}

pub fn setup_test() -> TestContext {
    TestContext::new()
}
