//! Narrow contract between the SQL engine core and the session layer.
//!
//! The engine reports statement outcomes through the [`Connection`] trait
//! and never touches the transport itself; the session layer owns sockets,
//! framing, and retries. Errors are not written here; they propagate to the
//! caller as the statement's outcome, so a failed statement leaves no
//! partial result on the wire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("connection closed")]
    ConnectionClosed,
}

/// The outcome of a completed statement, as relayed to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementResult {
    /// Number of result rows returned.
    pub rows_returned: u64,
    /// Number of rows affected by the statement.
    pub rows_affected: u64,
}

/// A sink for statement results.
///
/// Schema changes report the conventional "zero rows returned, one row
/// affected".
pub trait Connection {
    /// Reports the completion of a statement.
    fn write_result(&mut self, rows_returned: u64, rows_affected: u64) -> Result<()>;
}

/// An in-memory connection that buffers results, for embedding and tests.
#[derive(Debug, Default)]
pub struct BufferedConnection {
    results: Vec<StatementResult>,
    closed: bool,
}

impl BufferedConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// All results written so far, in order.
    pub fn results(&self) -> &[StatementResult] {
        &self.results
    }

    /// Closes the connection; further writes fail.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl Connection for BufferedConnection {
    fn write_result(&mut self, rows_returned: u64, rows_affected: u64) -> Result<()> {
        if self.closed {
            return Err(Error::ConnectionClosed);
        }
        self.results.push(StatementResult { rows_returned, rows_affected });
        Ok(())
    }
}
