//! Default-literal values attached to column definitions.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parsing::{Decl, TokenKind};

/// A literal value a column may declare as its default.
///
/// `LocalTimestamp` is a marker resolved at insert time by the DML path; the
/// schema layer only records that the default is the statement-local
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Str(String),
    Number(Decimal),
    LocalTimestamp,
}

impl Value {
    /// Converts a parsed default-value declaration into a value.
    pub fn from_decl(decl: &Decl) -> Result<Value> {
        match decl.kind {
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::String => Ok(Value::Str(decl.lexeme.clone())),
            TokenKind::Number => {
                let number = decl.lexeme.parse::<Decimal>().map_err(|_| {
                    Error::InvalidValue(format!("invalid numeric literal '{}'", decl.lexeme))
                })?;
                Ok(Value::Number(number))
            }
            TokenKind::Localtimestamp => Ok(Value::LocalTimestamp),
            _ => Err(Error::InvalidValue(format!(
                "'{}' is not a default literal",
                decl.lexeme
            ))),
        }
    }
}

// Renders the SQL literal form, so a schema can be written back out as a
// CREATE TABLE statement.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "TRUE"),
            Value::Bool(false) => write!(f, "FALSE"),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::LocalTimestamp => write!(f, "LOCALTIMESTAMP"),
        }
    }
}
