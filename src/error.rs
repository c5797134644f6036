//! Error families surfaced by the engine.
//!
//! Lexing and parsing failures live next to their components
//! ([crate::tokenizer::LexError], [crate::parser::SyntaxError]); everything the
//! catalog can reject is one of the families below, wrapped in [EngineError].

use std::fmt;

use thiserror::Error;

use crate::parser::SyntaxError;
use crate::tokenizer::LexError;

/// The kind of catalog object an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Database,
    Table,
    Column,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Database => "database",
            Self::Table => "table",
            Self::Column => "column",
        };
        f.write_str(kind)
    }
}

/// Structural conflicts in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: ObjectKind, name: String },

    #[error("{kind} '{name}' does not exist")]
    NotFound { kind: ObjectKind, name: String },

    #[error("invalid {kind} name '{name}'")]
    InvalidName { kind: ObjectKind, name: String },
}

/// Value and type conformance failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("table '{table}' has {expected} columns but {found} were given")]
    ColumnCountMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    #[error("columns of table '{table}' are {expected:?}, got {found:?}")]
    ColumnMismatch {
        table: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("value for column '{column}' is {actual} characters long, limit is {max}")]
    ValueTooLong {
        column: String,
        max: usize,
        actual: usize,
    },

    #[error("column '{column}' expects {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },

    #[error("column '{column}' has no default value")]
    NoDefault { column: String },

    #[error("VARCHAR length must be between 1 and 255, got {length}")]
    InvalidLength { length: u32 },

    #[error("table '{table}' must keep at least one column")]
    EmptySchema { table: String },
}

/// Failures caused by the session context rather than by the statement itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("no database selected, run USE <database> first")]
    NoActiveDatabase,

    #[error("database '{name}' is in use, run USE NONE first")]
    DatabaseInUse { name: String },
}

/// Every failure a catalog operation can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Any failure of the text → tokens → command → catalog pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl SchemaError {
    pub(crate) fn not_found(kind: ObjectKind, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn already_exists(kind: ObjectKind, name: &str) -> Self {
        Self::AlreadyExists {
            kind,
            name: name.to_string(),
        }
    }
}

/// Rejects empty names and names containing `.`.
pub(crate) fn check_name(kind: ObjectKind, name: &str) -> Result<(), SchemaError> {
    if name.trim().is_empty() || name.contains('.') {
        return Err(SchemaError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}
