//! An embeddable, in-memory relational engine for a small SQL-like dialect.
//!
//! Statements go through `tokenize` → `parse` → `execute` against a [Catalog]
//! of databases, tables and rows. [Catalog::run] does all three at once.

pub mod ast;
pub mod catalog;
pub mod column;
pub mod data_type;
pub mod database;
pub mod error;
pub mod executor;
pub mod parser;
pub mod shared;
pub mod table;
pub mod tokenizer;
pub mod value;

pub use ast::{Command, Literal, Projection};
pub use catalog::Catalog;
pub use column::{Column, ColumnDef};
pub use data_type::ColumnType;
pub use database::Database;
pub use error::{ContextError, EngineError, Error, ObjectKind, SchemaError, ValidationError};
pub use executor::{Output, execute, query};
pub use parser::{SyntaxError, parse};
pub use shared::SharedCatalog;
pub use table::{QueryResult, Table};
pub use tokenizer::{LexError, Token, TokenKind, tokenize};
pub use value::{Row, Value};
