use std::sync::Arc;

use parking_lot::RwLock;

use crate::ast::Command;
use crate::catalog::Catalog;
use crate::error::{EngineError, Error};
use crate::executor::{self, Output};
use crate::parser;
use crate::tokenizer::tokenize;

/// A [Catalog] shared between threads.
///
/// Every mutating command holds the write lock for its whole execution, so a
/// column add and its backfill, or a type change and its validation, are never
/// observed half done. Read-only commands share the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn execute(&self, command: Command) -> Result<Output, EngineError> {
        if command.is_read_only() {
            executor::query(&self.inner.read(), command)
        } else {
            executor::execute(&mut self.inner.write(), command)
        }
    }

    /// Tokenizes and parses outside the lock, then executes.
    pub fn run(&self, sql: &str) -> Result<Output, Error> {
        let command = parser::parse(tokenize(sql)?)?;
        Ok(self.execute(command)?)
    }

    /// Runs `f` with shared access to the catalog.
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.inner.read())
    }
}
