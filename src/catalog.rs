use std::collections::HashMap;

use crate::ast::{Literal, Projection};
use crate::column::ColumnDef;
use crate::database::Database;
use crate::error::{ContextError, EngineError, Error, ObjectKind, SchemaError, check_name};
use crate::executor::{self, Output};
use crate::parser;
use crate::table::{QueryResult, Table};
use crate::tokenizer::tokenize;

/// The main entry point for the in-memory engine.
/// It owns every database and remembers which one table and row operations target.
#[derive(Debug, Default)]
pub struct Catalog {
    databases: HashMap<String, Database>,
    current: Option<String>,
}

impl Catalog {
    /// Creates a catalog with no databases and no current database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one statement from text: tokenize, parse, then execute.
    ///
    /// # Example
    /// ```
    /// use minirel::{Catalog, Output, Value};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.run("CREATE DATABASE shop;").unwrap();
    /// catalog.run("USE shop;").unwrap();
    /// catalog.run("CREATE TABLE items (id INT, label VARCHAR(10));").unwrap();
    /// catalog.run("INSERT INTO items (id, label) VALUES (1, 'lamp');").unwrap();
    ///
    /// let Output::Rows(result) = catalog.run("SELECT * FROM items;").unwrap() else {
    ///     panic!("SELECT returns rows");
    /// };
    /// assert_eq!(result.rows, vec![vec![Value::Int(1), Value::from("lamp")]]);
    /// ```
    pub fn run(&mut self, sql: &str) -> Result<Output, Error> {
        let tokens = tokenize(sql)?;
        let command = parser::parse(tokens)?;
        Ok(executor::execute(self, command)?)
    }

    fn database(&self) -> Result<&Database, EngineError> {
        let name = self.current.as_ref().ok_or(ContextError::NoActiveDatabase)?;
        self.databases
            .get(name)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Database, name).into())
    }

    fn database_mut(&mut self) -> Result<&mut Database, EngineError> {
        let name = self.current.as_ref().ok_or(ContextError::NoActiveDatabase)?;
        self.databases
            .get_mut(name)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Database, name).into())
    }

    fn table(&self, name: &str) -> Result<&Table, EngineError> {
        Ok(self.database()?.get_table(name)?)
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut Table, EngineError> {
        Ok(self.database_mut()?.get_table_mut(name)?)
    }

    // databases

    pub fn create_database(&mut self, name: &str) -> Result<(), EngineError> {
        check_name(ObjectKind::Database, name)?;
        if self.databases.contains_key(name) {
            return Err(SchemaError::already_exists(ObjectKind::Database, name).into());
        }
        self.databases.insert(name.to_string(), Database::new(name));
        tracing::info!(database = name, "created database");
        Ok(())
    }

    pub fn use_database(&mut self, name: &str) -> Result<(), EngineError> {
        if !self.databases.contains_key(name) {
            return Err(SchemaError::not_found(ObjectKind::Database, name).into());
        }
        self.current = Some(name.to_string());
        tracing::info!(database = name, "switched database");
        Ok(())
    }

    /// Clears the current database. Leaving when none is selected is a no-op.
    pub fn exit_database(&mut self) {
        if let Some(name) = self.current.take() {
            tracing::info!(database = %name, "left database");
        }
    }

    /// Removes a database, clearing the current database first if it is the one dropped.
    pub fn drop_database(&mut self, name: &str) -> Result<(), EngineError> {
        if !self.databases.contains_key(name) {
            return Err(SchemaError::not_found(ObjectKind::Database, name).into());
        }
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        self.databases.remove(name);
        tracing::info!(database = name, "dropped database");
        Ok(())
    }

    /// Renames a database. Only allowed while no database is current.
    pub fn rename_database(&mut self, old: &str, new: &str) -> Result<(), EngineError> {
        if let Some(current) = &self.current {
            return Err(ContextError::DatabaseInUse {
                name: current.clone(),
            }
            .into());
        }
        check_name(ObjectKind::Database, new)?;
        if self.databases.contains_key(new) {
            return Err(SchemaError::already_exists(ObjectKind::Database, new).into());
        }
        let mut database = self
            .databases
            .remove(old)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Database, old))?;
        database.name = new.to_string();
        self.databases.insert(new.to_string(), database);
        tracing::info!(from = old, to = new, "renamed database");
        Ok(())
    }

    /// All database names, sorted.
    pub fn list_databases(&self) -> Vec<String> {
        let mut names: Vec<String> = self.databases.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn current_database_name(&self) -> Result<&str, ContextError> {
        self.current.as_deref().ok_or(ContextError::NoActiveDatabase)
    }

    // tables

    pub fn create_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> Result<(), EngineError> {
        let database = self.database_mut()?;
        database.create_table(name, columns)?;
        tracing::info!(database = %database.name, table = name, "created table");
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> Result<(), EngineError> {
        let database = self.database_mut()?;
        database.drop_table(name)?;
        tracing::info!(database = %database.name, table = name, "dropped table");
        Ok(())
    }

    pub fn rename_table(&mut self, old: &str, new: &str) -> Result<(), EngineError> {
        self.database_mut()?.rename_table(old, new)?;
        tracing::info!(from = old, to = new, "renamed table");
        Ok(())
    }

    /// Table names of the current database, in creation order.
    pub fn list_tables(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.database()?.list_tables())
    }

    pub fn truncate_table(&mut self, name: &str) -> Result<(), EngineError> {
        let table = self.table_mut(name)?;
        let removed = table.row_count();
        table.truncate();
        tracing::info!(table = name, removed, "truncated table");
        Ok(())
    }

    // rows

    /// Inserts one row; `columns` must list every column in schema order.
    pub fn insert_row(
        &mut self,
        table: &str,
        columns: &[String],
        values: &[Literal],
    ) -> Result<(), EngineError> {
        self.table_mut(table)?.insert_row(columns, values)?;
        tracing::debug!(table, "inserted row");
        Ok(())
    }

    /// Inserts one row from a possibly partial, possibly reordered column list.
    /// See [Table::insert] for how omitted columns are filled.
    pub fn insert(
        &mut self,
        table: &str,
        columns: &[String],
        values: &[Literal],
    ) -> Result<(), EngineError> {
        self.table_mut(table)?.insert(columns, values)?;
        tracing::debug!(table, "inserted row");
        Ok(())
    }

    pub fn select(&self, table: &str, projection: &Projection) -> Result<QueryResult, EngineError> {
        let result = self.table(table)?.select(projection)?;
        tracing::debug!(table, rows = result.rows.len(), "selected rows");
        Ok(result)
    }

    /// Read access to a table of the current database.
    pub fn get_table(&self, name: &str) -> Result<&Table, EngineError> {
        self.table(name)
    }

    // columns

    pub fn add_columns(
        &mut self,
        table: &str,
        columns: Vec<ColumnDef>,
        defaults: Option<&[Literal]>,
    ) -> Result<(), EngineError> {
        let added = columns.len();
        self.table_mut(table)?.add_columns(columns, defaults)?;
        tracing::info!(table, added, "added columns");
        Ok(())
    }

    pub fn remove_columns(&mut self, table: &str, names: &[String]) -> Result<(), EngineError> {
        self.table_mut(table)?.remove_columns(names)?;
        tracing::info!(table, removed = ?names, "removed columns");
        Ok(())
    }

    pub fn rename_column(&mut self, table: &str, old: &str, new: &str) -> Result<(), EngineError> {
        self.table_mut(table)?.rename_column(old, new)?;
        tracing::info!(table, from = old, to = new, "renamed column");
        Ok(())
    }

    pub fn modify_columns(&mut self, table: &str, specs: Vec<ColumnDef>) -> Result<(), EngineError> {
        let modified = specs.len();
        self.table_mut(table)?.modify_columns(specs)?;
        tracing::info!(table, modified, "modified column types");
        Ok(())
    }

    pub fn set_default(
        &mut self,
        table: &str,
        column: &str,
        value: &Literal,
    ) -> Result<(), EngineError> {
        self.table_mut(table)?.set_default(column, value)?;
        tracing::info!(table, column, "set default");
        Ok(())
    }

    pub fn drop_default(&mut self, table: &str, column: &str) -> Result<(), EngineError> {
        self.table_mut(table)?.drop_default(column)?;
        tracing::info!(table, column, "dropped default");
        Ok(())
    }
}
