use crate::column::ColumnDef;
use crate::error::{EngineError, ObjectKind, SchemaError, check_name};
use crate::table::Table;

/// A named collection of tables.
///
/// Tables are kept in creation order, which is the order `SHOW TABLES` lists them in.
#[derive(Debug, Clone)]
pub struct Database {
    pub name: String,
    tables: Vec<Table>,
}

impl Database {
    /// Creates a new, empty database.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tables.iter().position(|table| table.name == name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Creates a new table in the database.
    ///
    /// # Errors
    /// - [SchemaError::InvalidName] for an empty or dotted table name.
    /// - [SchemaError::AlreadyExists] if a table with the same name already exists.
    /// - Any error from [Table::check_new_columns].
    pub fn create_table(&mut self, name: &str, columns: Vec<ColumnDef>) -> Result<(), EngineError> {
        check_name(ObjectKind::Table, name)?;
        if self.contains_table(name) {
            return Err(SchemaError::already_exists(ObjectKind::Table, name).into());
        }
        Table::check_new_columns(None, &columns, name)?;
        self.tables.push(Table::new(name.to_string(), columns));
        Ok(())
    }

    /// Removes a table from the database by its name.
    pub fn drop_table(&mut self, name: &str) -> Result<Table, SchemaError> {
        let idx = self
            .position(name)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Table, name))?;
        Ok(self.tables.remove(idx))
    }

    pub fn rename_table(&mut self, old: &str, new: &str) -> Result<(), SchemaError> {
        let idx = self
            .position(old)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Table, old))?;
        check_name(ObjectKind::Table, new)?;
        if self.contains_table(new) {
            return Err(SchemaError::already_exists(ObjectKind::Table, new));
        }
        self.tables[idx].name = new.to_string();
        Ok(())
    }

    /// Retrieves a reference to a table by name.
    pub fn get_table(&self, name: &str) -> Result<&Table, SchemaError> {
        self.tables
            .iter()
            .find(|table| table.name == name)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Table, name))
    }

    /// Retrieves a mutable reference to a table by name.
    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table, SchemaError> {
        self.tables
            .iter_mut()
            .find(|table| table.name == name)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Table, name))
    }

    /// Returns the names of all tables, in creation order.
    pub fn list_tables(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.name.clone()).collect()
    }
}
