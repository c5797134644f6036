//! The command model: one variant per statement kind, each carrying only the
//! arguments that statement needs.

use crate::column::ColumnDef;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateDatabase(CreateDatabase),
    DropDatabase(DropDatabase),
    UseDatabase(UseDatabase),
    /// `USE NONE`
    ExitDatabase,
    RenameDatabase(RenameDatabase),
    ShowDatabases,
    ShowTables,
    ShowCurrentDatabase,
    CreateTable(CreateTable),
    DropTable(DropTable),
    RenameTable(RenameTable),
    TruncateTable(TruncateTable),
    Insert(Insert),
    AddColumns(AddColumns),
    RemoveColumns(RemoveColumns),
    RenameColumn(RenameColumn),
    ModifyColumns(ModifyColumns),
    SetDefault(SetDefault),
    DropDefault(DropDefault),
    Select(Select),
}

impl Command {
    /// Commands that only read the catalog.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::ShowDatabases | Self::ShowTables | Self::ShowCurrentDatabase | Self::Select(_)
        )
    }
}

/// A literal in a value position, not yet checked against any column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Number(i64),
    String(String),
    Null,
    /// The `DEFAULT` keyword: use the column's stored default.
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatabase {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropDatabase {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UseDatabase {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameDatabase {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameTable {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TruncateTable {
    pub table: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Literal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddColumns {
    pub table: String,
    pub columns: Vec<ColumnDef>,
    /// One entry per new column when a `DEFAULT (...)` clause was given.
    pub defaults: Option<Vec<Literal>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveColumns {
    pub table: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameColumn {
    pub table: String,
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModifyColumns {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetDefault {
    pub table: String,
    pub column: String,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropDefault {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Star,
    Columns(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub projection: Projection,
}
