//! Dispatch from a parsed [Command] to the [Catalog] operation it names.

use std::fmt;

use crate::ast::Command;
use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::table::QueryResult;

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The command changed the catalog and returns nothing.
    Done,
    Databases(Vec<String>),
    Tables(Vec<String>),
    CurrentDatabase(String),
    Rows(QueryResult),
}

/// Executes any command, forwarding its arguments to exactly one catalog operation.
///
/// Read-only commands are served by [query].
pub fn execute(catalog: &mut Catalog, command: Command) -> Result<Output, EngineError> {
    tracing::debug!(?command, "executing");
    match command {
        Command::CreateDatabase(create) => catalog.create_database(&create.name)?,
        Command::DropDatabase(drop) => catalog.drop_database(&drop.name)?,
        Command::UseDatabase(use_db) => catalog.use_database(&use_db.name)?,
        Command::ExitDatabase => catalog.exit_database(),
        Command::RenameDatabase(rename) => catalog.rename_database(&rename.old, &rename.new)?,
        Command::CreateTable(create) => catalog.create_table(&create.name, create.columns)?,
        Command::DropTable(drop) => catalog.drop_table(&drop.name)?,
        Command::RenameTable(rename) => catalog.rename_table(&rename.old, &rename.new)?,
        Command::TruncateTable(truncate) => catalog.truncate_table(&truncate.table)?,
        Command::Insert(insert) => catalog.insert(&insert.table, &insert.columns, &insert.values)?,
        Command::AddColumns(add) => {
            catalog.add_columns(&add.table, add.columns, add.defaults.as_deref())?
        }
        Command::RemoveColumns(remove) => catalog.remove_columns(&remove.table, &remove.columns)?,
        Command::RenameColumn(rename) => {
            catalog.rename_column(&rename.table, &rename.old, &rename.new)?
        }
        Command::ModifyColumns(modify) => catalog.modify_columns(&modify.table, modify.columns)?,
        Command::SetDefault(set) => catalog.set_default(&set.table, &set.column, &set.value)?,
        Command::DropDefault(drop) => catalog.drop_default(&drop.table, &drop.column)?,
        Command::ShowDatabases
        | Command::ShowTables
        | Command::ShowCurrentDatabase
        | Command::Select(_) => return query(catalog, command),
    }
    Ok(Output::Done)
}

/// Executes a read-only command against a shared reference.
///
/// # Panics
/// If `command` mutates the catalog; callers check [Command::is_read_only] first.
pub fn query(catalog: &Catalog, command: Command) -> Result<Output, EngineError> {
    match command {
        Command::ShowDatabases => Ok(Output::Databases(catalog.list_databases())),
        Command::ShowTables => Ok(Output::Tables(catalog.list_tables()?)),
        Command::ShowCurrentDatabase => Ok(Output::CurrentDatabase(
            catalog.current_database_name()?.to_string(),
        )),
        Command::Select(select) => Ok(Output::Rows(
            catalog.select(&select.table, &select.projection)?,
        )),
        other => panic!("{other:?} is not a read-only command"),
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("OK"),
            Self::Databases(names) if names.is_empty() => f.write_str("no databases"),
            Self::Tables(names) if names.is_empty() => f.write_str("no tables"),
            Self::Databases(names) | Self::Tables(names) => f.write_str(&names.join("\n")),
            Self::CurrentDatabase(name) => f.write_str(name),
            Self::Rows(result) => write!(f, "{result}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CreateDatabase, Projection, Select, UseDatabase};
    use crate::error::ContextError;
    use crate::parser::parse;
    use crate::tokenizer::tokenize;

    fn run(catalog: &mut Catalog, sql: &str) -> Result<Output, EngineError> {
        let command = parse(tokenize(sql).unwrap()).unwrap();
        execute(catalog, command)
    }

    #[test]
    fn test_mutations_return_done() {
        let mut catalog = Catalog::new();

        let output = execute(
            &mut catalog,
            Command::CreateDatabase(CreateDatabase { name: "d".into() }),
        )
        .unwrap();
        assert_eq!(output, Output::Done);

        execute(&mut catalog, Command::UseDatabase(UseDatabase { name: "d".into() })).unwrap();
        assert_eq!(catalog.current_database_name(), Ok("d"));
    }

    #[test]
    fn test_show_commands() {
        let mut catalog = Catalog::new();
        run(&mut catalog, "CREATE DATABASE b;").unwrap();
        run(&mut catalog, "CREATE DATABASE a;").unwrap();

        assert_eq!(
            run(&mut catalog, "SHOW DATABASES;").unwrap(),
            Output::Databases(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            run(&mut catalog, "SHOW CURRENT DATABASE;"),
            Err(EngineError::Context(ContextError::NoActiveDatabase))
        );

        run(&mut catalog, "USE a;").unwrap();
        run(&mut catalog, "CREATE TABLE t (id INT);").unwrap();
        assert_eq!(
            run(&mut catalog, "SHOW CURRENT DATABASE;").unwrap(),
            Output::CurrentDatabase("a".into())
        );
        assert_eq!(
            run(&mut catalog, "SHOW TABLES;").unwrap(),
            Output::Tables(vec!["t".into()])
        );
    }

    #[test]
    fn test_errors_surface_unchanged() {
        let mut catalog = Catalog::new();
        run(&mut catalog, "CREATE DATABASE d;").unwrap();

        let direct = catalog.create_database("d").unwrap_err();
        let executed = run(&mut catalog, "CREATE DATABASE d;").unwrap_err();
        assert_eq!(direct, executed);
    }

    #[test]
    fn test_query_select() {
        let mut catalog = Catalog::new();
        for sql in [
            "CREATE DATABASE d;",
            "USE d;",
            "CREATE TABLE t (id INT, name VARCHAR(5));",
            "INSERT INTO t (name, id) VALUES ('x', 1);",
        ] {
            run(&mut catalog, sql).unwrap();
        }

        let output = query(
            &catalog,
            Command::Select(Select {
                table: "t".into(),
                projection: Projection::Star,
            }),
        )
        .unwrap();
        let Output::Rows(result) = output else {
            panic!("expected rows");
        };
        assert_eq!(result.columns, vec!["id", "name"]);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_query_rejects_mutations() {
        let catalog = Catalog::new();
        let _ = query(&catalog, Command::ExitDatabase);
    }

    #[test]
    fn test_output_display() {
        assert_eq!(Output::Done.to_string(), "OK");
        assert_eq!(Output::Tables(vec![]).to_string(), "no tables");
        assert_eq!(
            Output::Databases(vec!["a".into(), "b".into()]).to_string(),
            "a\nb"
        );
    }
}
