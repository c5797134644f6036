use std::fmt;

use crate::ast::{Literal, Projection};
use crate::column::{Column, ColumnDef};
use crate::error::{EngineError, ObjectKind, SchemaError, ValidationError, check_name};
use crate::value::{Row, Value};

/// Represents the result of a `SELECT` query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The names of the columns included in the result set.
    pub columns: Vec<String>,
    /// The actual data, returned as a vector of rows, where each row is a vector of [Value].
    pub rows: Vec<Row>,
}

/// A named table stored column by column.
///
/// Each [Column] carries its own [ColumnDef], so the schema order and the
/// positional order of every row are the same vector: adding or removing a
/// column adds or removes that position in all rows at once.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates an empty table. Definitions are expected to have been checked
    /// with [Table::check_new_columns].
    pub fn new(name: String, defs: Vec<ColumnDef>) -> Self {
        Self {
            name,
            columns: defs.into_iter().map(Column::new).collect(),
            row_count: 0,
        }
    }

    /// Validates column definitions about to join this table (or a new table
    /// when `self` is `None`): valid names and types, no name used twice,
    /// case-insensitively, and at least one column.
    pub fn check_new_columns(
        existing: Option<&Table>,
        defs: &[ColumnDef],
        table: &str,
    ) -> Result<(), EngineError> {
        if defs.is_empty() {
            return Err(ValidationError::EmptySchema {
                table: table.to_string(),
            }
            .into());
        }
        for (i, def) in defs.iter().enumerate() {
            check_name(ObjectKind::Column, &def.name)?;
            def.column_type.validate()?;
            if let Some(default) = &def.default {
                def.check(default)?;
            }
            let clashes_existing = existing.is_some_and(|t| t.find_column(&def.name).is_some());
            let clashes_batch = defs[..i].iter().any(|other| other.is_named(&def.name));
            if clashes_existing || clashes_batch {
                return Err(SchemaError::already_exists(ObjectKind::Column, &def.name).into());
            }
        }
        Ok(())
    }

    /// The schema, in positional order.
    pub fn schema(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().map(|col| &col.def)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema().map(|def| def.name.clone()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Position of a column, matched case-insensitively.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.def.is_named(name))
    }

    fn column_index(&self, name: &str) -> Result<usize, SchemaError> {
        self.find_column(name)
            .ok_or_else(|| SchemaError::not_found(ObjectKind::Column, name))
    }

    pub fn get_col(&self, name: &str) -> Option<&Column> {
        self.find_column(name).map(|idx| &self.columns[idx])
    }

    pub fn get_row(&self, row_idx: usize) -> Option<Row> {
        if self.row_count <= row_idx {
            return None;
        }
        self.columns
            .iter()
            .map(|col| col.get(row_idx)) // -> Option<Value>
            .collect()
    }

    /// Every row, in insertion order.
    pub fn rows(&self) -> Vec<Row> {
        (0..self.row_count)
            .filter_map(|row_idx| self.get_row(row_idx))
            .collect()
    }

    /// Inserts one row. `columns` must name every column of the table in
    /// schema order; each literal is converted against its column before
    /// anything is stored.
    pub fn insert_row(&mut self, columns: &[String], values: &[Literal]) -> Result<(), EngineError> {
        if columns.len() != self.columns.len() {
            return Err(ValidationError::ColumnCountMismatch {
                table: self.name.clone(),
                expected: self.columns.len(),
                found: columns.len(),
            }
            .into());
        }
        let in_order = self
            .columns
            .iter()
            .zip(columns)
            .all(|(col, name)| col.def.is_named(name));
        if !in_order {
            return Err(ValidationError::ColumnMismatch {
                table: self.name.clone(),
                expected: self.column_names(),
                found: columns.to_vec(),
            }
            .into());
        }
        if values.len() != self.columns.len() {
            return Err(ValidationError::ColumnCountMismatch {
                table: self.name.clone(),
                expected: self.columns.len(),
                found: values.len(),
            }
            .into());
        }

        let row = self
            .columns
            .iter()
            .zip(values)
            .map(|(col, literal)| col.def.convert(literal))
            .collect::<Result<Vec<Value>, ValidationError>>()?;

        for (col, value) in self.columns.iter_mut().zip(row) {
            col.push(value)?;
        }
        self.row_count += 1;
        Ok(())
    }

    /// Inserts a row from a column list that may omit columns or list them out
    /// of order. Omitted columns receive `DEFAULT` when they have a stored
    /// default and `NULL` otherwise; the expanded row then goes through
    /// [Table::insert_row].
    pub fn insert(&mut self, columns: &[String], values: &[Literal]) -> Result<(), EngineError> {
        if columns.len() != values.len() {
            return Err(ValidationError::ColumnCountMismatch {
                table: self.name.clone(),
                expected: columns.len(),
                found: values.len(),
            }
            .into());
        }

        let mut slots: Vec<Option<Literal>> = vec![None; self.columns.len()];
        for (name, literal) in columns.iter().zip(values) {
            let idx = self.column_index(name)?;
            if slots[idx].is_some() {
                return Err(ValidationError::ColumnMismatch {
                    table: self.name.clone(),
                    expected: self.column_names(),
                    found: columns.to_vec(),
                }
                .into());
            }
            slots[idx] = Some(literal.clone());
        }

        let expanded: Vec<Literal> = slots
            .into_iter()
            .zip(&self.columns)
            .map(|(slot, col)| {
                slot.unwrap_or(match col.def.default {
                    Some(_) => Literal::Default,
                    None => Literal::Null,
                })
            })
            .collect();

        let schema_order = self.column_names();
        self.insert_row(&schema_order, &expanded)
    }

    /// Appends columns and backfills every existing row. With `defaults`, the
    /// i-th literal backfills the i-th new column and becomes its stored
    /// default; otherwise rows get the column type's zero value. The whole
    /// batch is validated before the first column is added.
    pub fn add_columns(
        &mut self,
        defs: Vec<ColumnDef>,
        defaults: Option<&[Literal]>,
    ) -> Result<(), EngineError> {
        Self::check_new_columns(Some(&*self), &defs, &self.name)?;

        if let Some(defaults) = defaults {
            if defaults.len() != defs.len() {
                return Err(ValidationError::ColumnCountMismatch {
                    table: self.name.clone(),
                    expected: defs.len(),
                    found: defaults.len(),
                }
                .into());
            }
        }

        let mut added = Vec::with_capacity(defs.len());
        for (i, mut def) in defs.into_iter().enumerate() {
            let fill = match defaults.map(|d| &d[i]) {
                Some(literal) => {
                    let value = def.convert(literal)?;
                    def.default = Some(value.clone());
                    value
                }
                None => def.zero_value(),
            };
            added.push(Column::filled(def, self.row_count, &fill)?);
        }

        self.columns.extend(added);
        Ok(())
    }

    /// Removes columns together with their value in every row. Fails without
    /// removing anything if a name is unknown or no column would remain.
    pub fn remove_columns(&mut self, names: &[String]) -> Result<(), EngineError> {
        let mut doomed = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<usize>, SchemaError>>()?;
        doomed.sort_unstable();
        doomed.dedup();

        if doomed.len() == self.columns.len() {
            return Err(ValidationError::EmptySchema {
                table: self.name.clone(),
            }
            .into());
        }

        // highest position first so earlier positions stay valid
        for idx in doomed.into_iter().rev() {
            self.columns.remove(idx);
        }
        Ok(())
    }

    pub fn rename_column(&mut self, old: &str, new: &str) -> Result<(), EngineError> {
        let idx = self.column_index(old)?;
        check_name(ObjectKind::Column, new)?;
        if self
            .find_column(new)
            .is_some_and(|other| other != idx)
        {
            return Err(SchemaError::already_exists(ObjectKind::Column, new).into());
        }
        self.columns[idx].def.name = new.to_string();
        Ok(())
    }

    /// Changes the type of several columns, all or nothing: every target must
    /// exist and every stored value must convert before any column changes.
    pub fn modify_columns(&mut self, defs: Vec<ColumnDef>) -> Result<(), EngineError> {
        let targets = defs
            .iter()
            .map(|def| self.column_index(&def.name))
            .collect::<Result<Vec<usize>, SchemaError>>()?;
        for (i, idx) in targets.iter().enumerate() {
            if targets[..i].contains(idx) {
                return Err(ValidationError::ColumnMismatch {
                    table: self.name.clone(),
                    expected: self.column_names(),
                    found: defs.iter().map(|def| def.name.clone()).collect(),
                }
                .into());
            }
        }

        let mut replacements = Vec::with_capacity(defs.len());
        for (idx, def) in targets.into_iter().zip(defs) {
            def.column_type.validate()?;
            let current = &self.columns[idx];
            let target = ColumnDef {
                name: current.def.name.clone(),
                column_type: def.column_type,
                default: None,
            };
            replacements.push((idx, current.retyped(target)?));
        }

        for (idx, column) in replacements {
            self.columns[idx] = column;
        }
        Ok(())
    }

    pub fn set_default(&mut self, column: &str, literal: &Literal) -> Result<(), EngineError> {
        let idx = self.column_index(column)?;
        if matches!(literal, Literal::Default) {
            return Err(ValidationError::TypeMismatch {
                column: column.to_string(),
                expected: self.columns[idx].def.column_type.to_string(),
                found: "DEFAULT".to_string(),
            }
            .into());
        }
        let value = self.columns[idx].def.convert(literal)?;
        self.columns[idx].def.default = Some(value);
        Ok(())
    }

    pub fn drop_default(&mut self, column: &str) -> Result<(), EngineError> {
        let idx = self.column_index(column)?;
        let def = &mut self.columns[idx].def;
        if def.default.take().is_none() {
            return Err(ValidationError::NoDefault {
                column: def.name.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Removes all rows, preserving the schema.
    pub fn truncate(&mut self) {
        for col in &mut self.columns {
            col.clear();
        }
        self.row_count = 0;
    }

    /// Projects all rows onto the requested columns.
    pub fn select(&self, projection: &Projection) -> Result<QueryResult, EngineError> {
        let indexes: Vec<usize> = match projection {
            Projection::Star => (0..self.columns.len()).collect(),
            Projection::Columns(names) => names
                .iter()
                .map(|name| self.column_index(name))
                .collect::<Result<_, _>>()?,
        };

        let rows = (0..self.row_count)
            .map(|row_idx| {
                indexes
                    .iter()
                    .map(|&idx| self.columns[idx].get(row_idx).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(QueryResult {
            columns: indexes
                .iter()
                .map(|&idx| self.columns[idx].def.name.clone())
                .collect(),
            rows,
        })
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| {} |", self.columns.join(" | "))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(Value::to_string).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        write!(f, "({} rows)", self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::ColumnType;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn num(n: i64) -> Literal {
        Literal::Number(n)
    }

    fn text(s: &str) -> Literal {
        Literal::String(s.into())
    }

    fn users() -> Table {
        Table::new(
            "users".into(),
            vec![
                ColumnDef::new("id", ColumnType::Int),
                ColumnDef::new("name", ColumnType::Varchar(10)),
            ],
        )
    }

    fn abc_with_row() -> Table {
        let mut table = Table::new(
            "t".into(),
            vec![
                ColumnDef::new("A", ColumnType::Int),
                ColumnDef::new("B", ColumnType::Int),
                ColumnDef::new("C", ColumnType::Int),
            ],
        );
        table
            .insert_row(&names(&["A", "B", "C"]), &[num(1), num(2), num(3)])
            .unwrap();
        table
    }

    #[test]
    fn test_table_creation() {
        let table = users();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_names(), vec!["id", "name"]);
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = users();

        table
            .insert_row(&names(&["id", "name"]), &[num(1), text("Kratos")])
            .unwrap();
        table
            .insert_row(&names(&["id", "name"]), &[num(2), Literal::Null])
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.get_row(0),
            Some(vec![Value::Int(1), Value::from("Kratos")])
        );
        assert_eq!(table.get_row(1), Some(vec![Value::Int(2), Value::Null]));
        assert_eq!(table.get_row(2), None);
    }

    #[test]
    fn test_column_count_mismatch() {
        let mut table = users();

        let result = table.insert_row(&names(&["id"]), &[num(1)]);
        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::ColumnCountMismatch {
                expected: 2,
                found: 1,
                ..
            }))
        ));
    }

    #[test]
    fn test_column_order_mismatch() {
        let mut table = users();

        let result = table.insert_row(&names(&["name", "id"]), &[text("x"), num(1)]);
        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::ColumnMismatch { .. }))
        ));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_failed_insert_stores_nothing() {
        let mut table = users();

        let result = table.insert_row(
            &names(&["id", "name"]),
            &[num(2), text("ThisNameIsTooLong")],
        );

        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::ValueTooLong { .. }))
        ));
        assert_eq!(table.row_count(), 0);
        assert!(table.get_col("id").unwrap().is_empty());
    }

    #[test]
    fn test_insert_expands_partial_list() {
        let mut table = users();
        table.set_default("name", &text("anon")).unwrap();

        table.insert(&names(&["id"]), &[num(7)]).unwrap();
        table
            .insert(&names(&["name", "id"]), &[text("Atreus"), num(8)])
            .unwrap();

        assert_eq!(table.get_row(0), Some(vec![Value::Int(7), Value::from("anon")]));
        assert_eq!(
            table.get_row(1),
            Some(vec![Value::Int(8), Value::from("Atreus")])
        );
    }

    #[test]
    fn test_insert_omitted_without_default_is_null() {
        let mut table = users();
        table.insert(&names(&["name"]), &[text("Freya")]).unwrap();
        assert_eq!(table.get_row(0), Some(vec![Value::Null, Value::from("Freya")]));
    }

    #[test]
    fn test_insert_rejects_unknown_and_repeated_columns() {
        let mut table = users();

        assert!(matches!(
            table.insert(&names(&["age"]), &[num(1)]),
            Err(EngineError::Schema(SchemaError::NotFound { .. }))
        ));
        assert!(matches!(
            table.insert(&names(&["id", "ID"]), &[num(1), num(2)]),
            Err(EngineError::Validation(ValidationError::ColumnMismatch { .. }))
        ));
    }

    #[test]
    fn test_add_columns_backfills_default() {
        let mut table = abc_with_row();
        table
            .insert_row(&names(&["A", "B", "C"]), &[num(4), num(5), num(6)])
            .unwrap();
        table
            .insert_row(&names(&["A", "B", "C"]), &[num(7), num(8), num(9)])
            .unwrap();

        table
            .add_columns(vec![ColumnDef::new("age", ColumnType::Int)], Some(&[num(5)]))
            .unwrap();

        assert_eq!(table.column_count(), 4);
        for row in table.rows() {
            assert_eq!(row.len(), 4);
            assert_eq!(row[3], Value::Int(5));
        }

        table
            .insert_row(
                &names(&["A", "B", "C", "age"]),
                &[num(0), num(0), num(0), num(40)],
            )
            .unwrap();
        assert!(
            table
                .insert_row(
                    &names(&["A", "B", "C", "age"]),
                    &[num(0), num(0), num(0), text("old")],
                )
                .is_err()
        );
    }

    #[test]
    fn test_add_columns_zero_values() {
        let mut table = users();
        table
            .insert_row(&names(&["id", "name"]), &[num(1), text("a")])
            .unwrap();

        table
            .add_columns(
                vec![
                    ColumnDef::new("score", ColumnType::Int),
                    ColumnDef::new("title", ColumnType::Varchar(5)),
                ],
                None,
            )
            .unwrap();

        assert_eq!(
            table.get_row(0),
            Some(vec![
                Value::Int(1),
                Value::from("a"),
                Value::Int(0),
                Value::from("")
            ])
        );
        assert_eq!(table.get_col("score").unwrap().def.default, None);
    }

    #[test]
    fn test_add_columns_is_all_or_nothing() {
        let mut table = abc_with_row();

        let duplicate = table.add_columns(
            vec![
                ColumnDef::new("D", ColumnType::Int),
                ColumnDef::new("b", ColumnType::Int),
            ],
            None,
        );
        assert!(matches!(
            duplicate,
            Err(EngineError::Schema(SchemaError::AlreadyExists { .. }))
        ));

        let bad_default = table.add_columns(
            vec![
                ColumnDef::new("D", ColumnType::Int),
                ColumnDef::new("E", ColumnType::Varchar(2)),
            ],
            Some(&[num(1), text("toolong")]),
        );
        assert!(bad_default.is_err());

        let wrong_count = table.add_columns(
            vec![ColumnDef::new("D", ColumnType::Int)],
            Some(&[num(1), num(2)]),
        );
        assert!(wrong_count.is_err());

        assert_eq!(table.column_names(), vec!["A", "B", "C"]);
        assert_eq!(table.get_row(0).unwrap().len(), 3);
    }

    #[test]
    fn test_add_columns_rejects_duplicate_within_batch() {
        let mut table = abc_with_row();

        let result = table.add_columns(
            vec![
                ColumnDef::new("x", ColumnType::Int),
                ColumnDef::new("X", ColumnType::Varchar(3)),
            ],
            None,
        );

        assert!(matches!(
            result,
            Err(EngineError::Schema(SchemaError::AlreadyExists {
                kind: ObjectKind::Column,
                ..
            }))
        ));
        assert_eq!(table.column_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_modify_rejects_same_column_twice() {
        let mut table = abc_with_row();

        let result = table.modify_columns(vec![
            ColumnDef::new("A", ColumnType::Varchar(5)),
            ColumnDef::new("a", ColumnType::Int),
        ]);

        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::ColumnMismatch { .. }))
        ));
        assert_eq!(table.get_col("A").unwrap().def.column_type, ColumnType::Int);
        assert_eq!(table.get_row(0), Some(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
    }

    #[test]
    fn test_remove_column_keeps_alignment() {
        let mut table = abc_with_row();

        table.remove_columns(&names(&["B"])).unwrap();

        assert_eq!(table.column_names(), vec!["A", "C"]);
        assert_eq!(table.get_row(0), Some(vec![Value::Int(1), Value::Int(3)]));
    }

    #[test]
    fn test_remove_columns_rejects_missing_or_all() {
        let mut table = abc_with_row();

        assert!(matches!(
            table.remove_columns(&names(&["A", "missing"])),
            Err(EngineError::Schema(SchemaError::NotFound { .. }))
        ));
        assert!(matches!(
            table.remove_columns(&names(&["A", "B", "C"])),
            Err(EngineError::Validation(ValidationError::EmptySchema { .. }))
        ));
        assert_eq!(table.column_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rename_column() {
        let mut table = users();

        table.rename_column("NAME", "nickname").unwrap();
        assert_eq!(table.column_names(), vec!["id", "nickname"]);

        assert!(table.rename_column("missing", "x").is_err());
        assert!(table.rename_column("id", "nickname").is_err());
        // case-only rename of the same column is allowed
        table.rename_column("id", "ID").unwrap();
        assert_eq!(table.column_names(), vec!["ID", "nickname"]);
    }

    #[test]
    fn test_modify_is_all_or_nothing() {
        let mut table = abc_with_row();

        let result = table.modify_columns(vec![
            ColumnDef::new("A", ColumnType::Varchar(5)),
            ColumnDef::new("missing", ColumnType::Varchar(5)),
        ]);

        assert!(matches!(
            result,
            Err(EngineError::Schema(SchemaError::NotFound { .. }))
        ));
        assert_eq!(table.get_col("A").unwrap().def.column_type, ColumnType::Int);
    }

    #[test]
    fn test_modify_converts_rows() {
        let mut table = abc_with_row();

        table
            .modify_columns(vec![ColumnDef::new("a", ColumnType::Varchar(3))])
            .unwrap();

        let col = table.get_col("A").unwrap();
        assert_eq!(col.def.column_type, ColumnType::Varchar(3));
        assert_eq!(col.def.name, "A");
        assert_eq!(
            table.get_row(0),
            Some(vec![Value::from("1"), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_modify_rejects_shrinking_below_data() {
        let mut table = users();
        table
            .insert_row(&names(&["id", "name"]), &[num(1), text("Kratos")])
            .unwrap();

        let result = table.modify_columns(vec![
            ColumnDef::new("id", ColumnType::Varchar(4)),
            ColumnDef::new("name", ColumnType::Varchar(3)),
        ]);

        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::ValueTooLong { .. }))
        ));
        assert_eq!(table.get_col("id").unwrap().def.column_type, ColumnType::Int);
    }

    #[test]
    fn test_set_and_drop_default() {
        let mut table = users();

        assert!(matches!(
            table.set_default("name", &text("waytoolongname")),
            Err(EngineError::Validation(ValidationError::ValueTooLong { .. }))
        ));
        assert!(matches!(
            table.set_default("id", &text("x")),
            Err(EngineError::Validation(ValidationError::TypeMismatch { .. }))
        ));

        table.set_default("id", &num(9)).unwrap();
        table
            .insert_row(&names(&["id", "name"]), &[Literal::Default, text("b")])
            .unwrap();
        assert_eq!(table.get_row(0).unwrap()[0], Value::Int(9));

        table.drop_default("id").unwrap();
        assert!(matches!(
            table.insert_row(&names(&["id", "name"]), &[Literal::Default, text("b")]),
            Err(EngineError::Validation(ValidationError::NoDefault { .. }))
        ));
        assert!(table.drop_default("id").is_err());
    }

    #[test]
    fn test_truncate_keeps_schema() {
        let mut table = abc_with_row();

        table.truncate();

        assert_eq!(table.row_count(), 0);
        assert!(table.rows().is_empty());
        assert_eq!(table.column_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_select_projection() {
        let mut table = users();
        table
            .insert_row(&names(&["id", "name"]), &[num(1), text("Alice")])
            .unwrap();

        let all = table.select(&Projection::Star).unwrap();
        assert_eq!(all.columns, vec!["id", "name"]);
        assert_eq!(all.rows, vec![vec![Value::Int(1), Value::from("Alice")]]);

        let some = table
            .select(&Projection::Columns(names(&["name"])))
            .unwrap();
        assert_eq!(some.columns, vec!["name"]);
        assert_eq!(some.rows, vec![vec![Value::from("Alice")]]);

        assert!(table.select(&Projection::Columns(names(&["age"]))).is_err());
    }

    #[test]
    fn test_check_new_columns() {
        let defs = vec![
            ColumnDef::new("id", ColumnType::Int),
            ColumnDef::new("ID", ColumnType::Int),
        ];
        assert!(Table::check_new_columns(None, &defs, "t").is_err());
        let accented = vec![
            ColumnDef::new("É", ColumnType::Int),
            ColumnDef::new("é", ColumnType::Int),
        ];
        assert!(Table::check_new_columns(None, &accented, "t").is_err());
        assert!(Table::check_new_columns(None, &[], "t").is_err());
        assert!(
            Table::check_new_columns(None, &[ColumnDef::new("v", ColumnType::Varchar(0))], "t")
                .is_err()
        );
    }
}
