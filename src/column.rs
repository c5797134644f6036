use std::sync::Arc;

use bitvec::prelude::*;

use crate::ast::Literal;
use crate::data_type::ColumnType;
use crate::error::ValidationError;
use crate::value::Value;

/// Column definition in the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
    /// Stored default, used by the `DEFAULT` literal. `Some(Value::Null)` is a
    /// declared NULL default, `None` means the column has no default at all.
    pub default: Option<Value>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            default: None,
        }
    }

    /// Column names compare case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }

    /// The value existing rows receive when this column is added without a default.
    pub fn zero_value(&self) -> Value {
        match self.column_type {
            ColumnType::Int => Value::Int(0),
            ColumnType::Varchar(_) => Value::Text(Arc::from("")),
        }
    }

    /// Converts a literal into a value of this column.
    ///
    /// # Errors
    /// - [ValidationError::TypeMismatch] for a number into `VARCHAR` or a string into `INT`.
    /// - [ValidationError::ValueTooLong] for a string over the declared length.
    /// - [ValidationError::NoDefault] for `DEFAULT` on a column without a stored default.
    pub fn convert(&self, literal: &Literal) -> Result<Value, ValidationError> {
        let value = match (literal, self.column_type) {
            (Literal::Null, _) => Value::Null,
            (Literal::Default, _) => {
                return self
                    .default
                    .clone()
                    .ok_or_else(|| ValidationError::NoDefault {
                        column: self.name.clone(),
                    });
            }
            (Literal::Number(n), ColumnType::Int) => Value::Int(*n),
            (Literal::String(s), ColumnType::Varchar(_)) => Value::Text(Arc::from(s.as_str())),
            (Literal::Number(_), ColumnType::Varchar(_)) => {
                return Err(self.mismatch("number literal"));
            }
            (Literal::String(_), ColumnType::Int) => {
                return Err(self.mismatch("string literal"));
            }
        };
        self.check(&value)?;
        Ok(value)
    }

    /// Checks that an already typed value fits this column.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        match (value, self.column_type) {
            (Value::Null, _) | (Value::Int(_), ColumnType::Int) => Ok(()),
            (Value::Text(s), ColumnType::Varchar(max)) => {
                let actual = s.chars().count();
                if actual > max as usize {
                    return Err(ValidationError::ValueTooLong {
                        column: self.name.clone(),
                        max: max as usize,
                        actual,
                    });
                }
                Ok(())
            }
            (other, _) => Err(self.mismatch(other.kind_name())),
        }
    }

    /// Converts a stored value of this column to `target`, as needed when the
    /// column type is modified.
    pub fn cast(&self, value: &Value, target: &ColumnDef) -> Result<Value, ValidationError> {
        let cast = match (value, target.column_type) {
            (Value::Null, _) => Value::Null,
            (Value::Int(i), ColumnType::Int) => Value::Int(*i),
            (Value::Int(i), ColumnType::Varchar(_)) => Value::Text(Arc::from(i.to_string())),
            (Value::Text(s), ColumnType::Varchar(_)) => Value::Text(Arc::clone(s)),
            // only plain digit runs convert, as a number literal would
            (Value::Text(s), ColumnType::Int) => {
                let digits = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
                match s.parse::<i64>() {
                    Ok(i) if digits => Value::Int(i),
                    _ => return Err(target.mismatch(&format!("string '{s}'"))),
                }
            }
        };
        target.check(&cast)?;
        Ok(cast)
    }

    fn mismatch(&self, found: &str) -> ValidationError {
        ValidationError::TypeMismatch {
            column: self.name.clone(),
            expected: self.column_type.to_string(),
            found: found.to_string(),
        }
    }
}

/// Physical storage for column data.
/// Each variant wraps a collection of a specific type to ensure contiguous memory
/// allocation (columnar storage).
#[derive(Debug, Clone)]
pub enum ColumnData {
    /// Vector of 64-bit integers.
    Int(Vec<i64>),
    /// Vector of reference-counted strings.
    Text(Vec<Arc<str>>),
}

/// Represents a column within a table.
/// It combines the schema entry with the actual data and a nullability tracker,
/// so a column's definition and its values can only be added or removed together.
#[derive(Debug, Clone)]
pub struct Column {
    pub def: ColumnDef,
    /// The actual values stored in the column.
    pub data: ColumnData,
    /// A bitmap where a `true` bit indicates that the value at that index is `NULL`.
    pub null_bitmap: BitVec,
}

impl Column {
    /// Creates a new, empty column for the given definition.
    /// The underlying data storage is initialized according to the data type.
    pub fn new(def: ColumnDef) -> Self {
        let data = match def.column_type {
            ColumnType::Int => ColumnData::Int(vec![]),
            ColumnType::Varchar(_) => ColumnData::Text(vec![]),
        };
        Self {
            def,
            data,
            null_bitmap: bitvec!(),
        }
    }

    /// Creates a column holding `len` copies of `fill`.
    pub fn filled(def: ColumnDef, len: usize, fill: &Value) -> Result<Self, ValidationError> {
        let mut column = Self::new(def);
        column.def.check(fill)?;
        for _ in 0..len {
            column.push(fill.clone())?;
        }
        Ok(column)
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Appends a new value to the end of the column.
    ///
    /// # Errors
    /// Returns an error if the value does not fit the column's type or length.
    ///
    /// # Behavior
    /// If the value is `Null`, a placeholder is pushed to the data vector
    /// to maintain index alignment with the `null_bitmap`.
    pub fn push(&mut self, value: Value) -> Result<(), ValidationError> {
        self.def.check(&value)?;

        match (&mut self.data, value) {
            (ColumnData::Int(col), Value::Null) => {
                col.push(0);
                self.null_bitmap.push(true);
            }
            (ColumnData::Text(col), Value::Null) => {
                col.push(Arc::from(""));
                self.null_bitmap.push(true);
            }
            (ColumnData::Int(col), Value::Int(v)) => {
                col.push(v);
                self.null_bitmap.push(false);
            }
            (ColumnData::Text(col), Value::Text(v)) => {
                col.push(v);
                self.null_bitmap.push(false);
            }
            (_, value) => return Err(self.def.mismatch(value.kind_name())),
        }

        Ok(())
    }

    /// Returns the number of rows currently stored in the column.
    pub fn len(&self) -> usize {
        self.null_bitmap.len()
    }

    /// Returns true if there is no row in the column, else false.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieves the value at the specified row index.
    ///
    /// Returns `Some(Value)` if the index is valid, or `None` if it is out of bounds.
    /// If the `null_bitmap` indicates a null at the index, `Some(Value::Null)` is returned.
    pub fn get(&self, row_idx: usize) -> Option<Value> {
        if row_idx >= self.len() {
            return None;
        }
        if self.null_bitmap[row_idx] {
            return Some(Value::Null);
        }
        match &self.data {
            ColumnData::Int(col) => Some(Value::Int(col[row_idx])),
            ColumnData::Text(col) => Some(Value::Text(Arc::clone(&col[row_idx]))),
        }
    }

    /// Drops every value, keeping the definition.
    pub fn clear(&mut self) {
        match &mut self.data {
            ColumnData::Int(col) => col.clear(),
            ColumnData::Text(col) => col.clear(),
        }
        self.null_bitmap.clear();
    }

    /// Builds a copy of this column under `target`, converting every stored
    /// value and the stored default. `self` is left untouched so a failed
    /// conversion mutates nothing.
    pub fn retyped(&self, mut target: ColumnDef) -> Result<Self, ValidationError> {
        target.default = match &self.def.default {
            Some(default) => Some(self.def.cast(default, &target)?),
            None => None,
        };

        let mut column = Self::new(target);
        for row_idx in 0..self.len() {
            let value = self.get(row_idx).unwrap_or(Value::Null);
            let cast = self.def.cast(&value, &column.def)?;
            column.push(cast)?;
        }
        Ok(column)
    }
}
