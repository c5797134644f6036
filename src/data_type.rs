use std::fmt;

use crate::error::ValidationError;

/// Largest length a `VARCHAR` column may declare.
pub const MAX_VARCHAR_LEN: u32 = 255;

/// Represents the supported data types in the database schema.
/// These types define the structure of columns and the expected format of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// A 64-bit signed integer. Never carries a length.
    Int,
    /// A UTF-8 character string holding at most `len` characters.
    Varchar(u32),
}

impl ColumnType {
    /// Builds a `VARCHAR(len)` type.
    ///
    /// # Errors
    /// Returns [ValidationError::InvalidLength] unless `1 <= len <= 255`.
    pub fn varchar(len: u32) -> Result<Self, ValidationError> {
        let column_type = Self::Varchar(len);
        column_type.validate()?;
        Ok(column_type)
    }

    /// Checks the construction invariant. `Varchar` can be built directly, so
    /// every schema-defining operation of the catalog calls this again.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Int => Ok(()),
            Self::Varchar(len) if (1..=MAX_VARCHAR_LEN).contains(len) => Ok(()),
            Self::Varchar(len) => Err(ValidationError::InvalidLength { length: *len }),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "INT"),
            Self::Varchar(len) => write!(f, "VARCHAR({len})"),
        }
    }
}
