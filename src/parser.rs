use thiserror::Error;

use crate::ast::*;
use crate::column::ColumnDef;
use crate::data_type::{ColumnType, MAX_VARCHAR_LEN};
use crate::tokenizer::{Token, TokenKind};

/// A grammar violation: what the parser wanted, what it got, and where.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found} at position {position}")]
pub struct SyntaxError {
    pub expected: String,
    pub found: String,
    pub position: usize,
}

/// Parses one `;`-terminated statement. See [Parser::parse].
pub fn parse(tokens: Vec<Token>) -> Result<Command, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Recursive descent parser with one token of lookahead.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Creates a parser over a token stream. A missing trailing
    /// [TokenKind::Eof] is added.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|token| token.kind != TokenKind::Eof) {
            let end = tokens
                .last()
                .map(|token| token.position + token.text.chars().count())
                .unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, "", end));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses a whole statement, dispatching on its first token.
    ///
    /// # Errors
    /// Returns a [SyntaxError] on any grammar violation, a missing `;`, or
    /// anything after the `;`.
    pub fn parse(&mut self) -> Result<Command, SyntaxError> {
        let command = match self.current_token().kind {
            TokenKind::Create => self.parse_create(),
            TokenKind::Drop => self.parse_drop(),
            TokenKind::Use => self.parse_use(),
            TokenKind::Show => self.parse_show(),
            TokenKind::Insert => self.parse_insert(),
            TokenKind::Alter => self.parse_alter(),
            TokenKind::Add => self.parse_add_columns(),
            TokenKind::Remove => self.parse_remove_columns(),
            TokenKind::Rename => self.parse_rename_column(),
            TokenKind::Modify => self.parse_modify_columns(),
            TokenKind::Truncate => self.parse_truncate(),
            TokenKind::Set => self.parse_set_default(),
            TokenKind::Select => self.parse_select(),
            _ => Err(self.error("a statement")),
        }?;

        // the terminator is mandatory
        self.consume(TokenKind::Semicolon)?;

        if !self.is_at_end() {
            return Err(self.error("end of input after ';'"));
        }

        tracing::debug!(?command, "parsed statement");
        Ok(command)
    }

    // helpers

    fn current_token(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current_token().kind == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token().kind == kind
    }

    fn error(&self, expected: impl Into<String>) -> SyntaxError {
        let token = self.current_token();
        let found = match token.kind {
            TokenKind::Eof => token.kind.to_string(),
            TokenKind::String => format!("string '{}'", token.text),
            _ => format!("'{}'", token.text),
        };
        SyntaxError {
            expected: expected.into(),
            found,
            position: token.position,
        }
    }

    fn consume(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.check(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(expected.to_string()))
        }
    }

    fn consume_ident(&mut self) -> Result<String, SyntaxError> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.error("identifier"));
        }
        let name = self.current_token().text.clone();
        self.advance();
        Ok(name)
    }

    /// Parses `( item (, item)* )`. Empty lists and stray commas are rejected
    /// because every item position must hold an item.
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<Vec<T>, SyntaxError> {
        self.consume(TokenKind::LeftParen)?;
        let mut items = vec![];
        loop {
            items.push(item(self)?);
            match self.current_token().kind {
                TokenKind::RightParen => {
                    self.advance();
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                    continue;
                }
                _ => return Err(self.error("',' or ')'")),
            }
        }
        Ok(items)
    }

    fn consume_column_type(&mut self) -> Result<ColumnType, SyntaxError> {
        match self.current_token().kind {
            TokenKind::Int => {
                self.advance();
                Ok(ColumnType::Int)
            }
            TokenKind::Varchar => {
                self.advance();
                self.consume(TokenKind::LeftParen)?;
                let expected = format!("VARCHAR length between 1 and {MAX_VARCHAR_LEN}");
                if !self.check(TokenKind::Number) {
                    return Err(self.error(expected));
                }
                let length = match self.current_token().text.parse::<u32>() {
                    Ok(length) if (1..=MAX_VARCHAR_LEN).contains(&length) => length,
                    _ => return Err(self.error(expected)),
                };
                self.advance();
                self.consume(TokenKind::RightParen)?;
                Ok(ColumnType::Varchar(length))
            }
            _ => Err(self.error("column type INT or VARCHAR(n)")),
        }
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, SyntaxError> {
        let name = self.consume_ident()?;
        let column_type = self.consume_column_type()?;
        Ok(ColumnDef::new(name, column_type))
    }

    /// A literal usable as a stored default: number, string or `NULL`.
    fn parse_literal(&mut self) -> Result<Literal, SyntaxError> {
        let literal = match self.current_token().kind {
            TokenKind::Number => {
                let text = &self.current_token().text;
                let n = text
                    .parse::<i64>()
                    .map_err(|_| self.error("integer within the 64-bit range"))?;
                Literal::Number(n)
            }
            TokenKind::String => Literal::String(self.current_token().text.clone()),
            TokenKind::Null => Literal::Null,
            _ => return Err(self.error("number, string or NULL")),
        };
        self.advance();
        Ok(literal)
    }

    /// A literal in an INSERT value list, where `DEFAULT` is also allowed.
    fn parse_value(&mut self) -> Result<Literal, SyntaxError> {
        match self.current_token().kind {
            TokenKind::Default => {
                self.advance();
                Ok(Literal::Default)
            }
            TokenKind::Number | TokenKind::String | TokenKind::Null => self.parse_literal(),
            _ => Err(self.error("number, string, NULL or DEFAULT")),
        }
    }

    /// `IN TABLE <table>`
    fn parse_in_table(&mut self) -> Result<String, SyntaxError> {
        self.consume(TokenKind::In)?;
        self.consume(TokenKind::Table)?;
        self.consume_ident()
    }

    // statements

    fn parse_create(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Create)?;
        match self.current_token().kind {
            TokenKind::Database => {
                self.advance();
                let name = self.consume_ident()?;
                Ok(Command::CreateDatabase(CreateDatabase { name }))
            }
            TokenKind::Table => {
                self.advance();
                let name = self.consume_ident()?;
                let columns = self.parse_list(Self::parse_column_def)?;
                Ok(Command::CreateTable(CreateTable { name, columns }))
            }
            _ => Err(self.error("DATABASE or TABLE")),
        }
    }

    fn parse_drop(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Drop)?;
        match self.current_token().kind {
            TokenKind::Database => {
                self.advance();
                let name = self.consume_ident()?;
                Ok(Command::DropDatabase(DropDatabase { name }))
            }
            TokenKind::Table => {
                self.advance();
                let name = self.consume_ident()?;
                Ok(Command::DropTable(DropTable { name }))
            }
            TokenKind::Default => {
                self.advance();
                self.consume(TokenKind::For)?;
                self.consume(TokenKind::Column)?;
                let column = self.consume_ident()?;
                let table = self.parse_in_table()?;
                Ok(Command::DropDefault(DropDefault { table, column }))
            }
            _ => Err(self.error("DATABASE, TABLE or DEFAULT")),
        }
    }

    fn parse_use(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Use)?;
        if self.check(TokenKind::None) {
            self.advance();
            return Ok(Command::ExitDatabase);
        }
        let name = self.consume_ident()?;
        Ok(Command::UseDatabase(UseDatabase { name }))
    }

    fn parse_show(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Show)?;
        match self.current_token().kind {
            TokenKind::Databases => {
                self.advance();
                Ok(Command::ShowDatabases)
            }
            TokenKind::Tables => {
                self.advance();
                Ok(Command::ShowTables)
            }
            TokenKind::Current => {
                self.advance();
                self.consume(TokenKind::Database)?;
                Ok(Command::ShowCurrentDatabase)
            }
            _ => Err(self.error("DATABASES, TABLES or CURRENT DATABASE")),
        }
    }

    fn parse_insert(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Insert)?;
        self.consume(TokenKind::Into)?;
        let table = self.consume_ident()?;
        let columns = self.parse_list(Self::consume_ident)?;
        self.consume(TokenKind::Values)?;

        let values_start = self.current_token().position;
        let values = self.parse_list(Self::parse_value)?;
        if values.len() != columns.len() {
            return Err(SyntaxError {
                expected: format!("{} values", columns.len()),
                found: format!("{} values", values.len()),
                position: values_start,
            });
        }

        Ok(Command::Insert(Insert {
            table,
            columns,
            values,
        }))
    }

    fn parse_alter(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Alter)?;
        let is_table = match self.current_token().kind {
            TokenKind::Table => true,
            TokenKind::Database => false,
            _ => return Err(self.error("TABLE or DATABASE")),
        };
        self.advance();
        let old = self.consume_ident()?;
        self.consume(TokenKind::Rename)?;
        let new = self.consume_ident()?;

        Ok(if is_table {
            Command::RenameTable(RenameTable { old, new })
        } else {
            Command::RenameDatabase(RenameDatabase { old, new })
        })
    }

    fn parse_add_columns(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Add)?;
        self.consume(TokenKind::Column)?;
        let columns = self.parse_list(Self::parse_column_def)?;
        self.consume(TokenKind::To)?;
        self.consume(TokenKind::Table)?;
        let table = self.consume_ident()?;

        let defaults = if self.check(TokenKind::Default) {
            self.advance();
            Some(self.parse_list(Self::parse_literal)?)
        } else {
            None
        };

        Ok(Command::AddColumns(AddColumns {
            table,
            columns,
            defaults,
        }))
    }

    fn parse_remove_columns(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Remove)?;
        self.consume(TokenKind::From)?;
        self.consume(TokenKind::Table)?;
        let table = self.consume_ident()?;
        let columns = self.parse_list(Self::consume_ident)?;
        Ok(Command::RemoveColumns(RemoveColumns { table, columns }))
    }

    fn parse_rename_column(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Rename)?;
        self.consume(TokenKind::Column)?;
        let old = self.consume_ident()?;
        self.consume(TokenKind::To)?;
        let new = self.consume_ident()?;
        let table = self.parse_in_table()?;
        Ok(Command::RenameColumn(RenameColumn { table, old, new }))
    }

    fn parse_modify_columns(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Modify)?;
        self.consume(TokenKind::Column)?;
        let columns = self.parse_list(Self::parse_column_def)?;
        let table = self.parse_in_table()?;
        Ok(Command::ModifyColumns(ModifyColumns { table, columns }))
    }

    fn parse_truncate(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Truncate)?;
        self.consume(TokenKind::Table)?;
        let table = self.consume_ident()?;
        Ok(Command::TruncateTable(TruncateTable { table }))
    }

    fn parse_set_default(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Set)?;
        self.consume(TokenKind::Column)?;
        let column = self.consume_ident()?;
        let table = self.parse_in_table()?;
        self.consume(TokenKind::Default)?;
        let value = self.parse_literal()?;
        Ok(Command::SetDefault(SetDefault {
            table,
            column,
            value,
        }))
    }

    fn parse_select(&mut self) -> Result<Command, SyntaxError> {
        self.consume(TokenKind::Select)?;

        let projection = if self.check(TokenKind::Star) {
            self.advance();
            Projection::Star
        } else {
            let mut columns = vec![self.consume_ident()?];
            while self.check(TokenKind::Comma) {
                self.advance();
                columns.push(self.consume_ident()?);
            }
            Projection::Columns(columns)
        };

        self.consume(TokenKind::From)?;
        let table = self.consume_ident()?;
        Ok(Command::Select(Select { table, projection }))
    }
}
