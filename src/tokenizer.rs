use std::fmt;

use thiserror::Error;

/// The closed set of token categories of the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // --- Statement keywords ---
    Create,
    Drop,
    Use,
    Show,
    Alter,
    Add,
    Remove,
    Column,
    To,
    In,
    For,
    Set,
    Table,
    Database,
    Truncate,
    Rename,
    Modify,
    Default,
    From,
    Values,
    Into,
    Insert,
    Select,
    Tables,
    Databases,
    Current,
    None,

    // --- Data Types ---
    Int,
    Varchar,

    // --- Identifiers & Literals ---
    /// A name representing a database, table or column (e.g., `users`).
    Identifier,
    /// A run of decimal digits (e.g., `42`).
    Number,
    /// A string literal, defined between single quotes (e.g., `'Alice'`).
    String,
    /// The `NULL` literal.
    Null,

    // --- Symbols ---
    /// Left parenthesis `(`
    LeftParen,
    /// Right parenthesis `)`
    RightParen,
    /// Comma `,`
    Comma,
    /// Semicolon `;`
    Semicolon,
    /// Wildcard `*`
    Star,

    // --- Special ---
    /// Represents the End Of File/Input.
    Eof,
}

impl TokenKind {
    /// Looks an uppercased word up in the keyword table.
    fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "CREATE" => Self::Create,
            "DROP" => Self::Drop,
            "USE" => Self::Use,
            "SHOW" => Self::Show,
            "ALTER" => Self::Alter,
            "ADD" => Self::Add,
            "REMOVE" => Self::Remove,
            "COLUMN" => Self::Column,
            "TO" => Self::To,
            "IN" => Self::In,
            "FOR" => Self::For,
            "SET" => Self::Set,
            "TABLE" => Self::Table,
            "DATABASE" => Self::Database,
            "TRUNCATE" => Self::Truncate,
            "RENAME" => Self::Rename,
            "MODIFY" => Self::Modify,
            "DEFAULT" => Self::Default,
            "FROM" => Self::From,
            "VALUES" => Self::Values,
            "INTO" => Self::Into,
            "INSERT" => Self::Insert,
            "SELECT" => Self::Select,
            "TABLES" => Self::Tables,
            "DATABASES" => Self::Databases,
            "CURRENT" => Self::Current,
            "NONE" => Self::None,
            "INT" => Self::Int,
            "VARCHAR" => Self::Varchar,
            "NULL" => Self::Null,
            _ => return Option::None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string literal",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Star => "'*'",
            Self::Eof => "end of input",
            keyword => return write!(f, "{}", format!("{keyword:?}").to_uppercase()),
        };
        f.write_str(text)
    }
}

/// One lexical unit. `text` keeps the original spelling (identifiers keep
/// their case, string literals are unescaped) and `position` is the character
/// offset where the token starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("character {ch:?} at position {position} is not supported")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("string literal starting at position {position} is never closed")]
    UnterminatedString { position: usize },
}

/// A lexical scanner (lexer) that converts a raw statement into a sequence of [Token]s.
pub struct Tokenizer {
    /// The input string stored as a vector of characters for easy iteration.
    input: Vec<char>,
    /// The current position in the character vector.
    position: usize,
}

/// Tokenizes `text` in one go. See [Tokenizer::tokenize].
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(text).tokenize()
}

impl Tokenizer {
    /// Creates a new Tokenizer for the given input string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Processes the entire input and returns a vector of tokens ending with
    /// [TokenKind::Eof].
    ///
    /// # Errors
    /// Returns an error if an unsupported character is encountered or if a
    /// string literal is never closed.
    ///
    /// # Example
    /// ```
    /// # use minirel::tokenizer::{Tokenizer, TokenKind};
    /// let tokens = Tokenizer::new("USE shop;").tokenize().unwrap();
    /// assert_eq!(tokens[0].kind, TokenKind::Use);
    /// assert_eq!(tokens[1].text, "shop");
    /// ```
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            let token = self.next_token()?;
            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.input.len()));
        Ok(tokens)
    }

    /// Identifies the next token based on the character at the current position.
    fn next_token(&mut self) -> Result<Token, LexError> {
        let ch = self.current_char();
        let start = self.position;

        let symbol = match ch {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            '*' => Some(TokenKind::Star),
            _ => None,
        };
        if let Some(kind) = symbol {
            self.advance();
            return Ok(Token::new(kind, ch, start));
        }

        match ch {
            c if c.is_alphabetic() => Ok(self.read_identifier()),
            c if c.is_ascii_digit() => Ok(self.read_number()),
            '\'' => self.read_string(),
            _ => Err(LexError::UnexpectedCharacter {
                ch,
                position: start,
            }),
        }
    }

    // --- Navigation Helpers ---

    /// Returns the character at the current position.
    fn current_char(&self) -> char {
        self.input[self.position]
    }

    /// Returns the character right after the current one, if any.
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Moves the cursor forward by one character.
    fn advance(&mut self) {
        self.position += 1;
    }

    /// Checks if the cursor has reached the end of the input.
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consumes any whitespace characters (spaces, tabs, newlines).
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    // --- Extraction Logic ---

    /// Reads a run of letters, digits and `_` and determines if it's
    /// a reserved keyword or a user-defined identifier.
    ///
    /// Keywords are matched case-insensitively.
    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        let mut ident = String::new();

        while !self.is_at_end()
            && (self.current_char().is_alphanumeric() || self.current_char() == '_')
        {
            ident.push(self.current_char());
            self.advance();
        }

        let kind = TokenKind::keyword(&ident.to_uppercase()).unwrap_or(TokenKind::Identifier);
        Token::new(kind, ident, start)
    }

    /// Reads a run of decimal digits. Conversion to an integer is left to the
    /// parser, which knows whether the number is a length or a value.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        let mut number = String::new();

        while !self.is_at_end() && self.current_char().is_ascii_digit() {
            number.push(self.current_char());
            self.advance();
        }

        Token::new(TokenKind::Number, number, start)
    }

    /// Reads a string literal enclosed in single quotes. A doubled quote
    /// inside the literal stands for one quote character.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        let mut string = String::new();
        loop {
            if self.is_at_end() {
                return Err(LexError::UnterminatedString { position: start });
            }
            if self.current_char() == '\'' {
                if self.peek_char() == Some('\'') {
                    string.push('\'');
                    self.advance();
                    self.advance();
                    continue;
                }
                break;
            }
            string.push(self.current_char());
            self.advance();
        }

        // Skip the closing quote
        self.advance();

        Ok(Token::new(TokenKind::String, string, start))
    }
}
