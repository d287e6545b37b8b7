use std::fmt;
use std::str::FromStr;

/// The SQL flavor a statement is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    #[default]
    Sqlite,
    Mysql,
}

/// Table options MySQL tables are created with.
pub const MYSQL_TABLE_OPTIONS: &str = " ENGINE=InnoDB AUTO_INCREMENT=0 DEFAULT CHARSET=utf8mb4";

/// Where a column comment ends up relative to the column separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    /// Part of the column definition itself (`COMMENT '...'`, `/* ... */`).
    Inline(String),
    /// A line comment that must come after the column's separator comma.
    Trailing(String),
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Dialect; 2] = [Dialect::Sqlite, Dialect::Mysql];

    /// Character used to quote identifiers.
    pub fn identifier_quote(self) -> char {
        match self {
            Dialect::Sqlite => '\'',
            Dialect::Mysql => '`',
        }
    }

    /// Text appended after the closing parenthesis of `CREATE TABLE`.
    pub fn table_suffix(self) -> &'static str {
        match self {
            Dialect::Sqlite => "",
            Dialect::Mysql => MYSQL_TABLE_OPTIONS,
        }
    }

    /// Keyword marking an auto-incrementing column.
    pub fn auto_increment(self) -> &'static str {
        match self {
            Dialect::Sqlite => "AUTOINCREMENT",
            Dialect::Mysql => "AUTO_INCREMENT",
        }
    }

    /// Whether `UNSIGNED` is understood. SQLite has no unsigned integers.
    pub fn supports_unsigned(self) -> bool {
        matches!(self, Dialect::Mysql)
    }

    /// Type an integer `PRIMARY KEY AUTOINCREMENT` column must be declared as.
    ///
    /// SQLite only allows `AUTOINCREMENT` on a column declared exactly
    /// `INTEGER PRIMARY KEY` (the rowid alias), so widths are not allowed either.
    pub fn integer_primary_key_type(self) -> Option<&'static str> {
        match self {
            Dialect::Sqlite => Some("integer"),
            Dialect::Mysql => None,
        }
    }

    /// Render a column comment.
    ///
    /// The text is written as given, like a `DEFAULT` value: MySQL expects
    /// the tag to carry its own quotes (`comment:'login name'`).
    ///
    /// `single_line` is set when the whole statement is emitted on one line,
    /// where a `--` comment would swallow the rest of the statement.
    pub fn comment(self, text: &str, single_line: bool) -> Comment {
        match self {
            Dialect::Mysql => Comment::Inline(format!("COMMENT {}", text)),
            Dialect::Sqlite if single_line => Comment::Inline(format!("/* {} */", text)),
            Dialect::Sqlite => Comment::Trailing(format!("-- {}", text)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a dialect name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}', expected one of: sqlite, mysql")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
