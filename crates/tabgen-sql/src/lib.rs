//! SQL dialects and rendering helpers.
//!
//! Everything that differs between the SQL flavors tabgen targets lives on
//! [`Dialect`]. [`Ident`] renders identifiers for a given dialect.

mod dialect;
pub use dialect::*;

/// A quoted identifier wrapper.
///
/// Display writes the name surrounded by the dialect's quote character,
/// doubling any embedded quote.
///
/// # Example
/// ```
/// use tabgen_sql::{Dialect, Ident};
/// assert_eq!(format!("{}", Ident::new(Dialect::Mysql, "user")), "`user`");
/// assert_eq!(format!("{}", Ident::new(Dialect::Sqlite, "user")), "'user'");
/// ```
pub struct Ident<T: AsRef<str>> {
    quote: char,
    name: T,
}

impl<T: AsRef<str>> Ident<T> {
    pub fn new(dialect: Dialect, name: T) -> Self {
        Self {
            quote: dialect.identifier_quote(),
            name,
        }
    }
}

impl<T: AsRef<str>> std::fmt::Display for Ident<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.quote)?;
        for c in self.name.as_ref().chars() {
            if c == self.quote {
                write!(f, "{}{}", c, c)?;
            } else {
                write!(f, "{}", c)?;
            }
        }
        write!(f, "{}", self.quote)
    }
}

/// Quote an identifier for the given dialect.
pub fn quote_ident(dialect: Dialect, name: &str) -> String {
    format!("{}", Ident::new(dialect, name))
}

/// Quote a possibly schema-qualified table name.
///
/// An empty schema yields the bare quoted table.
///
/// ```
/// use tabgen_sql::{Dialect, qualified_table};
/// assert_eq!(qualified_table(Dialect::Mysql, "app", "user"), "`app`.`user`");
/// assert_eq!(qualified_table(Dialect::Sqlite, "", "user"), "'user'");
/// ```
pub fn qualified_table(dialect: Dialect, schema: &str, table: &str) -> String {
    if schema.is_empty() {
        quote_ident(dialect, table)
    } else {
        format!(
            "{}.{}",
            quote_ident(dialect, schema),
            quote_ident(dialect, table)
        )
    }
}
