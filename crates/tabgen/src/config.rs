//! Emitter settings.

use tabgen_sql::Dialect;

/// Suffix stripped from record names by default.
pub const DEFAULT_SUFFIX: &str = "Model";

/// Everything that shapes the generated DDL.
///
/// ```
/// use tabgen::{Dialect, Emitter, EmitterConfig};
///
/// let emitter = Emitter::with_config(EmitterConfig {
///     mode: Dialect::Mysql,
///     schema: "app".to_string(),
///     ..EmitterConfig::default()
/// });
/// assert_eq!(emitter.config().quote(), '`');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Target dialect. Also decides the identifier quote.
    pub mode: Dialect,
    /// Schema the table is qualified with, when non-empty.
    pub schema: String,
    /// Characters trimmed from the right of a record name to derive its table.
    ///
    /// This is a character set, not a literal suffix: with `"Model"`,
    /// `ArticleModel` becomes `artic`.
    pub suffix: String,
    /// One column per line, indented.
    pub wrap: bool,
    /// Emit `DROP TABLE IF EXISTS` before the create.
    pub drop: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            mode: Dialect::Sqlite,
            schema: String::new(),
            suffix: DEFAULT_SUFFIX.to_string(),
            wrap: true,
            drop: false,
        }
    }
}

impl EmitterConfig {
    /// Identifier quote for the configured dialect.
    pub fn quote(&self) -> char {
        self.mode.identifier_quote()
    }
}
