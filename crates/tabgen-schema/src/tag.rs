//! Parsers for the `db` and `gen` field tags.

use indexmap::IndexMap;

/// Modifier in a `db` tag that, used as the column name, omits the field.
pub const OMIT_EMPTY: &str = "omitempty";

/// A parsed `db` tag: `<column-name>[,omitempty]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbTag {
    /// Column name.
    pub name: String,
    /// `omitempty` was listed as a modifier.
    pub omit_empty: bool,
    /// Any other modifiers, in order.
    pub options: Vec<String>,
}

impl DbTag {
    /// Parse a `db` tag.
    ///
    /// Returns `None` when the field has no column: the tag is empty, its
    /// name part is empty, or its name part is `omitempty`.
    ///
    /// ```
    /// use tabgen_schema::DbTag;
    /// assert_eq!(DbTag::parse("id").unwrap().name, "id");
    /// assert!(DbTag::parse("name,omitempty").unwrap().omit_empty);
    /// assert_eq!(DbTag::parse("omitempty"), None);
    /// assert_eq!(DbTag::parse(""), None);
    /// ```
    pub fn parse(tag: &str) -> Option<DbTag> {
        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default();
        if name.is_empty() || name == OMIT_EMPTY {
            return None;
        }

        let mut omit_empty = false;
        let mut options = Vec::new();
        for option in parts {
            if option == OMIT_EMPTY {
                omit_empty = true;
            } else if !option.is_empty() {
                options.push(option.to_string());
            }
        }

        Some(DbTag {
            name: name.to_string(),
            omit_empty,
            options,
        })
    }
}

/// The normalized contents of a `gen` tag.
///
/// `gen` is a comma-separated list of `key:value` pairs and bare flags:
///
/// ```
/// use tabgen_schema::ColumnSpec;
///
/// let spec = ColumnSpec::parse("length:10, decimal:2 ,default:0,notnull");
/// assert_eq!(spec.length.as_deref(), Some("10"));
/// assert_eq!(spec.decimal.as_deref(), Some("2"));
/// assert_eq!(spec.default.as_deref(), Some("0"));
/// assert!(spec.not_null);
/// assert!(!spec.primary_key);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Explicit SQL type (`type:`), used verbatim.
    pub sql_type: Option<String>,
    /// Width (`length:`).
    pub length: Option<String>,
    /// Scale for floating types (`decimal:`).
    pub decimal: Option<String>,
    /// Default value (`default:`). `Some("")` means an empty string default.
    pub default: Option<String>,
    /// Column comment (`comment:`).
    pub comment: Option<String>,
    /// `unsigned`
    pub unsigned: bool,
    /// `notnull`
    pub not_null: bool,
    /// `pk`
    pub primary_key: bool,
    /// `ai`
    pub auto_increment: bool,
    /// Keys this version does not act upon, in the order they appeared.
    pub extra_keys: IndexMap<String, String>,
    /// Flags this version does not act upon, in the order they appeared.
    pub extra_flags: Vec<String>,
}

impl ColumnSpec {
    /// Parse a raw `gen` tag. Never fails: unknown tokens are kept aside.
    pub fn parse(tag: &str) -> ColumnSpec {
        let mut spec = ColumnSpec::default();

        for token in tag.split(',') {
            match token.split_once(':') {
                Some((key, value)) => spec.set_key(key.trim(), value.trim()),
                None => spec.set_flag(token.trim()),
            }
        }

        spec
    }

    fn set_key(&mut self, key: &str, value: &str) {
        let non_empty = || (!value.is_empty()).then(|| value.to_string());
        match key {
            "type" => self.sql_type = non_empty(),
            "length" => self.length = non_empty(),
            "decimal" => self.decimal = non_empty(),
            "default" => self.default = Some(value.to_string()),
            "comment" => self.comment = Some(value.to_string()),
            _ => {
                self.extra_keys.insert(key.to_string(), value.to_string());
            }
        }
    }

    fn set_flag(&mut self, flag: &str) {
        match flag {
            "" => {}
            "unsigned" => self.unsigned = true,
            "notnull" => self.not_null = true,
            "pk" => self.primary_key = true,
            "ai" => self.auto_increment = true,
            _ => {
                if !self.extra_flags.iter().any(|f| f == flag) {
                    self.extra_flags.push(flag.to_string());
                }
            }
        }
    }

    /// The comment to render, if any. Empty comments are dropped.
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether any key or flag was left uninterpreted.
    pub fn has_extras(&self) -> bool {
        !self.extra_keys.is_empty() || !self.extra_flags.is_empty()
    }
}
