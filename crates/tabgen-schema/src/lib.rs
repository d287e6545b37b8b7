//! Record descriptors and column tag parsing for tabgen.
//!
//! Rust has no runtime reflection, so the DDL emitter never looks at a type
//! directly. It consumes a [`TypeDescriptor`]: a record name plus an ordered
//! list of [`FieldDescriptor`]s carrying the declared type name and the raw
//! `db` / `gen` tags of every field.
//!
//! Descriptors come from one of:
//! - the [`record!`] macro, which declares a struct and implements [`Record`],
//! - [`RecordDef`] built by hand (or from data at runtime),
//! - facet reflection, behind the `facet` feature.
//!
//! ## Example
//!
//! ```
//! use tabgen_schema::{Record, TypeDescriptor, record};
//!
//! record! {
//!     pub struct UserModel {
//!         pub id: i64 [db = "id", gen = "pk,ai"],
//!         pub name: String [db = "name", gen = "length:32,notnull"],
//!         pub scratch: String [],
//!     }
//! }
//!
//! let record = UserModel::descriptor();
//! assert_eq!(record.name(), "UserModel");
//! assert_eq!(record.fields()[1].tag("gen"), Some("length:32,notnull"));
//! ```

use indexmap::IndexMap;
use std::fmt;

mod macros;

mod tag;
pub use tag::*;

#[cfg(feature = "facet")]
pub mod facet;

/// What a described type is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A struct-like type with named fields.
    Record,
    /// Anything else (scalars, enums, collections...).
    Other,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Record => f.write_str("record"),
            Kind::Other => f.write_str("other"),
        }
    }
}

/// The shape of a type as seen by the emitter.
pub trait TypeDescriptor {
    fn kind(&self) -> Kind;

    /// Declared name of the type, e.g. `UserModel`.
    fn name(&self) -> &str;

    /// Fields in declaration order. Empty for non-records.
    fn fields(&self) -> &[FieldDescriptor];
}

/// Types that can describe their own layout statically.
///
/// Usually implemented by the [`record!`] macro.
pub trait Record {
    fn descriptor() -> RecordDef;
}

/// A single declared field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    type_name: String,
    embedded: Option<Box<RecordDef>>,
    tags: IndexMap<String, String>,
}

impl FieldDescriptor {
    /// A regular field. `type_name` is normalized with [`canonical_type_name`].
    pub fn new(name: impl Into<String>, type_name: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            type_name: canonical_type_name(type_name.as_ref()),
            embedded: None,
            tags: IndexMap::new(),
        }
    }

    /// A field whose type contributes its own fields to the parent.
    pub fn embedded(name: impl Into<String>, record: RecordDef) -> Self {
        Self {
            name: name.into(),
            type_name: record.name.clone(),
            embedded: Some(Box::new(record)),
            tags: IndexMap::new(),
        }
    }

    /// Attach a raw tag (`db`, `gen`, ...). A repeated key replaces the earlier value.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    /// Descriptor of the embedded type, for embedded fields.
    pub fn embedded_record(&self) -> Option<&RecordDef> {
        self.embedded.as_deref()
    }

    /// Raw value of a tag, `None` when the field does not carry it.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An owned description of a type.
///
/// This is the common currency of every introspection strategy, and doubles
/// as an explicit schema builder:
///
/// ```
/// use tabgen_schema::{FieldDescriptor, Kind, RecordDef, TypeDescriptor};
///
/// let stamps = RecordDef::new("TimestampsModel")
///     .field(FieldDescriptor::new("created", "time.Time").with_tag("db", "created"));
/// let article = RecordDef::new("ArticleModel")
///     .field(FieldDescriptor::new("id", "int64").with_tag("db", "id"))
///     .embed("TimestampsModel", stamps);
///
/// assert_eq!(article.kind(), Kind::Record);
/// assert!(article.fields()[1].is_embedded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    name: String,
    kind: Kind,
    fields: Vec<FieldDescriptor>,
}

impl RecordDef {
    /// An empty record named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Record,
            fields: Vec::new(),
        }
    }

    /// A non-record type. Handing one to the emitter is an error.
    pub fn opaque(name: impl AsRef<str>) -> Self {
        Self {
            name: canonical_type_name(name.as_ref()),
            kind: Kind::Other,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.push_field(field);
        self
    }

    pub fn embed(self, name: impl Into<String>, record: RecordDef) -> Self {
        self.field(FieldDescriptor::embedded(name, record))
    }

    pub fn push_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }
}

impl TypeDescriptor for RecordDef {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Normalize the spelling of a type name.
///
/// Whitespace is dropped except between two word-like tokens, so the output
/// of `stringify!` and hand-written names compare equal:
///
/// ```
/// use tabgen_schema::canonical_type_name;
/// assert_eq!(canonical_type_name("Option < chrono :: NaiveDateTime >"), "Option<chrono::NaiveDateTime>");
/// assert_eq!(canonical_type_name("& 'static str"), "&'static str");
/// ```
pub fn canonical_type_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for token in raw.split_whitespace() {
        let joins_words = out.chars().next_back().is_some_and(is_word_char)
            && token.chars().next().is_some_and(is_word_char);
        if joins_words {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
