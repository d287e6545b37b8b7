//! Generate `CREATE TABLE` statements from tagged Rust records.
//!
//! Each field carries two tags: `db` names the column, `gen` describes it
//! (`type`, `length`, `decimal`, `default`, `comment` keys and the `unsigned`,
//! `notnull`, `pk`, `ai` flags). The [`Emitter`] turns a record into SQLite
//! or MySQL DDL.
//!
//! # Example
//!
//! ```
//! use tabgen::{Dialect, Emitter, record};
//!
//! record! {
//!     pub struct UserModel {
//!         pub id: i64 [db = "id", gen = "pk,ai"],
//!         pub name: String [db = "name", gen = "length:32,notnull"],
//!     }
//! }
//!
//! let emitter = Emitter::new();
//! let sql = emitter.model_of::<UserModel>(None).unwrap();
//! assert_eq!(
//!     sql[0],
//!     "CREATE TABLE 'user'(\n  'id' integer PRIMARY KEY AUTOINCREMENT,\n  'name' varchar(32) NOT NULL\n);"
//! );
//!
//! let mut emitter = Emitter::new();
//! emitter.set_mode(Dialect::Mysql);
//! let sql = emitter.model_of::<UserModel>(Some("users")).unwrap();
//! assert!(sql[0].starts_with("CREATE TABLE `users`("));
//! ```
//!
//! # Naming
//!
//! Without an explicit table name, the record name is stripped of trailing
//! characters found in the configured suffix (`"Model"` by default) and
//! converted to snake_case. See [`table_name`].

mod column;
mod config;
mod emitter;
mod error;
mod naming;
mod types;

pub use config::{DEFAULT_SUFFIX, EmitterConfig};
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use naming::{snake_case, table_name};
pub use types::{DEFAULT_DECIMAL, SqlType, TypeClass, sql_type_for};

pub use tabgen_schema::{
    ColumnSpec, DbTag, FieldDescriptor, Kind, Record, RecordDef, TypeDescriptor,
    canonical_type_name, record,
};
pub use tabgen_sql::{Dialect, UnknownDialect};

// facet attribute grammar, usable as `tabgen::db` / `tabgen::column`
#[cfg(feature = "facet")]
pub use tabgen_schema::facet;
#[cfg(feature = "facet")]
pub use tabgen_schema::facet::Attr;
#[cfg(feature = "facet")]
pub use tabgen_schema::{__attr, __parse_attr};
