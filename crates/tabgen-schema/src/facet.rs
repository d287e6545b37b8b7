//! Descriptors from facet reflection.
//!
//! ```ignore
//! use facet::Facet;
//!
//! #[derive(Facet)]
//! struct UserModel {
//!     #[facet(tabgen::db = "id", tabgen::column = "pk,ai")]
//!     id: i64,
//!     #[facet(flatten)]
//!     stamps: TimestampsModel,
//! }
//!
//! let record = tabgen::facet::describe::<UserModel>();
//! ```

use facet::{Facet, Shape, Type, UserType};

use crate::{FieldDescriptor, RecordDef};

// Field tags as facet attributes, usable as `tabgen::db` and `tabgen::column`.
// `column` carries what the `gen` tag carries elsewhere; `gen` is a keyword.
facet::define_attr_grammar! {
    ns "tabgen";
    crate_path ::tabgen;

    /// tabgen field attributes.
    pub enum Attr {
        /// Column name and modifiers.
        ///
        /// Usage: `#[facet(tabgen::db = "name,omitempty")]`
        Db(&'static str),

        /// Column spec, stored as the field's `gen` tag.
        ///
        /// Usage: `#[facet(tabgen::column = "length:32,notnull")]`
        Column(&'static str),
    }
}

/// Attribute key and the tag it is stored as.
const TAG_KEYS: [(&str, &str); 2] = [("db", "db"), ("column", "gen")];

/// Describe a facet type.
pub fn describe<T: Facet<'static>>() -> RecordDef {
    describe_shape(T::SHAPE)
}

/// Describe a shape. Anything but a struct becomes an opaque descriptor.
pub fn describe_shape(shape: &'static Shape) -> RecordDef {
    let struct_type = match &shape.ty {
        Type::User(UserType::Struct(s)) => s,
        _ => return RecordDef::opaque(shape.to_string()),
    };

    let mut record = RecordDef::new(shape.type_identifier);
    for field in struct_type.fields {
        let field_shape = field.shape.get();

        if field.is_flattened() {
            record.push_field(FieldDescriptor::embedded(
                field.name,
                describe_shape(field_shape),
            ));
            continue;
        }

        let mut descriptor = FieldDescriptor::new(field.name, field_shape.to_string());
        for (key, tag) in TAG_KEYS {
            if let Some(value) = field_get_tabgen_attr_str(field, key) {
                descriptor = descriptor.with_tag(tag, value);
            }
        }
        record.push_field(descriptor);
    }

    record
}

/// Get a string value from a tabgen attribute on a field.
fn field_get_tabgen_attr_str(field: &facet::Field, key: &str) -> Option<&'static str> {
    field.attributes.iter().find_map(|attr| {
        if attr.ns == Some("tabgen") && attr.key == key {
            attr.get_as::<&str>().copied()
        } else {
            None
        }
    })
}
