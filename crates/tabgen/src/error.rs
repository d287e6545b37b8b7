use tabgen_schema::Kind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported type {name} ({kind}), only records are supported")]
    UnsupportedKind { name: String, kind: Kind },

    #[error("record {record} has no columns")]
    EmptyRecord { record: String },

    #[error("record {record}: embedded field {field} has type {type_name}, which is not a record")]
    UnsupportedEmbedding {
        record: String,
        field: String,
        type_name: String,
    },

    #[error(
        "record {record}: field {field} has unsupported column type {type_name} (set `type:` in its gen tag)"
    )]
    UnsupportedColumnType {
        record: String,
        field: String,
        type_name: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
