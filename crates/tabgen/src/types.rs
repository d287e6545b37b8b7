//! Mapping from declared Rust types to SQL column types.

/// Family of a mapped type. Decides which widths apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    /// `(length)`
    Integer,
    /// `(length,decimal)`
    Float,
    /// `(length)`
    Text,
    /// no width
    Temporal,
}

/// A SQL type picked for a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlType {
    pub name: &'static str,
    pub class: TypeClass,
}

impl SqlType {
    const fn new(name: &'static str, class: TypeClass) -> Self {
        Self { name, class }
    }
}

const BIGINT: SqlType = SqlType::new("bigint", TypeClass::Integer);
const TINYINT: SqlType = SqlType::new("tinyint", TypeClass::Integer);
const SMALLINT: SqlType = SqlType::new("smallint", TypeClass::Integer);
const INT: SqlType = SqlType::new("int", TypeClass::Integer);
const FLOAT: SqlType = SqlType::new("float", TypeClass::Float);
const DOUBLE: SqlType = SqlType::new("double", TypeClass::Float);
const VARCHAR: SqlType = SqlType::new("varchar", TypeClass::Text);
const DATETIME: SqlType = SqlType::new("datetime", TypeClass::Temporal);

/// Scale used for floating types given a length but no `decimal`.
pub const DEFAULT_DECIMAL: &str = "2";

/// Map a declared type name to its SQL type.
///
/// Both Rust spellings (`i64`, `String`, `Option<NaiveDateTime>`) and the
/// host-neutral ones (`int64`, `string`, `*time.Time`) are understood.
/// `Option<..>` and references map like the type they wrap, and paths are
/// matched on their last segment. `*time.Time` is the only pointer type
/// with a mapping; any other `*T` needs a `type:` override.
///
/// ```
/// use tabgen::sql_type_for;
/// assert_eq!(sql_type_for("i64").unwrap().name, "bigint");
/// assert_eq!(sql_type_for("Option<chrono::NaiveDateTime>").unwrap().name, "datetime");
/// assert_eq!(sql_type_for("Vec<u8>"), None);
/// ```
pub fn sql_type_for(type_name: &str) -> Option<SqlType> {
    let inner = strip_wrappers(type_name);
    if matches!(inner, "time.Time" | "*time.Time") {
        return Some(DATETIME);
    }

    let ty = match base_name(inner) {
        "i64" | "u64" | "isize" | "usize" | "int" | "int64" | "uint" | "uint64" => BIGINT,
        "i8" | "u8" | "int8" | "uint8" | "byte" => TINYINT,
        "i16" | "u16" | "int16" | "uint16" => SMALLINT,
        "i32" | "u32" | "char" | "int32" | "uint32" | "rune" => INT,
        "f32" | "float32" => FLOAT,
        "f64" | "float64" => DOUBLE,
        "String" | "str" | "string" => VARCHAR,
        "NaiveDateTime" | "DateTime" | "SystemTime" | "OffsetDateTime" | "PrimitiveDateTime" => {
            DATETIME
        }
        _ => return None,
    };
    Some(ty)
}

/// Peel references and `Option<..>` off a type name.
fn strip_wrappers(type_name: &str) -> &str {
    let mut ty = type_name.trim();
    loop {
        if let Some(rest) = ty.strip_prefix('&') {
            ty = strip_reference_qualifiers(rest.trim_start());
        } else if base_name(ty) == "Option"
            && let Some(open) = ty.find('<')
            && let Some(inner) = ty[open + 1..].strip_suffix('>')
        {
            ty = inner.trim();
        } else {
            return ty;
        }
    }
}

/// Drop a lifetime and `mut` following `&`.
fn strip_reference_qualifiers(ty: &str) -> &str {
    let mut ty = ty;
    if ty.starts_with('\'') {
        ty = match ty.split_once(char::is_whitespace) {
            Some((_, rest)) => rest.trim_start(),
            None => "",
        };
    }
    match ty.strip_prefix("mut ") {
        Some(rest) => rest.trim_start(),
        None => ty,
    }
}

/// `chrono::DateTime<Utc>` -> `DateTime`
fn base_name(ty: &str) -> &str {
    let path = match ty.find('<') {
        Some(open) => &ty[..open],
        None => ty,
    };
    path.rsplit("::").next().unwrap_or(path).trim()
}
