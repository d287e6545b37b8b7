//! Column definitions.

use tabgen_schema::{ColumnSpec, DbTag, FieldDescriptor};
use tabgen_sql::{Comment, Dialect, Ident};

use crate::error::{Error, Result};
use crate::types::{DEFAULT_DECIMAL, TypeClass, sql_type_for};

/// One rendered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnDef {
    /// Name, type and constraints.
    pub definition: String,
    /// Line comment to place after the column's separator.
    pub trailing: Option<String>,
}

/// Render a field's column definition:
///
/// `<name> <type>[(<len>[,<decimal>])] [UNSIGNED] [PRIMARY KEY] [AUTO_INCREMENT]
/// [NOT NULL] [DEFAULT <value>] [COMMENT <value>]`
pub(crate) fn column_def(
    dialect: Dialect,
    single_line: bool,
    record: &str,
    field: &FieldDescriptor,
    db: &DbTag,
    spec: &ColumnSpec,
) -> Result<ColumnDef> {
    let mut parts = vec![column_type(dialect, record, field, spec)?];

    if spec.unsigned && dialect.supports_unsigned() {
        parts.push("UNSIGNED".to_string());
    }
    if spec.primary_key {
        parts.push("PRIMARY KEY".to_string());
    }
    if spec.auto_increment {
        parts.push(dialect.auto_increment().to_string());
    }
    if spec.not_null {
        parts.push("NOT NULL".to_string());
    }
    if let Some(default) = &spec.default {
        if default.is_empty() {
            parts.push("DEFAULT ''".to_string());
        } else {
            parts.push(format!("DEFAULT {}", default));
        }
    }

    let mut trailing = None;
    if let Some(text) = spec.comment_text() {
        match dialect.comment(text, single_line) {
            Comment::Inline(comment) => parts.push(comment),
            Comment::Trailing(comment) => trailing = Some(comment),
        }
    }

    Ok(ColumnDef {
        definition: format!("{} {}", Ident::new(dialect, &db.name), parts.join(" ")),
        trailing,
    })
}

/// SQL type of a column, with its width.
fn column_type(
    dialect: Dialect,
    record: &str,
    field: &FieldDescriptor,
    spec: &ColumnSpec,
) -> Result<String> {
    if let Some(sql_type) = &spec.sql_type {
        return Ok(sql_type.clone());
    }

    let Some(mapped) = sql_type_for(field.type_name()) else {
        return Err(Error::UnsupportedColumnType {
            record: record.to_string(),
            field: field.name().to_string(),
            type_name: field.type_name().to_string(),
        });
    };

    if mapped.class == TypeClass::Integer
        && spec.primary_key
        && spec.auto_increment
        && let Some(rowid_type) = dialect.integer_primary_key_type()
    {
        return Ok(rowid_type.to_string());
    }

    let ty = match (mapped.class, &spec.length) {
        (TypeClass::Integer | TypeClass::Text, Some(length)) => {
            format!("{}({})", mapped.name, length)
        }
        (TypeClass::Float, Some(length)) => {
            let decimal = spec.decimal.as_deref().unwrap_or(DEFAULT_DECIMAL);
            format!("{}({},{})", mapped.name, length, decimal)
        }
        _ => mapped.name.to_string(),
    };
    Ok(ty)
}

/// Join rendered columns into the body of a `CREATE TABLE`.
///
/// Wrapped bodies put each column on its own line, indented, and are framed
/// by newlines. No comma follows the last column.
pub(crate) fn table_body(columns: &[ColumnDef], wrap: bool) -> String {
    const INDENT: &str = "  ";

    let mut body = String::new();
    for (i, column) in columns.iter().enumerate() {
        if wrap {
            body.push('\n');
            body.push_str(INDENT);
        }
        body.push_str(&column.definition);
        if i + 1 < columns.len() {
            body.push(',');
        }
        if let Some(comment) = &column.trailing {
            body.push(' ');
            body.push_str(comment);
        }
    }
    if wrap && !columns.is_empty() {
        body.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(dialect: Dialect, type_name: &str, db: &str, r#gen: &str) -> Result<String> {
        let field = FieldDescriptor::new("Field", type_name);
        let db = DbTag::parse(db).unwrap();
        let spec = ColumnSpec::parse(r#gen);
        let column = column_def(dialect, false, "TestModel", &field, &db, &spec)?;
        Ok(column.definition)
    }

    #[test]
    fn test_plain_columns() {
        assert_eq!(
            render(Dialect::Sqlite, "i64", "id", "").unwrap(),
            "'id' bigint"
        );
        assert_eq!(
            render(Dialect::Mysql, "String", "name", "length:32,notnull").unwrap(),
            "`name` varchar(32) NOT NULL"
        );
    }

    #[test]
    fn test_float_widths() {
        assert_eq!(
            render(Dialect::Mysql, "f64", "price", "length:10,decimal:2,default:0").unwrap(),
            "`price` double(10,2) DEFAULT 0"
        );
        assert_eq!(
            render(Dialect::Mysql, "f32", "ratio", "length:5").unwrap(),
            "`ratio` float(5,2)"
        );
        // decimal without length is ignored
        assert_eq!(
            render(Dialect::Mysql, "f32", "ratio", "decimal:4").unwrap(),
            "`ratio` float"
        );
    }

    #[test]
    fn test_integer_decimal_ignored() {
        assert_eq!(
            render(Dialect::Mysql, "i32", "age", "length:3,decimal:1").unwrap(),
            "`age` int(3)"
        );
    }

    #[test]
    fn test_temporal_takes_no_width() {
        assert_eq!(
            render(Dialect::Mysql, "NaiveDateTime", "created", "length:6").unwrap(),
            "`created` datetime"
        );
    }

    #[test]
    fn test_type_override_is_verbatim() {
        assert_eq!(
            render(Dialect::Mysql, "String", "blob", "type:text").unwrap(),
            "`blob` text"
        );
        assert_eq!(
            render(Dialect::Mysql, "Vec<u8>", "data", "type:blob,length:10").unwrap(),
            "`data` blob"
        );
    }

    #[test]
    fn test_unsigned_only_in_mysql() {
        assert_eq!(
            render(Dialect::Mysql, "u32", "hits", "unsigned,notnull").unwrap(),
            "`hits` int UNSIGNED NOT NULL"
        );
        assert_eq!(
            render(Dialect::Sqlite, "u32", "hits", "unsigned,notnull").unwrap(),
            "'hits' int NOT NULL"
        );
    }

    #[test]
    fn test_sqlite_rowid_override() {
        assert_eq!(
            render(Dialect::Sqlite, "i32", "id", "length:11,pk,ai,unsigned").unwrap(),
            "'id' integer PRIMARY KEY AUTOINCREMENT"
        );
        assert_eq!(
            render(Dialect::Mysql, "i32", "id", "length:11,pk,ai,unsigned").unwrap(),
            "`id` int(11) UNSIGNED PRIMARY KEY AUTO_INCREMENT"
        );
        // pk alone keeps the mapped type
        assert_eq!(
            render(Dialect::Sqlite, "i64", "id", "pk").unwrap(),
            "'id' bigint PRIMARY KEY"
        );
        // an explicit type wins over the override
        assert_eq!(
            render(Dialect::Sqlite, "i64", "id", "type:int,pk,ai").unwrap(),
            "'id' int PRIMARY KEY AUTOINCREMENT"
        );
    }

    #[test]
    fn test_suffix_order() {
        assert_eq!(
            render(
                Dialect::Mysql,
                "u64",
                "id",
                "default:1,notnull,ai,pk,unsigned,comment:'key'"
            )
            .unwrap(),
            "`id` bigint UNSIGNED PRIMARY KEY AUTO_INCREMENT NOT NULL DEFAULT 1 COMMENT 'key'"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            render(Dialect::Sqlite, "String", "nick", "default:").unwrap(),
            "'nick' varchar DEFAULT ''"
        );
        assert_eq!(
            render(Dialect::Sqlite, "String", "nick", "default:'anon'").unwrap(),
            "'nick' varchar DEFAULT 'anon'"
        );
        assert_eq!(
            render(Dialect::Sqlite, "String", "nick", "").unwrap(),
            "'nick' varchar"
        );
    }

    #[test]
    fn test_mysql_comment_is_raw() {
        assert_eq!(
            render(Dialect::Mysql, "i64", "id", "comment:'row id'").unwrap(),
            "`id` bigint COMMENT 'row id'"
        );
    }

    #[test]
    fn test_empty_comment_dropped() {
        assert_eq!(
            render(Dialect::Mysql, "String", "nick", "comment:").unwrap(),
            "`nick` varchar"
        );
    }

    #[test]
    fn test_sqlite_comment_is_trailing() {
        let field = FieldDescriptor::new("Nick", "String");
        let db = DbTag::parse("nick").unwrap();
        let spec = ColumnSpec::parse("comment:display name");

        let wrapped = column_def(Dialect::Sqlite, false, "UserModel", &field, &db, &spec).unwrap();
        assert_eq!(wrapped.definition, "'nick' varchar");
        assert_eq!(wrapped.trailing.as_deref(), Some("-- display name"));

        let single = column_def(Dialect::Sqlite, true, "UserModel", &field, &db, &spec).unwrap();
        assert_eq!(single.definition, "'nick' varchar /* display name */");
        assert_eq!(single.trailing, None);
    }

    #[test]
    fn test_unsupported_type() {
        let err = render(Dialect::Sqlite, "Vec<u8>", "data", "").unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedColumnType {
                record: "TestModel".to_string(),
                field: "Field".to_string(),
                type_name: "Vec<u8>".to_string(),
            }
        );
    }

    #[test]
    fn test_table_body_separators() {
        let columns = vec![
            ColumnDef {
                definition: "'a' int".to_string(),
                trailing: Some("-- first".to_string()),
            },
            ColumnDef {
                definition: "'b' int".to_string(),
                trailing: Some("-- last".to_string()),
            },
        ];
        assert_eq!(
            table_body(&columns, true),
            "\n  'a' int, -- first\n  'b' int -- last\n"
        );
        assert_eq!(table_body(&columns[..1], false), "'a' int -- first");
        assert_eq!(table_body(&[], true), "");
    }
}
