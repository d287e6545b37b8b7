use tabgen_schema::{ColumnSpec, DbTag, Kind, Record, TypeDescriptor};
use tabgen_sql::{Dialect, qualified_table};
use tracing::{debug, trace};

use crate::column::{ColumnDef, column_def, table_body};
use crate::config::EmitterConfig;
use crate::error::{Error, Result};
use crate::naming::table_name;

/// Generates `CREATE TABLE` statements for records.
///
/// An emitter only holds configuration; every call to [`Emitter::model`]
/// is independent of the others.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    config: EmitterConfig,
}

impl Emitter {
    /// An emitter with the default configuration (SQLite, wrapped output).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Select the dialect. The identifier quote follows it.
    pub fn set_mode(&mut self, mode: Dialect) {
        self.config.mode = mode;
    }

    pub fn set_schema(&mut self, schema: impl Into<String>) {
        self.config.schema = schema.into();
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.config.suffix = suffix.into();
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.config.wrap = wrap;
    }

    pub fn set_drop(&mut self, drop: bool) {
        self.config.drop = drop;
    }

    /// Generate the DDL for `record`.
    ///
    /// The table name is derived from the record name unless `table` is
    /// given and non-empty. Returns the `CREATE TABLE` statement, preceded by
    /// a `DROP TABLE IF EXISTS` when dropping is enabled.
    pub fn model(
        &self,
        record: &dyn TypeDescriptor,
        table: Option<&str>,
    ) -> Result<Vec<String>> {
        if record.kind() != Kind::Record {
            return Err(Error::UnsupportedKind {
                name: record.name().to_string(),
                kind: record.kind(),
            });
        }
        if record.fields().is_empty() {
            return Err(Error::EmptyRecord {
                record: record.name().to_string(),
            });
        }

        let mut columns = Vec::new();
        self.collect_columns(record.name(), record, &mut columns)?;
        if columns.is_empty() {
            return Err(Error::EmptyRecord {
                record: record.name().to_string(),
            });
        }

        let dialect = self.config.mode;
        let table = match table {
            Some(table) if !table.is_empty() => table.to_string(),
            _ => table_name(record.name(), &self.config.suffix),
        };
        let qualified = qualified_table(dialect, &self.config.schema, &table);

        let mut statements = Vec::with_capacity(2);
        if self.config.drop {
            statements.push(format!("DROP TABLE IF EXISTS {};", qualified));
        }
        statements.push(format!(
            "CREATE TABLE {}({}){};",
            qualified,
            table_body(&columns, self.config.wrap),
            dialect.table_suffix()
        ));

        debug!(
            record = record.name(),
            table = %qualified,
            %dialect,
            columns = columns.len(),
            statements = statements.len(),
            "generated table"
        );

        Ok(statements)
    }

    /// [`Emitter::model`] for a type implementing [`Record`].
    pub fn model_of<T: Record>(&self, table: Option<&str>) -> Result<Vec<String>> {
        self.model(&T::descriptor(), table)
    }

    /// Generate the DDL of several records as one script, separated by blank lines.
    ///
    /// Tables are named after their records. Fails on the first bad record.
    pub fn script(&self, records: &[&dyn TypeDescriptor]) -> Result<String> {
        let mut statements = Vec::new();
        for record in records {
            statements.extend(self.model(*record, None)?);
        }
        Ok(statements.join("\n\n"))
    }

    /// Walk `record` depth-first, flattening embedded records in place.
    fn collect_columns(
        &self,
        root: &str,
        record: &dyn TypeDescriptor,
        columns: &mut Vec<ColumnDef>,
    ) -> Result<()> {
        for field in record.fields() {
            if let Some(embedded) = field.embedded_record() {
                if embedded.kind() != Kind::Record {
                    return Err(Error::UnsupportedEmbedding {
                        record: root.to_string(),
                        field: field.name().to_string(),
                        type_name: field.type_name().to_string(),
                    });
                }
                trace!(record = root, field = field.name(), "flattening embedded record");
                self.collect_columns(root, embedded, columns)?;
                continue;
            }

            let Some(db) = DbTag::parse(field.tag("db").unwrap_or_default()) else {
                trace!(record = root, field = field.name(), "no column name, skipping");
                continue;
            };

            let spec = ColumnSpec::parse(field.tag("gen").unwrap_or_default());
            if spec.has_extras() {
                trace!(
                    record = root,
                    field = field.name(),
                    keys = ?spec.extra_keys.keys().collect::<Vec<_>>(),
                    flags = ?spec.extra_flags,
                    "ignoring unrecognized gen tokens"
                );
            }

            let column = column_def(
                self.config.mode,
                !self.config.wrap,
                root,
                field,
                &db,
                &spec,
            )?;
            trace!(record = root, column = %column.definition, "column");
            columns.push(column);
        }
        Ok(())
    }
}
