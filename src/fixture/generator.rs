//! Fixture generator: schema, seed rows and metadata document in one run

use super::metadata::{MetadataDocument, TableMetadata};
use super::schema::{FixtureSchema, FixtureVariant};
use super::seed::{count_rows, create_table, insert_if_absent, table_columns};
use crate::core::types::{FixtureError, FixtureResult};
use indexmap::IndexMap;
use rusqlite::Connection;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-table outcome of a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub name: String,
    /// Rows inserted by this run
    pub inserted: usize,
    /// Rows in the table after the run
    pub row_count: u64,
}

/// Outcome of a generator run
#[derive(Debug, Clone, Serialize)]
pub struct FixtureReport {
    pub variant: FixtureVariant,
    pub database_path: PathBuf,
    pub metadata_path: PathBuf,
    pub tables: Vec<TableReport>,
}

impl FixtureReport {
    pub fn row_count(&self, table: &str) -> Option<u64> {
        self.tables.iter().find(|t| t.name == table).map(|t| t.row_count)
    }

    pub fn total_inserted(&self) -> usize {
        self.tables.iter().map(|t| t.inserted).sum()
    }
}

/// Materializes one fixture variant into a SQLite store.
///
/// Not safe to run concurrently against the same store; callers serialize
/// regeneration.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    variant: FixtureVariant,
    server_name: Option<String>,
}

impl FixtureGenerator {
    pub fn new(variant: FixtureVariant) -> Self {
        FixtureGenerator {
            variant,
            server_name: None,
        }
    }

    /// Overrides the variant's default server name in the metadata document
    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    pub fn variant(&self) -> FixtureVariant {
        self.variant
    }

    /// Creates the schema, seeds missing rows and rewrites the metadata document.
    ///
    /// Table creation and seeding share one transaction. The metadata
    /// document is only written after that transaction commits.
    pub fn generate(&self, database_path: &Path, metadata_path: &Path) -> FixtureResult<FixtureReport> {
        let schema = self.variant.schema();
        info!(
            variant = %self.variant,
            database = %database_path.display(),
            "Generating fixture"
        );

        ensure_parent_dir(database_path)?;

        let mut conn = Connection::open(database_path)
            .map_err(|err| FixtureError::open_store(database_path, err))?;
        if schema.enforce_foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        }

        let inserted = seed_schema(&mut conn, &schema)?;
        let (tables, document) = self.describe(&conn, &schema, database_path, &inserted)?;
        drop(conn);

        ensure_parent_dir(metadata_path)?;
        document.write(metadata_path)?;
        info!(
            variant = %self.variant,
            metadata = %metadata_path.display(),
            rows = document.total_rows(),
            "Fixture ready"
        );

        Ok(FixtureReport {
            variant: self.variant,
            database_path: database_path.to_path_buf(),
            metadata_path: metadata_path.to_path_buf(),
            tables,
        })
    }

    fn describe(
        &self,
        conn: &Connection,
        schema: &FixtureSchema,
        database_path: &Path,
        inserted: &[usize],
    ) -> FixtureResult<(Vec<TableReport>, MetadataDocument)> {
        let mut reports = Vec::with_capacity(schema.tables.len());
        let mut tables = IndexMap::with_capacity(schema.tables.len());

        for (table, inserted) in schema.tables.iter().zip(inserted) {
            let row_count = count_rows(conn, table.def.name)?;
            reports.push(TableReport {
                name: table.def.name.to_string(),
                inserted: *inserted,
                row_count,
            });
            tables.insert(
                table.def.name.to_string(),
                TableMetadata {
                    description: table.def.description.to_string(),
                    columns: table_columns(conn, table.def.name)?,
                    row_count,
                    foreign_key_reference: table.def.external_ref.map(|entity| entity.join_note()),
                },
            );
        }

        let document = MetadataDocument {
            server_name: self
                .server_name
                .clone()
                .unwrap_or_else(|| schema.server_name.to_string()),
            database_path: database_path.display().to_string(),
            description: schema.description.to_string(),
            business_use_cases: schema.business_use_cases.iter().map(|s| s.to_string()).collect(),
            tables,
            notes: schema
                .notes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            last_updated: MetadataDocument::timestamp_now(),
        };
        Ok((reports, document))
    }
}

/// Runs table creation and seeding in a single transaction; returns rows inserted per table
fn seed_schema(conn: &mut Connection, schema: &FixtureSchema) -> FixtureResult<Vec<usize>> {
    let tx = conn.transaction()?;
    for table in &schema.tables {
        create_table(&tx, table.def)?;
    }

    let mut inserted = Vec::with_capacity(schema.tables.len());
    for table in &schema.tables {
        let mut count = 0;
        for row in &table.rows {
            if insert_if_absent(&tx, table.def, row)? {
                count += 1;
            }
        }
        debug!(table = table.def.name, inserted = count, "Seeded table");
        inserted.push(count);
    }

    tx.commit()?;
    Ok(inserted)
}

fn ensure_parent_dir(path: &Path) -> FixtureResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|err| FixtureError::create_dir(parent, err))
        }
        _ => Ok(()),
    }
}

/// Generates `variant` into the given store and metadata paths
pub fn generate_fixture(
    variant: FixtureVariant,
    database_path: &Path,
    metadata_path: &Path,
) -> FixtureResult<FixtureReport> {
    FixtureGenerator::new(variant).generate(database_path, metadata_path)
}
