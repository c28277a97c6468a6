//! Table definitions and seed rows shared by both fixture variants

use super::{federation, standalone};
use crate::core::types::{ExternalRef, FixtureError, PeerEntity};
use rusqlite::types::{ToSql, ToSqlOutput, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which table set a generator run materializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureVariant {
    /// Self-contained e-commerce schema: users, products, orders, order items
    Standalone,
    /// Metadata tables keyed by ids owned by a peer store running `Standalone`
    MetadataOnly,
}

impl FixtureVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureVariant::Standalone => "standalone",
            FixtureVariant::MetadataOnly => "metadata-only",
        }
    }

    /// Builds the full table set and seed rows for this variant
    pub fn schema(&self) -> FixtureSchema {
        match self {
            FixtureVariant::Standalone => standalone::schema(),
            FixtureVariant::MetadataOnly => federation::schema(),
        }
    }
}

impl fmt::Display for FixtureVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureVariant {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standalone" => Ok(FixtureVariant::Standalone),
            "metadata-only" | "metadata" => Ok(FixtureVariant::MetadataOnly),
            _ => Err(FixtureError::UnknownVariant(s.to_string())),
        }
    }
}

/// Static description of one fixture table
#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub description: &'static str,
    /// `CREATE TABLE IF NOT EXISTS ...`
    pub ddl: &'static str,
    /// Columns supplied by every seed row, in order
    pub insert_columns: &'static [&'static str],
    /// A seed row is already present if it matches any one of these column sets
    pub natural_keys: &'static [&'static [&'static str]],
    /// Peer entity the table's rows are keyed by, for the federated variant
    pub external_ref: Option<PeerEntity>,
}

impl TableDef {
    pub(crate) fn column_index(&self, column: &str) -> Option<usize> {
        self.insert_columns.iter().position(|c| *c == column)
    }
}

/// One value in a seed row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'static str),
    External(ExternalRef),
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        SeedValue::Integer(value)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        SeedValue::Integer(i64::from(value))
    }
}

impl From<bool> for SeedValue {
    fn from(value: bool) -> Self {
        SeedValue::Integer(i64::from(value))
    }
}

impl From<f64> for SeedValue {
    fn from(value: f64) -> Self {
        SeedValue::Real(value)
    }
}

impl From<&'static str> for SeedValue {
    fn from(value: &'static str) -> Self {
        SeedValue::Text(value)
    }
}

impl From<Option<&'static str>> for SeedValue {
    fn from(value: Option<&'static str>) -> Self {
        value.map_or(SeedValue::Null, SeedValue::Text)
    }
}

impl From<ExternalRef> for SeedValue {
    fn from(value: ExternalRef) -> Self {
        SeedValue::External(value)
    }
}

impl ToSql for SeedValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SeedValue::Null => Ok(ToSqlOutput::Owned(Value::Null)),
            SeedValue::Integer(v) => Ok(ToSqlOutput::from(*v)),
            SeedValue::Real(v) => Ok(ToSqlOutput::from(*v)),
            SeedValue::Text(v) => Ok(ToSqlOutput::from(*v)),
            SeedValue::External(reference) => reference.to_sql(),
        }
    }
}

/// Values for one row, aligned with [`TableDef::insert_columns`]
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRow(pub Vec<SeedValue>);

impl SeedRow {
    pub fn values(&self) -> &[SeedValue] {
        &self.0
    }
}

/// Builds a [`SeedRow`] from heterogeneous literals
macro_rules! seed_row {
    ($($value:expr),* $(,)?) => {
        $crate::fixture::SeedRow(vec![$($crate::fixture::SeedValue::from($value)),*])
    };
}
pub(crate) use seed_row;

/// A table together with the rows it is seeded with
#[derive(Debug)]
pub struct TableSeed {
    pub def: &'static TableDef,
    pub rows: Vec<SeedRow>,
}

/// Everything a generator run needs for one variant
#[derive(Debug)]
pub struct FixtureSchema {
    pub variant: FixtureVariant,
    pub server_name: &'static str,
    pub description: &'static str,
    pub business_use_cases: &'static [&'static str],
    pub notes: &'static [(&'static str, &'static str)],
    /// Turn on SQLite foreign key enforcement for this store
    pub enforce_foreign_keys: bool,
    pub tables: Vec<TableSeed>,
}

impl FixtureSchema {
    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.def.name).collect()
    }

    pub fn table(&self, name: &str) -> Option<&TableSeed> {
        self.tables.iter().find(|t| t.def.name == name)
    }
}
