//! Fixture module for Moba-MCP
//!
//! Builds the SQLite test stores the query server is exercised against,
//! either the standalone e-commerce schema or the metadata-only schema used
//! for cross-server join tests, and writes the JSON document describing it.

mod federation;
mod generator;
mod metadata;
mod schema;
mod seed;
mod standalone;

pub use generator::{generate_fixture, FixtureGenerator, FixtureReport, TableReport};
pub use metadata::{MetadataDocument, TableMetadata};
pub use schema::{FixtureSchema, FixtureVariant, SeedRow, SeedValue, TableDef, TableSeed};
pub use seed::{count_rows, insert_if_absent, row_exists, table_columns};
