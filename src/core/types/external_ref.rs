//! Identifiers that point into a store this process does not own
//!
//! The metadata-only fixture keys its rows by user, product and order ids
//! generated by a peer server's standalone fixture. Nothing checks that the
//! peer row exists: an `ExternalRef` is a plain integer plus the name of the
//! entity it is expected to match when the two stores are joined.

use rusqlite::types::{ToSql, ToSqlOutput};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity owned by the peer store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerEntity {
    User,
    Product,
    Order,
}

impl PeerEntity {
    /// Table holding the entity in the peer store
    pub fn table(&self) -> &'static str {
        match self {
            PeerEntity::User => "users",
            PeerEntity::Product => "products",
            PeerEntity::Order => "orders",
        }
    }

    /// Primary key column in the peer table
    pub fn key_column(&self) -> &'static str {
        "id"
    }

    /// Column name used locally to carry the reference
    pub fn reference_column(&self) -> &'static str {
        match self {
            PeerEntity::User => "user_id",
            PeerEntity::Product => "product_id",
            PeerEntity::Order => "order_id",
        }
    }

    /// Human-readable join hint written into the metadata document
    pub fn join_note(&self) -> String {
        format!(
            "{} -> {}.{} (in another MCP server)",
            self.reference_column(),
            self.table(),
            self.key_column()
        )
    }
}

/// Unchecked reference to a row in the peer store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalRef {
    entity: PeerEntity,
    id: i64,
}

impl ExternalRef {
    pub fn new(entity: PeerEntity, id: i64) -> Self {
        ExternalRef { entity, id }
    }

    pub fn user(id: i64) -> Self {
        Self::new(PeerEntity::User, id)
    }

    pub fn product(id: i64) -> Self {
        Self::new(PeerEntity::Product, id)
    }

    pub fn order(id: i64) -> Self {
        Self::new(PeerEntity::Order, id)
    }

    pub fn entity(&self) -> PeerEntity {
        self.entity
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for ExternalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}={}", self.entity.table(), self.entity.key_column(), self.id)
    }
}

// Stored as the bare identifier; the entity lives only in the schema definition.
impl ToSql for ExternalRef {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.id))
    }
}
