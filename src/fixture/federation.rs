//! Metadata-only fixture for cross-server federation tests
//!
//! None of these tables declares a foreign key. The `user_id`, `product_id`
//! and `order_id` columns hold [`ExternalRef`] values that are only meaningful
//! next to a peer store seeded with the standalone fixture.

use super::schema::{seed_row, FixtureSchema, FixtureVariant, TableDef, TableSeed};
use crate::core::types::{ExternalRef, PeerEntity};

pub static USER_BEHAVIOR_METADATA: TableDef = TableDef {
    name: "user_behavior_metadata",
    description: "User behavioral analytics and engagement metrics",
    ddl: "CREATE TABLE IF NOT EXISTS user_behavior_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        session_count INTEGER DEFAULT 0,
        avg_session_duration_min DECIMAL(10,2),
        bounce_rate DECIMAL(5,2),
        device_type TEXT,
        browser TEXT,
        geo_location TEXT,
        referral_source TEXT,
        churn_risk_score DECIMAL(3,2),
        last_analyzed TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    insert_columns: &[
        "user_id",
        "session_count",
        "avg_session_duration_min",
        "bounce_rate",
        "device_type",
        "browser",
        "geo_location",
        "referral_source",
        "churn_risk_score",
    ],
    natural_keys: &[&["user_id"]],
    external_ref: Some(PeerEntity::User),
};

pub static PRODUCT_PERFORMANCE_METADATA: TableDef = TableDef {
    name: "product_performance_metadata",
    description: "Product performance metrics and market analysis",
    ddl: "CREATE TABLE IF NOT EXISTS product_performance_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL,
        views_last_30d INTEGER DEFAULT 0,
        conversion_rate DECIMAL(5,2),
        return_rate DECIMAL(5,2),
        avg_cart_abandonment DECIMAL(5,2),
        seasonal_demand_score DECIMAL(3,2),
        competitor_price DECIMAL(10,2),
        market_trend TEXT,
        last_analyzed TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    insert_columns: &[
        "product_id",
        "views_last_30d",
        "conversion_rate",
        "return_rate",
        "avg_cart_abandonment",
        "seasonal_demand_score",
        "competitor_price",
        "market_trend",
    ],
    natural_keys: &[&["product_id"]],
    external_ref: Some(PeerEntity::Product),
};

pub static ORDER_LOGISTICS_METADATA: TableDef = TableDef {
    name: "order_logistics_metadata",
    description: "Order shipping and logistics tracking",
    ddl: "CREATE TABLE IF NOT EXISTS order_logistics_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL,
        warehouse_id TEXT,
        picker_id TEXT,
        packing_time_min INTEGER,
        shipping_carrier TEXT,
        tracking_url TEXT,
        delivery_attempts INTEGER DEFAULT 1,
        carbon_footprint DECIMAL(10,2),
        insurance_amount DECIMAL(10,2)
    )",
    insert_columns: &[
        "order_id",
        "warehouse_id",
        "picker_id",
        "packing_time_min",
        "shipping_carrier",
        "tracking_url",
        "delivery_attempts",
        "carbon_footprint",
        "insurance_amount",
    ],
    natural_keys: &[&["order_id"]],
    external_ref: Some(PeerEntity::Order),
};

pub static USER_PREFERENCES_METADATA: TableDef = TableDef {
    name: "user_preferences_metadata",
    description: "User preferences and communication settings",
    ddl: "CREATE TABLE IF NOT EXISTS user_preferences_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        notification_channel TEXT DEFAULT 'email',
        language_preference TEXT DEFAULT 'en',
        currency_preference TEXT DEFAULT 'USD',
        newsletter_subscribed BOOLEAN DEFAULT 0,
        marketing_consent BOOLEAN DEFAULT 0,
        theme_preference TEXT DEFAULT 'light',
        accessibility_needs TEXT,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    insert_columns: &[
        "user_id",
        "notification_channel",
        "language_preference",
        "currency_preference",
        "newsletter_subscribed",
        "marketing_consent",
        "theme_preference",
        "accessibility_needs",
    ],
    natural_keys: &[&["user_id"]],
    external_ref: Some(PeerEntity::User),
};

pub static PRODUCT_SUPPLIER_METADATA: TableDef = TableDef {
    name: "product_supplier_metadata",
    description: "Product supply chain and manufacturer information",
    ddl: "CREATE TABLE IF NOT EXISTS product_supplier_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL,
        manufacturer_name TEXT,
        manufacturer_country TEXT,
        import_duty_rate DECIMAL(5,2),
        certification_type TEXT,
        sustainability_score INTEGER,
        lead_time_days INTEGER,
        minimum_order_qty INTEGER,
        last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    insert_columns: &[
        "product_id",
        "manufacturer_name",
        "manufacturer_country",
        "import_duty_rate",
        "certification_type",
        "sustainability_score",
        "lead_time_days",
        "minimum_order_qty",
    ],
    natural_keys: &[&["product_id"]],
    external_ref: Some(PeerEntity::Product),
};

pub static ORDER_FINANCIAL_METADATA: TableDef = TableDef {
    name: "order_financial_metadata",
    description: "Order financial and payment processing details",
    ddl: "CREATE TABLE IF NOT EXISTS order_financial_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL,
        payment_processor TEXT,
        transaction_fee DECIMAL(10,2),
        currency_used TEXT DEFAULT 'USD',
        exchange_rate DECIMAL(10,4) DEFAULT 1.0000,
        tax_jurisdiction TEXT,
        invoice_number TEXT,
        accounting_period TEXT,
        processed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    insert_columns: &[
        "order_id",
        "payment_processor",
        "transaction_fee",
        "currency_used",
        "exchange_rate",
        "tax_jurisdiction",
        "invoice_number",
        "accounting_period",
    ],
    natural_keys: &[&["order_id"]],
    external_ref: Some(PeerEntity::Order),
};

const BUSINESS_USE_CASES: &[&str] = &[
    "User behavior analytics",
    "Product performance monitoring",
    "Supply chain management",
    "Logistics tracking",
    "Financial reconciliation",
    "Customer preference analysis",
    "Cross-server data federation testing",
    "Multi-source JOIN operations",
];

const NOTES: &[(&str, &str)] = &[
    (
        "data_separation",
        "This database contains ONLY metadata tables. The core tables (users, products, orders, order_items) exist in a separate MCP server.",
    ),
    (
        "join_capability",
        "Tables use matching IDs to enable JOIN operations across MCP servers.",
    ),
    (
        "testing_purpose",
        "Designed for testing multi-MCP server data federation and cross-server JOIN capabilities.",
    ),
];

/// Builds the six metadata tables keyed by peer user, product and order ids
pub fn schema() -> FixtureSchema {
    let user = ExternalRef::user;
    let product = ExternalRef::product;
    let order = ExternalRef::order;

    FixtureSchema {
        variant: FixtureVariant::MetadataOnly,
        server_name: "metadata-mcp-server",
        description: "Metadata-only database for multi-MCP server testing (disjoint from main data)",
        business_use_cases: BUSINESS_USE_CASES,
        notes: NOTES,
        enforce_foreign_keys: false,
        tables: vec![
            TableSeed {
                def: &USER_BEHAVIOR_METADATA,
                rows: vec![
                    seed_row![user(1), 45, 28.5, 0.12, "Desktop", "Chrome", "New York, USA", "Google Search", 0.15],
                    seed_row![user(2), 23, 15.3, 0.28, "Mobile", "Safari", "London, UK", "Direct", 0.35],
                    seed_row![user(3), 67, 42.1, 0.08, "Desktop", "Firefox", "Berlin, Germany", "Facebook Ads", 0.10],
                    seed_row![user(4), 12, 8.7, 0.45, "Tablet", "Safari", "Tokyo, Japan", "Email Campaign", 0.65],
                    seed_row![user(5), 89, 55.2, 0.05, "Desktop", "Edge", "Sydney, Australia", "Instagram", 0.08],
                ],
            },
            TableSeed {
                def: &PRODUCT_PERFORMANCE_METADATA,
                rows: vec![
                    seed_row![product(1), 3456, 0.045, 0.02, 0.15, 0.85, 1199.99, "Increasing"],
                    seed_row![product(2), 8912, 0.082, 0.01, 0.08, 0.45, 24.99, "Stable"],
                    seed_row![product(3), 1234, 0.032, 0.05, 0.22, 0.60, 379.99, "Decreasing"],
                    seed_row![product(4), 2345, 0.028, 0.03, 0.18, 0.70, 549.99, "Stable"],
                    seed_row![product(5), 5678, 0.065, 0.02, 0.12, 0.55, 44.99, "Increasing"],
                    seed_row![product(6), 4321, 0.055, 0.04, 0.20, 0.80, 399.99, "Increasing"],
                    seed_row![product(7), 2109, 0.072, 0.01, 0.10, 0.40, 34.99, "Stable"],
                    seed_row![product(8), 6789, 0.068, 0.03, 0.14, 0.65, 79.99, "Increasing"],
                    seed_row![product(9), 3210, 0.051, 0.02, 0.16, 0.50, 59.99, "Stable"],
                    seed_row![product(10), 987, 0.095, 0.01, 0.05, 0.30, 10.99, "Decreasing"],
                ],
            },
            TableSeed {
                def: &ORDER_LOGISTICS_METADATA,
                rows: vec![
                    seed_row![order(1), "WH-001", "PICKER-042", 15, "FedEx", "https://fedex.com/track/123456", 1, 2.5, 50.00],
                    seed_row![order(2), "WH-002", "PICKER-017", 12, "UPS", "https://ups.com/track/789012", 1, 1.8, 25.00],
                    seed_row![order(3), "WH-001", "PICKER-023", 18, "DHL", "https://dhl.com/track/345678", 2, 2.2, 15.00],
                    seed_row![order(4), "WH-003", "PICKER-009", 20, "USPS", "https://usps.com/track/901234", 1, 3.1, 35.00],
                ],
            },
            TableSeed {
                def: &USER_PREFERENCES_METADATA,
                rows: vec![
                    seed_row![user(1), "email", "en", "USD", true, true, "dark", None::<&str>],
                    seed_row![user(2), "sms", "en-GB", "GBP", true, false, "light", Some("high-contrast")],
                    seed_row![user(3), "push", "de", "EUR", false, false, "auto", None::<&str>],
                    seed_row![user(4), "email", "ja", "JPY", true, true, "light", Some("large-text")],
                    seed_row![user(5), "email", "en-AU", "AUD", false, true, "dark", None::<&str>],
                ],
            },
            TableSeed {
                def: &PRODUCT_SUPPLIER_METADATA,
                rows: vec![
                    seed_row![product(1), "TechCorp Manufacturing", "China", 0.08, "ISO-9001", 85, 30, 10],
                    seed_row![product(2), "Precision Electronics", "Taiwan", 0.06, "CE", 78, 14, 100],
                    seed_row![product(3), "Comfort Furniture Co", "Vietnam", 0.12, "FSC", 92, 45, 5],
                    seed_row![product(4), "ErgoDesign Industries", "Malaysia", 0.10, "GREENGUARD", 88, 60, 3],
                    seed_row![product(5), "ConnectTech Ltd", "South Korea", 0.07, "RoHS", 80, 21, 50],
                    seed_row![product(6), "DisplayPro Inc", "Japan", 0.09, "Energy Star", 95, 35, 8],
                    seed_row![product(7), "Lumina Lighting", "Netherlands", 0.05, "UL", 90, 28, 20],
                    seed_row![product(8), "KeyMaster Tech", "Germany", 0.04, "CE", 87, 25, 15],
                    seed_row![product(9), "VisionCam Solutions", "Canada", 0.03, "FCC", 82, 18, 25],
                    seed_row![product(10), "PaperCraft Studios", "Italy", 0.02, "FSC", 75, 10, 200],
                ],
            },
            TableSeed {
                def: &ORDER_FINANCIAL_METADATA,
                rows: vec![
                    seed_row![order(1), "Stripe", 38.70, "USD", 1.0000, "NY-US", "INV-2024-001", "2024-Q1"],
                    seed_row![order(2), "PayPal", 13.05, "USD", 1.0000, "CA-US", "INV-2024-002", "2024-Q1"],
                    seed_row![order(3), "Square", 2.61, "USD", 1.0000, "TX-US", "INV-2024-003", "2024-Q1"],
                    seed_row![order(4), "Stripe", 18.85, "USD", 1.0000, "FL-US", "INV-2024-004", "2024-Q1"],
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::SeedValue;

    #[test]
    fn test_cardinality() {
        let counts: Vec<_> = schema()
            .tables
            .iter()
            .map(|t| (t.def.name, t.rows.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("user_behavior_metadata", 5),
                ("product_performance_metadata", 10),
                ("order_logistics_metadata", 4),
                ("user_preferences_metadata", 5),
                ("product_supplier_metadata", 10),
                ("order_financial_metadata", 4),
            ]
        );
    }

    #[test]
    fn test_every_table_is_keyed_by_an_external_ref() {
        for table in schema().tables {
            let entity = table.def.external_ref.expect("metadata tables reference a peer entity");
            assert_eq!(table.def.natural_keys.len(), 1);
            assert_eq!(table.def.natural_keys[0], [entity.reference_column()]);
            assert!(!table.def.ddl.contains("REFERENCES"), "{}", table.def.name);

            let idx = table.def.column_index(entity.reference_column()).unwrap();
            for row in &table.rows {
                match row.values()[idx] {
                    SeedValue::External(reference) => assert_eq!(reference.entity(), entity),
                    other => panic!("{}: expected external ref, got {:?}", table.def.name, other),
                }
            }
        }
    }
}
