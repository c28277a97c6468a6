//! Standalone e-commerce fixture
//!
//! Every row carries an explicit id so that orders and order items point at
//! stable users and products, and so a peer store running the metadata-only
//! fixture can join against the same identifiers.

use super::schema::{seed_row, FixtureSchema, FixtureVariant, TableDef, TableSeed};

pub static USERS: TableDef = TableDef {
    name: "users",
    description: "Registered customer accounts",
    ddl: "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        email TEXT UNIQUE NOT NULL,
        full_name TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        is_active BOOLEAN DEFAULT 1
    )",
    insert_columns: &["id", "username", "email", "full_name", "is_active"],
    natural_keys: &[&["id"], &["username"], &["email"]],
    external_ref: None,
};

pub static PRODUCTS: TableDef = TableDef {
    name: "products",
    description: "Product catalog with pricing and stock levels",
    ddl: "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        price DECIMAL(10,2) NOT NULL,
        stock_quantity INTEGER DEFAULT 0,
        category TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
    insert_columns: &["id", "name", "description", "price", "stock_quantity", "category"],
    natural_keys: &[&["id"], &["name"]],
    external_ref: None,
};

pub static ORDERS: TableDef = TableDef {
    name: "orders",
    description: "Customer orders with totals and fulfilment status",
    ddl: "CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        order_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        total_amount DECIMAL(10,2),
        status TEXT DEFAULT 'pending'
    )",
    insert_columns: &["id", "user_id", "order_date", "total_amount", "status"],
    natural_keys: &[&["id"]],
    external_ref: None,
};

pub static ORDER_ITEMS: TableDef = TableDef {
    name: "order_items",
    description: "Line items linking orders to products",
    ddl: "CREATE TABLE IF NOT EXISTS order_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL REFERENCES orders(id),
        product_id INTEGER NOT NULL REFERENCES products(id),
        quantity INTEGER NOT NULL,
        unit_price DECIMAL(10,2) NOT NULL
    )",
    insert_columns: &["id", "order_id", "product_id", "quantity", "unit_price"],
    natural_keys: &[&["id"]],
    external_ref: None,
};

const BUSINESS_USE_CASES: &[&str] = &[
    "Customer account management",
    "Product catalog browsing",
    "Inventory tracking",
    "Order history analysis",
    "Sales reporting",
    "Cross-server data federation testing",
];

const NOTES: &[(&str, &str)] = &[
    (
        "data_separation",
        "This database holds the core entities (users, products, orders, order_items). Analytics metadata lives in a separate MCP server.",
    ),
    (
        "join_capability",
        "Identifiers are fixed so metadata tables in another MCP server can JOIN on them.",
    ),
];

/// Builds the standalone table set: 5 users, 10 products, 4 orders, 6 items
pub fn schema() -> FixtureSchema {
    FixtureSchema {
        variant: FixtureVariant::Standalone,
        server_name: "moba-mcp",
        description: "Sample e-commerce database with users, products, orders and order items",
        business_use_cases: BUSINESS_USE_CASES,
        notes: NOTES,
        enforce_foreign_keys: true,
        tables: vec![
            TableSeed {
                def: &USERS,
                rows: vec![
                    seed_row![1, "alice_j", "alice.johnson@example.com", "Alice Johnson", true],
                    seed_row![2, "bob_smith", "bob.smith@example.com", "Bob Smith", true],
                    seed_row![3, "carol_w", "carol.white@example.com", "Carol White", true],
                    seed_row![4, "dave_b", "dave.brown@example.com", "Dave Brown", false],
                    seed_row![5, "erin_k", "erin.kim@example.com", "Erin Kim", true],
                ],
            },
            TableSeed {
                def: &PRODUCTS,
                rows: vec![
                    seed_row![1, "Laptop Pro 15", "15-inch laptop with 32GB RAM", 1299.99, 25, "Electronics"],
                    seed_row![2, "Wireless Mouse", "Ergonomic 2.4GHz mouse", 29.99, 150, "Electronics"],
                    seed_row![3, "Office Chair", "Adjustable mesh office chair", 399.99, 40, "Furniture"],
                    seed_row![4, "Standing Desk", "Electric height-adjustable desk", 599.99, 15, "Furniture"],
                    seed_row![5, "USB-C Hub", "7-in-1 USB-C adapter", 49.99, 200, "Accessories"],
                    seed_row![6, "27\" Monitor", "27-inch 4K IPS display", 449.99, 30, "Electronics"],
                    seed_row![7, "Desk Lamp", "LED lamp with dimmer", 39.99, 80, "Furniture"],
                    seed_row![8, "Mechanical Keyboard", "Tenkeyless keyboard, brown switches", 89.99, 60, "Electronics"],
                    seed_row![9, "HD Webcam", "1080p webcam with microphone", 69.99, 70, "Electronics"],
                    seed_row![10, "Notebook Set", "Pack of 3 dotted notebooks", 12.99, 500, "Stationery"],
                ],
            },
            TableSeed {
                def: &ORDERS,
                rows: vec![
                    seed_row![1, 1, "2024-01-15 10:30:00", 1329.98, "delivered"],
                    seed_row![2, 2, "2024-01-20 14:45:00", 399.99, "shipped"],
                    seed_row![3, 3, "2024-02-03 09:15:00", 138.95, "processing"],
                    seed_row![4, 1, "2024-02-10 16:00:00", 449.99, "pending"],
                ],
            },
            TableSeed {
                def: &ORDER_ITEMS,
                rows: vec![
                    seed_row![1, 1, 1, 1, 1299.99],
                    seed_row![2, 1, 2, 1, 29.99],
                    seed_row![3, 2, 3, 1, 399.99],
                    seed_row![4, 3, 5, 2, 49.99],
                    seed_row![5, 3, 10, 3, 12.99],
                    seed_row![6, 4, 6, 1, 449.99],
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
        let schema = schema();
        let counts: Vec<_> = schema
            .tables
            .iter()
            .map(|t| (t.def.name, t.rows.len()))
            .collect();
        assert_eq!(
            counts,
            vec![("users", 5), ("products", 10), ("orders", 4), ("order_items", 6)]
        );
    }

    #[test]
    fn test_order_totals_match_items() {
        let schema = schema();
        let items = &schema.table("order_items").unwrap().rows;
        for order in &schema.table("orders").unwrap().rows {
            let (SeedValue::Integer(order_id), SeedValue::Real(total)) = (order.0[0], order.0[3]) else {
                panic!("unexpected order row {:?}", order);
            };
            let sum: f64 = items
                .iter()
                .filter(|item| item.0[1] == SeedValue::Integer(order_id))
                .map(|item| match (item.0[3], item.0[4]) {
                    (SeedValue::Integer(qty), SeedValue::Real(price)) => qty as f64 * price,
                    other => panic!("unexpected item values {:?}", other),
                })
                .sum();
            assert!((sum - total).abs() < 0.005, "order {}: {} != {}", order_id, sum, total);
        }
    }
}
