//! The fixed sample dataset and the builder that writes it out.
//!
//! Every run replaces the target file outright, so identity values restart
//! at 1 and the order rows below can refer to users and products by their
//! position in the literal lists.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Transaction};

use crate::db::{self, schema};
use crate::logger::{debug, info, trace};
use crate::summary::{Summary, TableCount};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct User {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub price: f64,
    pub stock: i64,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub status: &'static str,
}

pub const USERS: &[User] = &[
    User {
        name: "Alice Smith",
        email: "alice@example.com",
        role: "admin",
    },
    User {
        name: "Bob Jones",
        email: "bob@example.com",
        role: "user",
    },
    User {
        name: "Charlie Brown",
        email: "charlie@example.com",
        role: "user",
    },
    User {
        name: "Diana Prince",
        email: "diana@example.com",
        role: "moderator",
    },
    User {
        name: "Eve Wilson",
        email: "eve@example.com",
        role: "user",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Laptop",
        price: 999.99,
        stock: 50,
        category: "electronics",
    },
    Product {
        name: "Mouse",
        price: 29.99,
        stock: 200,
        category: "electronics",
    },
    Product {
        name: "Keyboard",
        price: 79.99,
        stock: 150,
        category: "electronics",
    },
    Product {
        name: "Monitor",
        price: 299.99,
        stock: 75,
        category: "electronics",
    },
    Product {
        name: "Desk Chair",
        price: 199.99,
        stock: 30,
        category: "furniture",
    },
    Product {
        name: "Standing Desk",
        price: 499.99,
        stock: 20,
        category: "furniture",
    },
    Product {
        name: "Coffee Mug",
        price: 12.99,
        stock: 500,
        category: "accessories",
    },
    Product {
        name: "Notebook",
        price: 5.99,
        stock: 1000,
        category: "accessories",
    },
];

pub const ORDERS: &[Order] = &[
    Order {
        user_id: 1,
        product_id: 1,
        quantity: 1,
        status: "completed",
    },
    Order {
        user_id: 1,
        product_id: 2,
        quantity: 2,
        status: "completed",
    },
    Order {
        user_id: 2,
        product_id: 3,
        quantity: 1,
        status: "pending",
    },
    Order {
        user_id: 3,
        product_id: 4,
        quantity: 1,
        status: "shipped",
    },
    Order {
        user_id: 4,
        product_id: 5,
        quantity: 1,
        status: "pending",
    },
    Order {
        user_id: 5,
        product_id: 6,
        quantity: 1,
        status: "cancelled",
    },
    Order {
        user_id: 2,
        product_id: 7,
        quantity: 3,
        status: "completed",
    },
    Order {
        user_id: 3,
        product_id: 8,
        quantity: 10,
        status: "pending",
    },
];

/// Delete whatever is at `target`, recreate the schema and load the dataset.
///
/// Nothing is retried or cleaned up on failure: an error after the tables
/// exist leaves them in place but empty, since the rows are only committed
/// once all three tables have been loaded.
pub fn build_fixture(target: &Path) -> Result<Summary> {
    build_fixture_with(target, |_| {})
}

/// Same as [`build_fixture`], calling `on_removed` right after a previous
/// file at `target` has been deleted and before anything else is attempted.
pub fn build_fixture_with(target: &Path, on_removed: impl FnOnce(&Path)) -> Result<Summary> {
    let removed_existing = remove_existing(target)?;
    if removed_existing {
        on_removed(target);
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let mut conn = db::open(target)?;
    create_schema(&conn)?;

    let tx = conn.transaction().context("failed to begin transaction")?;
    insert_users(&tx, USERS)?;
    insert_products(&tx, PRODUCTS)?;
    insert_orders(&tx, ORDERS)?;
    tx.commit().context("failed to commit fixture rows")?;
    info("fixture rows committed");

    let tables = schema::TABLES
        .iter()
        .map(|(name, _)| {
            Ok(TableCount {
                table: name.to_string(),
                rows: db::count_rows(&conn, name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    conn.close()
        .map_err(|(_, err)| err)
        .context("failed to close database")?;
    debug("sqlite: closed");

    Ok(Summary {
        path: target.to_path_buf(),
        removed_existing,
        tables,
    })
}

/// Returns whether a file was removed.
fn remove_existing(target: &Path) -> Result<bool> {
    if !target.exists() {
        return Ok(false);
    }
    std::fs::remove_file(target)
        .with_context(|| format!("failed to remove existing database at {}", target.display()))?;
    info(&format!("removed existing database: {}", target.display()));
    Ok(true)
}

fn create_schema(conn: &Connection) -> Result<()> {
    for (name, ddl) in schema::TABLES {
        conn.execute_batch(ddl)
            .with_context(|| format!("failed to create table {}", name))?;
        debug(&format!("created table {}", name));
    }
    Ok(())
}

pub fn insert_users(tx: &Transaction<'_>, users: &[User]) -> Result<usize> {
    let mut stmt = tx.prepare("INSERT INTO users (name, email, role) VALUES (?1, ?2, ?3)")?;
    for u in users {
        trace(&format!("insert user {}", u.email));
        stmt.execute(params![u.name, u.email, u.role])
            .with_context(|| format!("failed to insert user {}", u.email))?;
    }
    info(&format!("inserted {} users", users.len()));
    Ok(users.len())
}

pub fn insert_products(tx: &Transaction<'_>, products: &[Product]) -> Result<usize> {
    let mut stmt = tx.prepare(
        "INSERT INTO products (name, price, stock, category) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for p in products {
        trace(&format!("insert product {}", p.name));
        stmt.execute(params![p.name, p.price, p.stock, p.category])
            .with_context(|| format!("failed to insert product {}", p.name))?;
    }
    info(&format!("inserted {} products", products.len()));
    Ok(products.len())
}

pub fn insert_orders(tx: &Transaction<'_>, orders: &[Order]) -> Result<usize> {
    let mut stmt = tx.prepare(
        "INSERT INTO orders (user_id, product_id, quantity, status) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for o in orders {
        trace(&format!("insert order user={} product={}", o.user_id, o.product_id));
        stmt.execute(params![o.user_id, o.product_id, o.quantity, o.status])
            .with_context(|| {
                format!("failed to insert order user={} product={}", o.user_id, o.product_id)
            })?;
    }
    info(&format!("inserted {} orders", orders.len()));
    Ok(orders.len())
}
