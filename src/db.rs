// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::{Budget, Category, Transaction, TransactionKind};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("app.pocketbook", "Pocketbook", "pocketbook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pocketbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS categories(
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        color TEXT NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense'))
    );

    -- category_id is deliberately unconstrained: a transaction may outlive
    -- its category, and reports render those under a fallback label
    CREATE TABLE IF NOT EXISTS transactions(
        id TEXT PRIMARY KEY,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        amount TEXT NOT NULL,
        category_id TEXT NOT NULL,
        date TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);

    CREATE TABLE IF NOT EXISTS budgets(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        month TEXT NOT NULL,
        category_id TEXT NOT NULL,
        amount TEXT NOT NULL,
        UNIQUE(month, category_id)
    );
    "#,
    )?;
    Ok(())
}

pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt =
        conn.prepare("SELECT id, kind, amount, category_id, date FROM transactions ORDER BY date, id")?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let kind_s: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let category_id: String = r.get(3)?;
        let date_s: String = r.get(4)?;
        let kind = TransactionKind::from_str(&kind_s)
            .with_context(|| format!("Transaction '{}' has bad kind", id))?;
        let amount = amount_s
            .parse()
            .with_context(|| format!("Invalid amount '{}' on transaction '{}'", amount_s, id))?;
        let date = chrono::NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' on transaction '{}'", date_s, id))?;
        out.push(Transaction {
            id,
            kind,
            amount,
            category_id,
            date,
        });
    }
    Ok(out)
}

pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, color, kind FROM categories ORDER BY name")?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let name: String = r.get(1)?;
        let color: String = r.get(2)?;
        let kind_s: String = r.get(3)?;
        let kind = TransactionKind::from_str(&kind_s)
            .with_context(|| format!("Category '{}' has bad kind", id))?;
        out.push(Category {
            id,
            name,
            color,
            kind,
        });
    }
    Ok(out)
}

/// Budgets for one month, in the order they were declared. Budget progress
/// preserves this order, so it is a display contract, not a convenience.
pub fn load_budgets(conn: &Connection, month: &str) -> Result<Vec<Budget>> {
    let mut stmt = conn
        .prepare("SELECT category_id, month, amount FROM budgets WHERE month=?1 ORDER BY id")?;
    let mut rows = stmt.query([month])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let category_id: String = r.get(0)?;
        let month: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let amount = amount_s.parse().with_context(|| {
            format!("Invalid budget amount '{}' for {}/{}", amount_s, month, category_id)
        })?;
        out.push(Budget {
            category_id,
            month,
            amount,
        });
    }
    Ok(out)
}
