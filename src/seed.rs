// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Deterministic sample data: a starter set of categories, six months of
//! transactions, and budgets for the current month. Amounts vary by month
//! index so trend charts have some shape to them. Re-running replaces the
//! same rows instead of duplicating them.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::reports::{month_key, trailing_months};

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("c1", "Salary", "green", "income"),
    ("c2", "Freelance", "teal", "income"),
    ("c3", "Food", "orange", "expense"),
    ("c4", "Rent", "blue", "expense"),
    ("c5", "Transport", "purple", "expense"),
    ("c6", "Entertainment", "pink", "expense"),
    ("c7", "Utilities", "yellow", "expense"),
];

// current-month budgets, cents
const BUDGETS: &[(&str, i64)] = &[
    ("c3", 60000),
    ("c4", 150000),
    ("c5", 20000),
    ("c6", 15000),
    ("c7", 16000),
];

pub fn run(conn: &Connection, today: NaiveDate) -> Result<()> {
    for (id, name, color, kind) in CATEGORIES {
        conn.execute(
            "INSERT INTO categories(id, name, color, kind) VALUES (?1,?2,?3,?4)
             ON CONFLICT(id) DO UPDATE SET name=excluded.name, color=excluded.color, kind=excluded.kind",
            params![id, name, color, kind],
        )?;
    }

    let mut n = 0usize;
    for (i, &(year, month)) in trailing_months(today, 6).iter().enumerate() {
        let i = i as i64;
        let date = |day: u32| -> Result<String> {
            let d = NaiveDate::from_ymd_opt(year, month, day)
                .with_context(|| format!("Bad seed date {}-{}-{}", year, month, day))?;
            Ok(d.to_string())
        };

        let rows: &[(&str, i64, &str, u32)] = &[
            ("income", 420000, "c1", 1),
            ("income", 35000 + 7500 * i, "c2", 12),
            ("expense", 150000, "c4", 2),
            ("expense", 38000 + 1250 * i, "c3", 8),
            ("expense", 9540, "c3", 21),
            ("expense", 12000 + 600 * i, "c5", 10),
            ("expense", 6000 + 1800 * i, "c6", 15),
            ("expense", 11000 + 400 * i, "c7", 18),
        ];
        for &(kind, cents, category_id, day) in rows {
            n += 1;
            conn.execute(
                "INSERT OR REPLACE INTO transactions(id, kind, amount, category_id, date)
                 VALUES (?1,?2,?3,?4,?5)",
                params![
                    format!("seed-{:04}", n),
                    kind,
                    Decimal::new(cents, 2).to_string(),
                    category_id,
                    date(day)?
                ],
            )?;
        }
    }

    let month = month_key(today);
    for &(category_id, cents) in BUDGETS {
        conn.execute(
            "INSERT INTO budgets(month, category_id, amount) VALUES (?1,?2,?3)
             ON CONFLICT(month, category_id) DO UPDATE SET amount=excluded.amount",
            params![month, category_id, Decimal::new(cents, 2).to_string()],
        )?;
    }

    println!(
        "Seeded {} categories, {} transactions, {} budgets for {}",
        CATEGORIES.len(),
        n,
        BUDGETS.len(),
        month
    );
    Ok(())
}
