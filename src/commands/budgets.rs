// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{maybe_print_json, parse_decimal, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    conn.execute(
        "INSERT INTO budgets(month, category_id, amount) VALUES (?1,?2,?3)
         ON CONFLICT(month, category_id) DO UPDATE SET amount=excluded.amount",
        params![month, category, amount.to_string()],
    )?;
    println!("Budget set for {} / {} = {}", month, category, amount);
    Ok(())
}

#[derive(Serialize)]
struct BudgetRow {
    month: String,
    category: String,
    amount: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut sql = String::from(
        "SELECT b.month, IFNULL(c.name, b.category_id), b.amount FROM budgets b \
         LEFT JOIN categories c ON b.category_id=c.id",
    );
    let month = sub.get_one::<String>("month");
    let mut data = Vec::new();
    if let Some(month) = month {
        sql.push_str(" WHERE b.month=?1 ORDER BY b.id");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params![month])?;
        while let Some(r) = rows.next()? {
            data.push(BudgetRow {
                month: r.get(0)?,
                category: r.get(1)?,
                amount: r.get(2)?,
            });
        }
    } else {
        sql.push_str(" ORDER BY b.month DESC, b.id");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(r) = rows.next()? {
            data.push(BudgetRow {
                month: r.get(0)?,
                category: r.get(1)?,
                amount: r.get(2)?,
            });
        }
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|b| vec![b.month, b.category, b.amount])
            .collect();
        println!("{}", pretty_table(&["Month", "Category", "Budget"], rows));
    }
    Ok(())
}
