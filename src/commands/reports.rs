// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Thin shells over the pure aggregation in [`crate::reports`]: load the
//! full tables, default the reference date from the wall clock, render.

use crate::db::{load_budgets, load_categories, load_transactions};
use crate::reports::{budget_progress, month_key, monthly_trend, spending_by_category};
use crate::utils::{maybe_print_json, parse_month, pretty_table, today};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("spending", sub)) => spending(conn, sub)?,
        Some(("trend", sub)) => trend(conn, sub)?,
        Some(("budget", sub)) => budget(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn spending(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = load_transactions(conn)?;
    let categories = load_categories(conn)?;

    let data = spending_by_category(&transactions, &categories);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|s| {
                vec![
                    s.category_name.clone(),
                    format!("{:.2}", s.amount),
                    format!("{:.1}%", s.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn trend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&6);
    let transactions = load_transactions(conn)?;

    let data = monthly_trend(&transactions, months, today());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|t| {
                vec![
                    t.month.clone(),
                    format!("{:.2}", t.income),
                    format!("{:.2}", t.expenses),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));
    }
    Ok(())
}

fn budget(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => month_key(today()),
    };
    let transactions = load_transactions(conn)?;
    let categories = load_categories(conn)?;
    let budgets = load_budgets(conn, &month)?;

    let data = budget_progress(&transactions, &budgets, &categories, &month);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|b| {
                let remaining = if b.remaining.is_sign_negative() {
                    format!("{:.2} over", -b.remaining)
                } else {
                    format!("{:.2}", b.remaining)
                };
                vec![
                    b.category_name.clone(),
                    format!("{:.2}", b.budgeted),
                    format!("{:.2}", b.spent),
                    remaining,
                    format!("{:.1}%", b.percentage),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Budgeted", "Spent", "Remaining", "Used"],
                rows
            )
        );
    }
    Ok(())
}
