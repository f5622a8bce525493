// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over already-loaded transactions, categories, and
//! budgets. Nothing here touches the database or the wall clock; command
//! handlers load rows, pick the reference date, and call in.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Budget, Category, Transaction, TransactionKind};

/// Name and color reported for transactions whose category id has no match.
pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const UNKNOWN_COLOR: &str = "gray";

#[derive(Debug, Clone, Serialize)]
pub struct CategorySpending {
    pub category_id: String,
    pub category_name: String,
    pub color: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrend {
    pub month: String, // short label, e.g. "Mar"
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetProgressItem {
    pub category_id: String,
    pub category_name: String,
    pub color: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}

/// Look up a category's display name and color, falling back to
/// [`UNKNOWN_CATEGORY`]/[`UNKNOWN_COLOR`] when the id has no match.
/// Transactions may reference deleted categories, so a miss is normal.
pub fn resolve_category<'a>(categories: &'a [Category], id: &str) -> (&'a str, &'a str) {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| (c.name.as_str(), c.color.as_str()))
        .unwrap_or((UNKNOWN_CATEGORY, UNKNOWN_COLOR))
}

/// Total expense amounts per category, largest first, with each entry's
/// share of the overall expense total.
///
/// Income transactions are ignored: this report answers "where did the
/// money go". Categories with no expense activity are omitted rather than
/// zero-filled. When the total is zero every percentage is zero, so an
/// empty input yields an empty result, never a division by zero.
pub fn spending_by_category(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategorySpending> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions {
        if t.kind == TransactionKind::Expense {
            *totals.entry(t.category_id.as_str()).or_insert(Decimal::ZERO) += t.amount;
        }
    }

    let grand_total: Decimal = totals.values().copied().sum();

    let mut items: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(cat_id, amount)| {
            let (name, color) = resolve_category(categories, cat_id);
            let percentage = if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                round1(amount / grand_total * Decimal::ONE_HUNDRED)
            };
            CategorySpending {
                category_id: cat_id.to_string(),
                category_name: name.to_string(),
                color: color.to_string(),
                amount,
                percentage,
            }
        })
        .collect();
    items.sort_by(|a, b| b.amount.cmp(&a.amount));
    items
}

/// Income and expense totals per calendar month over the trailing
/// `month_count` months ending with `today`'s month, oldest first.
///
/// Every month in the window appears, zero-filled if quiet, so the output
/// length is always `month_count`. Transactions outside the window are
/// ignored. Totals are rounded to two decimal places, half away from zero.
///
/// `today` is explicit so callers can pin the window in tests; the CLI
/// defaults it from the wall clock at the boundary.
pub fn monthly_trend(
    transactions: &[Transaction],
    month_count: usize,
    today: NaiveDate,
) -> Vec<MonthlyTrend> {
    let window = trailing_months(today, month_count);
    let index: HashMap<(i32, u32), usize> = window
        .iter()
        .enumerate()
        .map(|(i, &ym)| (ym, i))
        .collect();

    let mut buckets = vec![(Decimal::ZERO, Decimal::ZERO); window.len()];
    for t in transactions {
        if let Some(&i) = index.get(&(t.date.year(), t.date.month())) {
            match t.kind {
                TransactionKind::Income => buckets[i].0 += t.amount,
                TransactionKind::Expense => buckets[i].1 += t.amount,
            }
        }
    }

    window
        .iter()
        .zip(buckets)
        .map(|(&(_, month), (income, expenses))| MonthlyTrend {
            month: month_label(month).to_string(),
            income: round2(income),
            expenses: round2(expenses),
        })
        .collect()
}

/// Budget-vs-actual for one target month, one item per budget, in the
/// order the budgets were given.
///
/// `spent` sums the month's expense transactions for the budget's
/// category; `remaining` goes negative when over budget. `percentage` is
/// spent over budgeted, one decimal place, and is pinned to zero when the
/// budgeted amount is zero even if money was spent (the remaining column
/// still shows the overrun). Spending in categories without a declared
/// budget does not appear here at all: this report only answers for
/// declared budgets.
pub fn budget_progress(
    transactions: &[Transaction],
    budgets: &[Budget],
    categories: &[Category],
    target_month: &str,
) -> Vec<BudgetProgressItem> {
    let mut spent_by_category: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions {
        if t.kind == TransactionKind::Expense && month_key(t.date) == target_month {
            *spent_by_category
                .entry(t.category_id.as_str())
                .or_insert(Decimal::ZERO) += t.amount;
        }
    }

    budgets
        .iter()
        .map(|b| {
            let (name, color) = resolve_category(categories, &b.category_id);
            let spent = spent_by_category
                .get(b.category_id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            let percentage = if b.amount.is_zero() {
                Decimal::ZERO
            } else {
                round1(spent / b.amount * Decimal::ONE_HUNDRED)
            };
            BudgetProgressItem {
                category_id: b.category_id.clone(),
                category_name: name.to_string(),
                color: color.to_string(),
                budgeted: b.amount,
                spent,
                remaining: b.amount - spent,
                percentage,
            }
        })
        .collect()
}

/// The `YYYY-MM` token for a date, matching the `month` column of budgets.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// The trailing `count` (year, month) pairs ending with `today`'s month
/// inclusive, chronological ascending.
pub fn trailing_months(today: NaiveDate, count: usize) -> Vec<(i32, u32)> {
    (0..count)
        .rev()
        .map(|back| {
            // months since year zero, so the subtraction carries across years
            let n = today.year() * 12 + today.month() as i32 - 1 - back as i32;
            (n.div_euclid(12), (n.rem_euclid(12) + 1) as u32)
        })
        .collect()
}

pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

fn round1(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

fn round2(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
