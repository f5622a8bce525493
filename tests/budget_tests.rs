// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pocketbook::models::{Budget, Category, Transaction, TransactionKind};
use pocketbook::reports::{budget_progress, UNKNOWN_CATEGORY};

fn tx(id: &str, kind: TransactionKind, amount: &str, category_id: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount: amount.parse().unwrap(),
        category_id: category_id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

fn budget(category_id: &str, amount: &str) -> Budget {
    Budget {
        category_id: category_id.to_string(),
        month: "2024-03".to_string(),
        amount: amount.parse().unwrap(),
    }
}

fn cat(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: "blue".to_string(),
        kind: TransactionKind::Expense,
    }
}

#[test]
fn spent_remaining_and_used_share_per_budget() {
    let transactions = vec![
        tx("t1", TransactionKind::Expense, "150", "1", "2024-03-10"),
        tx("t2", TransactionKind::Expense, "75.50", "1", "2024-03-20"),
        tx("t3", TransactionKind::Expense, "40", "2", "2024-03-05"),
    ];
    let budgets = vec![budget("1", "300"), budget("2", "100")];
    let categories = vec![cat("1", "Food"), cat("2", "Transport")];

    let items = budget_progress(&transactions, &budgets, &categories, "2024-03");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].spent, "225.50".parse::<Decimal>().unwrap());
    assert_eq!(items[0].remaining, "74.50".parse::<Decimal>().unwrap());
    assert_eq!(items[0].percentage, "75.2".parse::<Decimal>().unwrap());
    assert_eq!(items[1].spent, Decimal::from(40));
    assert_eq!(items[1].remaining, Decimal::from(60));
    assert_eq!(items[1].percentage, Decimal::from(40));
}

#[test]
fn only_the_target_month_counts() {
    let transactions = vec![
        tx("t1", TransactionKind::Expense, "100", "1", "2024-02-28"),
        tx("t2", TransactionKind::Expense, "30", "1", "2024-03-01"),
        tx("t3", TransactionKind::Expense, "100", "1", "2024-04-01"),
        tx("t4", TransactionKind::Income, "500", "1", "2024-03-15"),
    ];
    let budgets = vec![budget("1", "200")];
    let categories = vec![cat("1", "Food")];

    let items = budget_progress(&transactions, &budgets, &categories, "2024-03");

    assert_eq!(items[0].spent, Decimal::from(30));
    assert_eq!(items[0].remaining, Decimal::from(170));
}

#[test]
fn budget_with_no_activity_reports_zero_spent() {
    let budgets = vec![budget("1", "250")];
    let categories = vec![cat("1", "Food")];

    let items = budget_progress(&[], &budgets, &categories, "2024-03");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].spent, Decimal::ZERO);
    assert_eq!(items[0].remaining, Decimal::from(250));
    assert_eq!(items[0].percentage, Decimal::ZERO);
}

// Documented quirk: a zero budget pins the percentage at zero even when
// money was spent; the remaining column still carries the overrun.
#[test]
fn zero_budget_with_spending_keeps_percentage_at_zero() {
    let transactions = vec![tx("t1", TransactionKind::Expense, "50", "1", "2024-03-10")];
    let budgets = vec![budget("1", "0")];
    let categories = vec![cat("1", "Food")];

    let items = budget_progress(&transactions, &budgets, &categories, "2024-03");

    assert_eq!(items[0].budgeted, Decimal::ZERO);
    assert_eq!(items[0].spent, Decimal::from(50));
    assert_eq!(items[0].remaining, Decimal::from(-50));
    assert_eq!(items[0].percentage, Decimal::ZERO);
}

#[test]
fn over_budget_goes_negative_and_past_one_hundred_percent() {
    let transactions = vec![tx("t1", TransactionKind::Expense, "150", "1", "2024-03-10")];
    let budgets = vec![budget("1", "100")];
    let categories = vec![cat("1", "Food")];

    let items = budget_progress(&transactions, &budgets, &categories, "2024-03");

    assert_eq!(items[0].remaining, Decimal::from(-50));
    assert_eq!(items[0].percentage, Decimal::from(150));

    // exactly on budget sits right at the boundary
    let budgets = vec![budget("1", "150")];
    let items = budget_progress(&transactions, &budgets, &categories, "2024-03");
    assert_eq!(items[0].remaining, Decimal::ZERO);
    assert_eq!(items[0].percentage, Decimal::from(100));
}

#[test]
fn output_preserves_input_budget_order() {
    let budgets = vec![budget("9", "10"), budget("1", "500"), budget("5", "90")];
    let categories = vec![cat("1", "Food"), cat("5", "Transport"), cat("9", "Misc")];

    let items = budget_progress(&[], &budgets, &categories, "2024-03");

    let order: Vec<&str> = items.iter().map(|i| i.category_id.as_str()).collect();
    assert_eq!(order, vec!["9", "1", "5"]);
}

#[test]
fn budget_for_a_deleted_category_uses_the_fallback_name() {
    let budgets = vec![budget("ghost", "100")];

    let items = budget_progress(&[], &budgets, &[], "2024-03");

    assert_eq!(items[0].category_name, UNKNOWN_CATEGORY);
    assert_eq!(items[0].budgeted, Decimal::from(100));
}
