// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::{cli, commands::exporter, db};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO categories(id,name,color,kind) VALUES ('c1','Groceries','orange','expense')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO transactions(id,kind,amount,category_id,date) VALUES \
        ('t1','expense','12.34','c1','2025-01-02')",
        [],
    )
    .unwrap();
    conn
}

fn export_matches(format: &str, out: &str) -> clap::ArgMatches {
    cli::build_cli().get_matches_from([
        "pocketbook",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ])
}

#[test]
fn export_transactions_streams_pretty_json() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = export_matches("json", &out_str);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "t1",
                "date": "2025-01-02",
                "kind": "expense",
                "amount": "12.34",
                "categoryId": "c1",
                "category": "Groceries"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_header_and_rows() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = export_matches("csv", &out_str);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "id,date,kind,amount,category_id,category");
    assert_eq!(lines.next().unwrap(), "t1,2025-01-02,expense,12.34,c1,Groceries");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = export_matches("xml", &out_str);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&conn, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
