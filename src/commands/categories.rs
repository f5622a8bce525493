// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let color = sub.get_one::<String>("color").unwrap();
            let kind = sub.get_one::<String>("kind").unwrap();
            let id = format!("c{}", chrono::Utc::now().timestamp_millis());
            conn.execute(
                "INSERT INTO categories(id, name, color, kind) VALUES (?1,?2,?3,?4)",
                params![id, name, color, kind],
            )?;
            println!("Added {} category '{}' ({})", kind, name, id);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let data = crate::db::load_categories(conn)?;
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows = data
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.name.clone(),
                            c.color.clone(),
                            c.kind.as_str().to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Color", "Kind"], rows));
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            conn.execute("DELETE FROM categories WHERE id=?1", params![id])?;
            println!("Removed category '{}'", id);
        }
        _ => {}
    }
    Ok(())
}
