// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{Collections, Resource};
use crate::models::{SavingsAccount, Transaction};
use anyhow::{bail, Context, Result};

const TRANSACTION_HEADERS: &[&str] = &[
    "id",
    "date",
    "description",
    "category",
    "subcategory",
    "amount",
    "recurring",
    "transaction_type",
];

const SAVINGS_HEADERS: &[&str] = &["id", "date", "name", "amount", "goal"];

pub fn handle<C: Collections>(client: &C, m: &clap::ArgMatches) -> Result<()> {
    let (resource, sub) = match m.subcommand() {
        Some(("transactions", sub)) => (Resource::Transactions, sub),
        Some(("savings", sub)) => (Resource::Savings, sub),
        _ => return Ok(()),
    };
    let out = sub.get_one::<String>("out").unwrap();
    let n = export(client, resource, sub)?;
    println!("Exported {} {} to {}", n, resource, out);
    Ok(())
}

/// Writes the whole collection to `--out`; returns how many records.
pub fn export<C: Collections>(
    client: &C,
    resource: Resource,
    sub: &clap::ArgMatches,
) -> Result<usize> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let (headers, rows, items): (&[&str], Vec<Vec<String>>, serde_json::Value) = match resource {
        Resource::Transactions => {
            let txns: Vec<Transaction> = client
                .list(resource)
                .context("Failed to load transactions")?;
            let rows: Vec<Vec<String>> = txns
                .iter()
                .map(|t| {
                    vec![
                        t.id.to_string(),
                        t.date.clone(),
                        t.description.clone().unwrap_or_default(),
                        t.category.clone(),
                        t.subcategory.clone(),
                        format!("{:.2}", t.amount),
                        t.recurring.map(|r| r.to_string()).unwrap_or_default(),
                        t.transaction_type.as_str().to_string(),
                    ]
                })
                .collect();
            (
                TRANSACTION_HEADERS,
                rows,
                serde_json::to_value(&txns)?,
            )
        }
        Resource::Savings => {
            let accounts: Vec<SavingsAccount> = client
                .list(resource)
                .context("Failed to load savings")?;
            let rows: Vec<Vec<String>> = accounts
                .iter()
                .map(|a| {
                    vec![
                        a.id.to_string(),
                        a.date.clone().unwrap_or_default(),
                        a.name.clone(),
                        format!("{:.2}", a.amount),
                        a.goal.map(|g| format!("{:.2}", g)).unwrap_or_default(),
                    ]
                })
                .collect();
            (
                SAVINGS_HEADERS,
                rows,
                serde_json::to_value(&accounts)?,
            )
        }
        Resource::Categories => bail!("categories cannot be exported"),
    };

    let count = rows.len();
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(headers)?;
            for row in rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(count)
}
