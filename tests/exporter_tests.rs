// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_tracker::{cli, client::Resource, commands::exporter, fake::FakeBackend};
use serde_json::{json, Value};
use tempfile::tempdir;

fn backend() -> FakeBackend {
    FakeBackend::new()
        .with(
            Resource::Transactions,
            vec![json!({"id": 1, "date": "2025-01-02", "description": "Corner Shop", "category": "Food",
                        "subcategory": "Groceries", "amount": 12.3, "recurring": "weekly",
                        "transaction_type": "expense"})],
        )
        .with(
            Resource::Savings,
            vec![
                json!({"id": 1, "name": "Car", "amount": 250.0, "goal": 1000.0}),
                json!({"id": 2, "name": "Rainy day", "amount": 40.0}),
            ],
        )
}

fn export_args(target: &str, format: &str, out: &str) -> clap::ArgMatches {
    let m = cli::build_cli().get_matches_from([
        "budget-tracker",
        "export",
        target,
        "--format",
        format,
        "--out",
        out,
    ]);
    let Some(("export", ex_m)) = m.subcommand() else {
        panic!("no export subcommand");
    };
    let Some((_, sub)) = ex_m.subcommand() else {
        panic!("no export target");
    };
    sub.clone()
}

#[test]
fn export_transactions_csv() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    let out_str = out.to_string_lossy().to_string();

    let sub = export_args("transactions", "csv", &out_str);
    let n = exporter::export(&backend(), Resource::Transactions, &sub).unwrap();
    assert_eq!(n, 1);

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,description,category,subcategory,amount,recurring,transaction_type"
    );
    assert_eq!(
        lines.next().unwrap(),
        "1,2025-01-02,Corner Shop,Food,Groceries,12.30,weekly,expense"
    );
    assert!(lines.next().is_none());
}

#[test]
fn export_savings_json_keeps_order() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("savings.json");
    let out_str = out.to_string_lossy().to_string();

    let sub = export_args("savings", "json", &out_str);
    let n = exporter::export(&backend(), Resource::Savings, &sub).unwrap();
    assert_eq!(n, 2);

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr[0]["name"], "Car");
    assert_eq!(arr[1]["name"], "Rainy day");
    assert_eq!(arr[1]["goal"], Value::Null);
}

#[test]
fn export_fails_when_backend_does() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    let b = backend();
    b.fail(Resource::Transactions);
    let sub = export_args("transactions", "csv", &out.to_string_lossy());
    assert!(exporter::export(&b, Resource::Transactions, &sub).is_err());
    assert!(!out.exists());
}
