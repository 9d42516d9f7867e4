// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use comfy_table::Table;

use crate::models::{Category, SavingsAccount, Transaction};
use crate::utils::{fmt_money, pretty_table};

/// One line of a list view.
pub trait ListItem {
    fn line(&self) -> String;
}

impl ListItem for Transaction {
    fn line(&self) -> String {
        format!(
            "{} - {}: {}",
            self.date,
            self.description.as_deref().unwrap_or_default(),
            fmt_money(self.amount)
        )
    }
}

impl ListItem for SavingsAccount {
    fn line(&self) -> String {
        let mut s = format!("{} - {}", self.name, fmt_money(self.amount));
        if let Some(goal) = self.goal {
            s.push_str(&format!(" (goal {})", fmt_money(goal)));
        }
        s
    }
}

/// Numbered list in the order given, or `No <kind> found`.
pub fn list_view<'a, T: ListItem + 'a>(kind: &str, items: impl IntoIterator<Item = &'a T>) -> String {
    let lines: Vec<String> = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.line()))
        .collect();
    if lines.is_empty() {
        format!("No {} found", kind)
    } else {
        lines.join("\n")
    }
}

pub fn goals_table(accounts: &[SavingsAccount]) -> Table {
    let rows = accounts
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                fmt_money(a.amount),
                a.goal.map(fmt_money).unwrap_or_else(|| "-".into()),
                a.difference()
                    .map(|d| fmt_money(d.max(0.0)))
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    pretty_table(&["Account", "Saved", "Goal", "Remaining"], rows)
}

pub fn categories_table(categories: &[Category]) -> Table {
    let rows = categories
        .iter()
        .map(|c| {
            let subs: Vec<&str> = c.subcategories.iter().map(|s| s.name.as_str()).collect();
            vec![c.name.clone(), subs.join(", ")]
        })
        .collect();
    pretty_table(&["Category", "Subcategories"], rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordId, TransactionType};

    fn account(name: &str, amount: f64, goal: Option<f64>) -> SavingsAccount {
        SavingsAccount {
            id: RecordId::Int(1),
            date: None,
            name: name.into(),
            amount,
            goal,
        }
    }

    #[test]
    fn empty_collection_renders_message() {
        let none: Vec<SavingsAccount> = vec![];
        assert_eq!(list_view("savings", &none), "No savings found");
    }

    #[test]
    fn goal_annotation_only_when_present() {
        let accounts = vec![account("Car", 250.0, Some(1000.0)), account("Rainy day", 40.0, None)];
        assert_eq!(
            list_view("savings", &accounts),
            "1. Car - $250.00 (goal $1000.00)\n2. Rainy day - $40.00"
        );
    }

    #[test]
    fn transaction_line_shows_date_description_amount() {
        let t = Transaction {
            id: RecordId::Int(7),
            date: "2025-01-03".into(),
            description: Some("Groceries".into()),
            category: "Food".into(),
            subcategory: "Groceries".into(),
            amount: 42.1,
            recurring: None,
            transaction_type: TransactionType::Expense,
        };
        assert_eq!(t.line(), "2025-01-03 - Groceries: $42.10");
    }
}
