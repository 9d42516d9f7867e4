// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{Collections, Resource};
use crate::error::{ClientError, Error};
use crate::forms::TransactionForm;
use crate::models::Transaction;
use crate::page::{Page, PageData};
use crate::views::list_view;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensesData {
    pub transactions: Vec<Transaction>,
}

impl PageData for ExpensesData {
    fn load<C: Collections>(client: &C) -> Result<Self, ClientError> {
        Ok(Self {
            transactions: client.list(Resource::Transactions)?,
        })
    }
}

impl ExpensesData {
    /// Transactions that repeat, in backend order.
    pub fn upcoming(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.recurring.is_some())
    }
}

#[derive(Debug, Default)]
pub struct ExpensesPage {
    pub page: Page<ExpensesData>,
    pub form: TransactionForm,
}

impl ExpensesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount<C: Collections>(&mut self, client: &C) {
        self.page.mount(client);
    }

    pub fn submit<C: Collections>(&mut self, client: &C) -> Result<(), Error> {
        self.page
            .submit(&mut self.form, client, |data, txn| data.transactions.push(txn))
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.page
            .data()
            .map(|d| d.transactions.as_slice())
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        self.page.render(|data| {
            let upcoming: Vec<String> = data
                .upcoming()
                .map(|t| {
                    format!(
                        "- {} ({})",
                        t.description.as_deref().unwrap_or(&t.category),
                        t.recurring.map(|r| r.label()).unwrap_or_default()
                    )
                })
                .collect();
            let upcoming = if upcoming.is_empty() {
                "No upcoming expenses found".to_string()
            } else {
                upcoming.join("\n")
            };
            format!(
                "Expenses\n{}\n\nUpcoming Expenses\n{}",
                list_view("expenses", &data.transactions),
                upcoming
            )
        })
    }
}
