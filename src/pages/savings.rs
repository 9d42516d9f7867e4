// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Savings page: accounts plus the deposits booked against them.
//!
//! Two collections are loaded on mount. The form switches between opening
//! an account and depositing into one; the deposit variant takes its
//! pick-list from the loaded accounts.

use std::fmt;

use crate::client::{Collections, Resource};
use crate::error::{ClientError, Error, PageError};
use crate::forms::{SavingsAccountForm, SavingsTransactionForm};
use crate::models::{savings_transactions, SavingsAccount, Transaction};
use crate::page::{Page, PageData};
use crate::views::{goals_table, list_view};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsData {
    pub accounts: Vec<SavingsAccount>,
    pub transactions: Vec<Transaction>,
}

impl PageData for SavingsData {
    fn load<C: Collections>(client: &C) -> Result<Self, ClientError> {
        let accounts = client.list(Resource::Savings)?;
        let transactions = client.list(Resource::Transactions)?;
        Ok(Self {
            accounts,
            transactions,
        })
    }
}

impl SavingsData {
    pub fn account_names(&self) -> Vec<String> {
        self.accounts.iter().map(|a| a.name.clone()).collect()
    }

    pub fn savings_transactions(&self) -> Vec<&Transaction> {
        savings_transactions(&self.transactions)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormType {
    #[default]
    Savings,
    Transaction,
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormType::Savings => f.write_str("savings"),
            FormType::Transaction => f.write_str("transaction"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SavingsForm {
    Account(SavingsAccountForm),
    Transaction(SavingsTransactionForm),
}

impl SavingsForm {
    pub fn form_type(&self) -> FormType {
        match self {
            SavingsForm::Account(_) => FormType::Savings,
            SavingsForm::Transaction(_) => FormType::Transaction,
        }
    }
}

impl Default for SavingsForm {
    fn default() -> Self {
        SavingsForm::Account(SavingsAccountForm::default())
    }
}

#[derive(Debug, Default)]
pub struct SavingsPage {
    pub page: Page<SavingsData>,
    form: SavingsForm,
}

impl SavingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount<C: Collections>(&mut self, client: &C) {
        self.page.mount(client);
    }

    pub fn form_type(&self) -> FormType {
        self.form.form_type()
    }

    pub fn form(&self) -> &SavingsForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SavingsForm {
        &mut self.form
    }

    /// Swaps the active form. The deposit form needs the accounts, so it can
    /// only be picked once the page is ready. Re-selecting the active type
    /// keeps what was typed.
    pub fn select_form(&mut self, form_type: FormType) -> Result<(), PageError> {
        if self.form.form_type() == form_type {
            return Ok(());
        }
        self.form = match form_type {
            FormType::Savings => SavingsForm::Account(SavingsAccountForm::default()),
            FormType::Transaction => {
                let names = self.page.ready_mut()?.account_names();
                SavingsForm::Transaction(SavingsTransactionForm::new(names))
            }
        };
        Ok(())
    }

    pub fn submit<C: Collections>(&mut self, client: &C) -> Result<(), Error> {
        match &mut self.form {
            SavingsForm::Account(form) => self
                .page
                .submit(form, client, |data, account| data.accounts.push(account)),
            SavingsForm::Transaction(form) => self
                .page
                .submit(form, client, |data, txn| data.transactions.push(txn)),
        }
    }

    pub fn accounts(&self) -> &[SavingsAccount] {
        self.page
            .data()
            .map(|d| d.accounts.as_slice())
            .unwrap_or_default()
    }

    pub fn savings_transactions(&self) -> Vec<&Transaction> {
        self.page
            .data()
            .map(|d| d.savings_transactions())
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        self.page.render(|data| {
            let mut out = format!("Savings\n{}", list_view("savings", &data.accounts));
            out.push_str(&format!(
                "\n\nSavings Transactions\n{}",
                list_view("savings transactions", data.savings_transactions())
            ));
            if data.accounts.iter().any(|a| a.goal.is_some()) {
                out.push_str(&format!("\n\nSavings Goals\n{}", goals_table(&data.accounts)));
            }
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBackend;
    use serde_json::json;

    #[test]
    fn transaction_form_needs_loaded_accounts() {
        let mut page = SavingsPage::new();
        assert_eq!(
            page.select_form(FormType::Transaction),
            Err(PageError::Unmounted)
        );
        assert_eq!(page.form_type(), FormType::Savings);

        let backend = FakeBackend::new().with(
            Resource::Savings,
            vec![json!({"id": 1, "name": "Car", "amount": 10.0, "goal": 500.0})],
        );
        page.mount(&backend);
        page.select_form(FormType::Transaction).unwrap();
        match page.form() {
            SavingsForm::Transaction(f) => assert_eq!(f.accounts(), ["Car".to_string()]),
            other => panic!("unexpected form {:?}", other),
        }
    }
}
