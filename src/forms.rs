// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use crate::client::{Collections, Resource};
use crate::error::FormError;
use crate::models::{
    NewSavingsAccount, NewTransaction, SavingsAccount, Transaction, TransactionType,
};
use crate::recurrence::{parse_selector, Recurrence};

/// A controlled-input form bound to one backend collection.
///
/// Fields hold raw text exactly as entered. `payload` validates and
/// serializes them; `submit` posts the payload and, only on success, hands
/// the stored record to `append` and clears the form. A failed submission
/// leaves every field as it was so the user can retry.
pub trait CreationForm {
    type Payload: Serialize;
    type Record: DeserializeOwned;

    const RESOURCE: Resource;

    fn payload(&self) -> Result<Self::Payload, FormError>;

    fn reset(&mut self);

    fn submit<C: Collections>(
        &mut self,
        client: &C,
        append: impl FnOnce(Self::Record),
    ) -> Result<(), FormError> {
        let payload = self.payload()?;
        match client.create::<_, Self::Record>(Self::RESOURCE, &payload) {
            Ok(record) => {
                append(record);
                self.reset();
                info!(resource = %Self::RESOURCE, "record added");
                Ok(())
            }
            Err(e) => {
                error!(resource = %Self::RESOURCE, error = %e, "error adding record");
                Err(FormError::Submit(e))
            }
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(v.to_string())
}

/// Currency input: a finite number, zero or more, at most two decimals.
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, FormError> {
    let v = required(field, value)?;
    let n: f64 = v.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: v.clone(),
    })?;
    if !n.is_finite() {
        return Err(FormError::InvalidNumber { field, value: v });
    }
    if n < 0.0 {
        return Err(FormError::Negative { field });
    }
    let cents = n * 100.0;
    if (cents.round() - cents).abs() > 1e-6 {
        return Err(FormError::TooPrecise { field });
    }
    Ok(n)
}

fn optional_amount(field: &'static str, value: &str) -> Result<Option<f64>, FormError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_amount(field, value).map(Some)
    }
}

pub fn parse_form_date(field: &'static str, value: &str) -> Result<String, FormError> {
    let v = required(field, value)?;
    let d = NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: v.clone(),
    })?;
    Ok(d.format("%Y-%m-%d").to_string())
}

/// Expense page form; also books income when `transaction_type` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub amount: String,
    pub date: String,
    pub recurring: Option<Recurrence>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionForm {
    pub fn set_recurring(&mut self, selector: &str) -> Result<(), FormError> {
        self.recurring = parse_selector(selector)?;
        Ok(())
    }

    pub fn set_transaction_type(&mut self, value: &str) -> Result<(), FormError> {
        self.transaction_type = if value.trim().is_empty() {
            None
        } else {
            Some(value.parse().map_err(FormError::TransactionType)?)
        };
        Ok(())
    }
}

impl CreationForm for TransactionForm {
    type Payload = NewTransaction;
    type Record = Transaction;

    const RESOURCE: Resource = Resource::Transactions;

    fn payload(&self) -> Result<NewTransaction, FormError> {
        Ok(NewTransaction {
            category: required("category", &self.category)?,
            subcategory: required("subcategory", &self.subcategory)?,
            description: required("description", &self.description)?,
            amount: parse_amount("amount", &self.amount)?,
            date: parse_form_date("date", &self.date)?,
            recurring: self.recurring,
            transaction_type: self.transaction_type,
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsAccountForm {
    pub name: String,
    pub amount: String,
    pub goal: String,
    pub date: String,
}

impl CreationForm for SavingsAccountForm {
    type Payload = NewSavingsAccount;
    type Record = SavingsAccount;

    const RESOURCE: Resource = Resource::Savings;

    fn payload(&self) -> Result<NewSavingsAccount, FormError> {
        let date = if self.date.trim().is_empty() {
            None
        } else {
            Some(parse_form_date("date", &self.date)?)
        };
        Ok(NewSavingsAccount {
            name: required("name", &self.name)?,
            amount: parse_amount("amount", &self.amount)?,
            goal: optional_amount("goal", &self.goal)?,
            date,
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Deposit into one of the loaded savings accounts. Booked as income with
/// the account name as category and subcategory, which is what the
/// savings-transaction view filters on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsTransactionForm {
    accounts: Vec<String>,
    pub account: String,
    pub description: String,
    pub amount: String,
    pub date: String,
    pub recurring: Option<Recurrence>,
}

impl SavingsTransactionForm {
    pub fn new(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }

    /// Account names offered by the pick-list.
    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    pub fn set_recurring(&mut self, selector: &str) -> Result<(), FormError> {
        self.recurring = parse_selector(selector)?;
        Ok(())
    }
}

impl CreationForm for SavingsTransactionForm {
    type Payload = NewTransaction;
    type Record = Transaction;

    const RESOURCE: Resource = Resource::Transactions;

    fn payload(&self) -> Result<NewTransaction, FormError> {
        let account = required("account", &self.account)?;
        if !self.accounts.iter().any(|a| a == &account) {
            return Err(FormError::UnknownAccount(account));
        }
        let description = if self.description.trim().is_empty() {
            format!("Deposit to {}", account)
        } else {
            self.description.trim().to_string()
        };
        Ok(NewTransaction {
            description,
            category: account.clone(),
            subcategory: account,
            amount: parse_amount("amount", &self.amount)?,
            date: parse_form_date("date", &self.date)?,
            recurring: self.recurring,
            transaction_type: Some(TransactionType::Income),
        })
    }

    fn reset(&mut self) {
        let accounts = std::mem::take(&mut self.accounts);
        *self = Self::new(accounts);
    }
}
