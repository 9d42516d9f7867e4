// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::recurrence::Recurrence;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned identity. The backend hands out either integer keys or
/// UUID strings depending on the store behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{}", i),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_recurrence")]
    pub recurring: Option<Recurrence>,
    #[serde(default)]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// A deposit into a savings account: income booked with the account
    /// name as both category and subcategory.
    pub fn is_savings_deposit(&self) -> bool {
        self.category == self.subcategory && self.transaction_type == TransactionType::Income
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Older records carry `goal` as the raw form string (`"500"`, `""`).
fn lenient_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<NumberOrText>::deserialize(d)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok().filter(|n: &f64| n.is_finite()),
        None => None,
    })
}

/// An empty or unrecognized recurrence reads as "does not repeat".
fn lenient_recurrence<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Recurrence>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(d)? {
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// Derived view over the transaction cache. Recomputed from the slice on
/// every call; never stored.
pub fn savings_transactions(txns: &[Transaction]) -> Vec<&Transaction> {
    txns.iter().filter(|t| t.is_savings_deposit()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub id: RecordId,
    #[serde(default)]
    pub date: Option<String>,
    pub name: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub goal: Option<f64>,
}

impl SavingsAccount {
    /// Amount still missing to reach the goal (negative once exceeded).
    pub fn difference(&self) -> Option<f64> {
        self.goal.map(|g| g - self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// POST body for `/api/transactions`. `recurring` is always sent, as
/// `null` when the selector was left at "No recurrence".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub amount: f64,
    pub date: String,
    pub recurring: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

/// POST body for `/api/savings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSavingsAccount {
    pub name: String,
    pub amount: f64,
    pub goal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
