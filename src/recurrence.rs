// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a transaction repeats. "No recurrence" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannually,
    Annually,
}

pub const NO_RECURRENCE_LABEL: &str = "No recurrence";

impl Recurrence {
    pub const ALL: [Recurrence; 8] = [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Biweekly,
        Recurrence::Monthly,
        Recurrence::Bimonthly,
        Recurrence::Quarterly,
        Recurrence::Semiannually,
        Recurrence::Annually,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
            Self::Quarterly => "quarterly",
            Self::Semiannually => "semiannually",
            Self::Annually => "annually",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-weekly",
            Self::Monthly => "Monthly",
            Self::Bimonthly => "Bi-monthly",
            Self::Quarterly => "Quarterly",
            Self::Semiannually => "Semi-annually",
            Self::Annually => "Annually",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown recurrence '{0}'")]
pub struct UnknownRecurrence(pub String);

impl FromStr for Recurrence {
    type Err = UnknownRecurrence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Recurrence::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRecurrence(s.to_string()))
    }
}

/// Parses a selector value: the empty string means no recurrence.
pub fn parse_selector(s: &str) -> Result<Option<Recurrence>, UnknownRecurrence> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Selector options in display order, `("", "No recurrence")` first.
pub fn options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", NO_RECURRENCE_LABEL))
        .chain(Recurrence::ALL.iter().map(|r| (r.as_str(), r.label())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_empty_means_none() {
        assert_eq!(parse_selector("").unwrap(), None);
        assert_eq!(parse_selector("  ").unwrap(), None);
        assert_eq!(parse_selector("Monthly").unwrap(), Some(Recurrence::Monthly));
        assert!(parse_selector("fortnightly").is_err());
    }

    #[test]
    fn options_start_with_no_recurrence() {
        let opts = options();
        assert_eq!(opts.len(), 9);
        assert_eq!(opts[0], ("", "No recurrence"));
        assert_eq!(opts[3], ("biweekly", "Bi-weekly"));
    }

    #[test]
    fn wire_value_is_lowercase() {
        let v = serde_json::to_value(Recurrence::Semiannually).unwrap();
        assert_eq!(v, serde_json::json!("semiannually"));
    }
}
