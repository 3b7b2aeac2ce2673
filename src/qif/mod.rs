// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reading transaction data exported in the QIF format.
//!
//! [`Parser`] turns a line source into [`Record`]s one at a time and
//! [`RecordSet`] collects a whole export behind its account header.

mod date;
mod parser;
mod record_set;

pub use date::parse_date;
pub use parser::{Parser, sanitize_label};
pub use record_set::{ACCOUNT_TYPES, RecordSet};

use serde::Serialize;
use std::fmt;

/// One transaction as read from a QIF export; every field is kept raw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub r#type: String,
    pub date: String,
    pub amount: String,
    pub number: String,
    pub cleared: String,
    pub payee: String,
    pub label: String,
    pub memo: String,
    pub splits: Vec<Split>,
    pub transfer: bool,
}

/// A single sub-transaction of a [`Record`] allocated to several categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Split {
    pub category: String,
    pub memo: String,
    pub amount: String,
    // Part of the QIF format but never filled: `%` lines are rejected.
    pub percent: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type {:?} date {:?} amount {:?} number {:?} cleared {:?} payee {:?} label {:?} memo {:?}",
            self.r#type,
            self.date,
            self.amount,
            self.number,
            self.cleared,
            self.payee,
            self.label,
            self.memo
        )
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "category {:?} memo {:?} amount {:?}",
            self.category, self.memo, self.amount
        )
    }
}
