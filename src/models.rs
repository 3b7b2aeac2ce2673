// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Cleared status of a transaction, as used by hledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Status {
    #[default]
    Unknown,
    Unmarked,
    Pending,
    Cleared,
}

impl Status {
    /// Maps a QIF `C` field to a status.
    pub fn from_code(code: &str) -> Status {
        match code {
            " " => Status::Unmarked,
            "*" | "C" => Status::Pending,
            "X" | "R" => Status::Cleared,
            _ => Status::Unknown,
        }
    }

    /// hledger status mark, empty when the transaction is not marked.
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Unknown | Status::Unmarked => "",
            Status::Pending => "!",
            Status::Cleared => "*",
        }
    }
}

/// An account name, modelled as a colon separated label hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Account(Vec<String>);

impl Account {
    /// Builds an account from a `a:b:c` category.
    ///
    /// Empty segments are dropped; a category with no segment left becomes
    /// the `unknown` placeholder.
    pub fn from_category(category: &str, unknown: &str) -> Account {
        let segments: Vec<String> = category
            .split(':')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if segments.is_empty() {
            return Account(vec![unknown.to_string()]);
        }
        Account(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Account {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Account(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}

/// A credit to, or debit from, an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub account: Account,
    pub amount: Decimal,
}

/// A movement of funds between two or more accounts. Postings sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub status: Status,
    pub code: Option<String>,
    pub payee: String,
    pub description: String,
    pub comment: Option<String>,
    pub postings: Vec<Posting>,
}

impl Transaction {
    /// Sum of the posting amounts, `None` if it overflows.
    pub fn total(&self) -> Option<Decimal> {
        self.postings
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.amount))
    }

    pub fn is_balanced(&self) -> bool {
        self.postings.len() >= 2 && self.total().is_some_and(|t| t.is_zero())
    }
}

/// Orders transactions by ascending date, keeping input order for equal dates.
pub fn sort_by_date(txns: &mut [Transaction]) {
    txns.sort_by_key(|t| t.date);
}
