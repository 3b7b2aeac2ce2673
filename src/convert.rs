// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns single-entry QIF records into balanced double-entry transactions.

use crate::config::Config;
use crate::error::{QifError, Result};
use crate::models::{Account, Posting, Status, Transaction};
use crate::qif::{Record, RecordSet, Split, parse_date};
use log::{debug, error};
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct Converter {
    config: Config,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(Config::default())
    }
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    /// Converts every body record of `rs`, in input order.
    ///
    /// The first failing record aborts the whole set.
    pub fn convert(&self, rs: &RecordSet) -> Result<Vec<Transaction>> {
        let opening = self.opening_account(&rs.opening);
        let mut txns = Vec::with_capacity(rs.records.len());
        for (i, record) in rs.records.iter().enumerate() {
            let txn = self.convert_record(record, &opening).map_err(|e| {
                error!("converting QIF record {} ({}): {}", i + 1, record, e);
                QifError::Conversion {
                    index: i + 1,
                    record: record.to_string(),
                    source: Box::new(e),
                }
            })?;
            txns.push(txn);
        }
        Ok(txns)
    }

    /// Account the whole export belongs to, taken from its opening record.
    pub fn opening_account(&self, opening: &Record) -> Account {
        self.account(&opening.label)
    }

    /// Converts one record. `opening` is the account taking the balancing leg.
    pub fn convert_record(&self, r: &Record, opening: &Account) -> Result<Transaction> {
        let date = parse_date(&r.date)?;
        let mut txn = Transaction {
            date,
            status: Status::from_code(&r.cleared),
            code: Some(r.number.clone()).filter(|n| !n.is_empty()),
            payee: r.payee.clone(),
            description: r.memo.clone(),
            comment: None,
            postings: Vec::with_capacity(r.splits.len().max(1) + 1),
        };

        if r.splits.is_empty() {
            let account = if r.transfer {
                let direction = if r.amount.starts_with('-') { "to" } else { "from" };
                txn.comment = Some(format!("transfer-{}:{:?}", direction, r.label));
                self.account(&self.config.transfer_account)
            } else {
                self.account(&r.label)
            };
            txn.postings.push(Posting {
                account,
                amount: posting_amount(&r.amount)?,
            });
        } else {
            for split in &r.splits {
                let posting = self.split_posting(split).map_err(|e| QifError::Split {
                    split: split.to_string(),
                    source: Box::new(e),
                })?;
                txn.postings.push(posting);
            }
        }

        let total = txn.total().ok_or_else(|| {
            let amounts: Vec<String> = txn.postings.iter().map(|p| p.amount.to_string()).collect();
            QifError::AmountOverflow(amounts.join(", "))
        })?;
        txn.postings.push(Posting {
            account: opening.clone(),
            amount: normalize_zero(-total),
        });
        Ok(txn)
    }

    pub fn split_posting(&self, s: &Split) -> Result<Posting> {
        Ok(Posting {
            account: self.account(&s.category),
            amount: posting_amount(&s.amount)?,
        })
    }

    /// Remaps a QIF category and splits it into an account path.
    ///
    /// An empty category is always the unknown account, whatever the table says.
    pub fn account(&self, category: &str) -> Account {
        let unknown = &self.config.unknown_account;
        if category.is_empty() {
            return Account::from_category("", unknown);
        }
        let account = Account::from_category(self.config.categories.remap(category), unknown);
        debug!("category {:?} -> account {}", category, account);
        account
    }
}

/// Converts a QIF amount into the amount posted against its category.
///
/// QIF states amounts from the point of view of the exported account, the
/// category leg carries the opposite sign. `,` thousands separators are
/// ignored.
pub fn posting_amount(raw: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(&raw.replace(',', ""))
        .map_err(|_| QifError::AmountFormat(raw.to_string()))?;
    Ok(normalize_zero(-amount))
}

// Negating zero leaves a sign bit that would print as "-0".
fn normalize_zero(d: Decimal) -> Decimal {
    if d.is_zero() { Decimal::ZERO } else { d }
}
