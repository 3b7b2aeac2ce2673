// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Output formats for converted transactions.

use crate::models::{Account, Posting, Transaction};
use std::io::{self, Write};

pub trait Renderer {
    fn write_transaction(&self, w: &mut dyn Write, txn: &Transaction) -> io::Result<()>;

    /// Writes a whole batch, including any leading header.
    fn render(&self, w: &mut dyn Write, txns: &[Transaction]) -> io::Result<()> {
        for txn in txns {
            self.write_transaction(w, txn)?;
        }
        Ok(())
    }
}

/// hledger journal syntax. The last posting of each transaction is written
/// without an amount and left for hledger to infer.
pub struct HledgerRenderer;

impl HledgerRenderer {
    pub fn top_line(txn: &Transaction) -> String {
        let mut items = vec![txn.date.format("%Y/%m/%d").to_string()];
        let glyph = txn.status.glyph();
        if !glyph.is_empty() {
            items.push(glyph.to_string());
        }
        if let Some(code) = &txn.code {
            items.push(format!("({})", code));
        }
        if !txn.payee.is_empty() {
            items.push(txn.payee.clone());
        }
        if !txn.payee.is_empty() && !txn.description.is_empty() {
            items.push("|".to_string());
        }
        if !txn.description.is_empty() {
            items.push(txn.description.clone());
        }
        let mut line = items.join(" ");
        if let Some(comment) = &txn.comment {
            line.push_str("  ; ");
            line.push_str(comment);
        }
        line
    }

    pub fn account_name(account: &Account) -> String {
        account
            .segments()
            .iter()
            .map(|s| s.to_lowercase().replace(' ', "_"))
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn posting_line(p: &Posting, elide_amount: bool) -> String {
        let account = Self::account_name(&p.account);
        if elide_amount {
            return account;
        }
        format!("{}  {}", account, p.amount)
    }
}

impl Renderer for HledgerRenderer {
    fn write_transaction(&self, w: &mut dyn Write, txn: &Transaction) -> io::Result<()> {
        writeln!(w, "{}", Self::top_line(txn))?;
        let last = txn.postings.len().saturating_sub(1);
        for (i, p) in txn.postings.iter().enumerate() {
            writeln!(w, "  {}", Self::posting_line(p, i == last))?;
        }
        writeln!(w)
    }
}

/// One JSON object per line.
pub struct JsonLinesRenderer;

impl Renderer for JsonLinesRenderer {
    fn write_transaction(&self, w: &mut dyn Write, txn: &Transaction) -> io::Result<()> {
        serde_json::to_writer(&mut *w, txn)?;
        writeln!(w)
    }
}

/// One CSV row per posting.
pub struct CsvRenderer;

const CSV_HEADER: [&str; 7] = [
    "date",
    "status",
    "code",
    "payee",
    "description",
    "account",
    "amount",
];

impl CsvRenderer {
    fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, txn: &Transaction) -> csv::Result<()> {
        let date = txn.date.to_string();
        for p in &txn.postings {
            let account = p.account.to_string();
            let amount = p.amount.to_string();
            wtr.write_record([
                date.as_str(),
                txn.status.glyph(),
                txn.code.as_deref().unwrap_or_default(),
                txn.payee.as_str(),
                txn.description.as_str(),
                account.as_str(),
                amount.as_str(),
            ])?;
        }
        Ok(())
    }
}

impl Renderer for CsvRenderer {
    /// Rows only; the header is written by [`Renderer::render`].
    fn write_transaction(&self, w: &mut dyn Write, txn: &Transaction) -> io::Result<()> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(w);
        Self::write_rows(&mut wtr, txn)?;
        wtr.flush()
    }

    fn render(&self, w: &mut dyn Write, txns: &[Transaction]) -> io::Result<()> {
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record(CSV_HEADER)?;
        for txn in txns {
            Self::write_rows(&mut wtr, txn)?;
        }
        wtr.flush()
    }
}
