// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::qif::RecordSet;
use crate::utils::{pretty_table, read_record_set};
use anyhow::Result;
use std::path::Path;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = Path::new(m.get_one::<String>("file").unwrap());
    let rs = read_record_set(path)?;
    if m.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&rs)?);
        return Ok(());
    }
    println!(
        "Account '{}' ({}), {} records",
        rs.account_name(),
        rs.opening.r#type,
        rs.records.len()
    );
    println!(
        "{}",
        pretty_table(
            &["#", "Date", "Amount", "Cleared", "Payee", "Category", "Splits"],
            record_rows(&rs)
        )
    );
    Ok(())
}

pub fn record_rows(rs: &RecordSet) -> Vec<Vec<String>> {
    rs.records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let category = if r.transfer {
                format!("[{}]", r.label)
            } else {
                r.label.clone()
            };
            vec![
                (i + 1).to_string(),
                r.date.clone(),
                r.amount.clone(),
                r.cleared.clone(),
                r.payee.clone(),
                category,
                r.splits.len().to_string(),
            ]
        })
        .collect()
}
