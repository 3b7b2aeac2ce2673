// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Parser, Record};
use crate::error::{QifError, Result};
use log::debug;
use serde::Serialize;
use std::io::{self, BufRead};

/// Header types accepted on the opening record of an export.
pub const ACCOUNT_TYPES: [&str; 3] = ["Type:Bank", "Type:Cash", "Type:CCard"];

/// A whole QIF export: the opening header record and the transactions after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub opening: Record,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<RecordSet> {
        RecordSet::read(reader.lines())
    }

    /// Parses every record from `lines`, failing on the first error.
    pub fn read<L>(lines: L) -> Result<RecordSet>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let mut parser = Parser::new(lines);
        let opening = match parser.next_record() {
            Ok(Some(first)) => first,
            Ok(None) => return Err(QifError::MissingHeader(Box::new(QifError::EmptyInput))),
            Err(e) => return Err(QifError::MissingHeader(Box::new(e))),
        };
        if !ACCOUNT_TYPES.contains(&opening.r#type.as_str()) {
            return Err(QifError::UnsupportedAccountType {
                found: opening.r#type.clone(),
                record: opening.to_string(),
            });
        }

        let mut records = Vec::new();
        let mut index = 0;
        loop {
            index += 1;
            match parser.next_record() {
                Ok(Some(r)) => records.push(r),
                Ok(None) => break,
                Err(e) => {
                    return Err(QifError::Record {
                        index,
                        source: Box::new(e),
                    });
                }
            }
        }
        debug!(
            "QIF: read {} records over {} lines",
            records.len(),
            parser.lines_read()
        );
        Ok(RecordSet { opening, records })
    }

    /// Name of the account the export belongs to, from the opening label.
    pub fn account_name(&self) -> &str {
        let name = self.opening.label.as_str();
        name.strip_prefix('[')
            .and_then(|n| n.strip_suffix(']'))
            .unwrap_or(name)
    }
}
