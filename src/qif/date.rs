// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{QifError, Result};
use chrono::NaiveDate;

// Microsoft Money writes dd/mm'yyyy from 2000 onwards and dd/mm/yyyy before.
const DATE_FORMATS: [&str; 2] = ["%d/%m'%Y", "%d/%m/%Y"];

/// Parses a QIF date. The result is a calendar date, taken as midnight UTC.
///
/// Day and month are two digits, the year four.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if !fixed_width(s) {
        return Err(QifError::DateFormat(s.to_string()));
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| QifError::DateFormat(s.to_string()))
}

// dd?mm?yyyy, digits everywhere but the two separators.
fn fixed_width(s: &str) -> bool {
    s.len() == 10
        && s
            .bytes()
            .enumerate()
            .all(|(i, b)| matches!(i, 2 | 5) || b.is_ascii_digit())
}
