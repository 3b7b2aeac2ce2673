// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{Record, Split};
use crate::error::{QifError, Result};
use log::debug;
use std::io::{self, BufRead};

/// Forward-only QIF scanner over a source of lines.
///
/// Each call to [`Parser::next_record`] consumes lines up to and including the
/// next `^` separator. A record left open at the end of input is dropped.
pub struct Parser<L> {
    lines: L,
    lines_read: usize,
}

/// Scan state scoped to the record being assembled.
#[derive(Default)]
struct RecordState {
    record: Record,
    open_split: Option<Split>,
    pending: Option<QifError>,
}

impl RecordState {
    fn close_split(&mut self) {
        if let Some(split) = self.open_split.take() {
            self.record.splits.push(split);
        }
    }

    // The first deferred error wins; it is raised once the record closes.
    fn defer(&mut self, err: QifError) {
        self.pending.get_or_insert(err);
    }

    fn split_field(&mut self, code: char, line: usize) -> Option<&mut Split> {
        if self.open_split.is_none() {
            self.defer(QifError::OrphanSplitField { code, line });
        }
        self.open_split.as_mut()
    }

    fn finish(mut self) -> Result<Record> {
        self.close_split();
        match self.pending {
            Some(err) => Err(err),
            None => Ok(self.record),
        }
    }
}

impl<R: BufRead> Parser<io::Lines<R>> {
    pub fn from_reader(reader: R) -> Self {
        Parser::new(reader.lines())
    }
}

impl<L> Parser<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: L) -> Self {
        Parser {
            lines,
            lines_read: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Reads the next record.
    ///
    /// `Ok(None)` marks the end of input and is distinct from a parse error.
    /// A record carrying an unsupported field is consumed up to its separator
    /// and reported as an error, so scanning can carry on with the next one.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let mut state = RecordState::default();
        for line in self.lines.by_ref() {
            self.lines_read += 1;
            let lineno = self.lines_read;
            let raw = line.map_err(|source| QifError::Read {
                line: lineno,
                source,
            })?;
            let text = raw.strip_suffix('\r').unwrap_or(&raw);

            let mut chars = text.chars();
            let Some(code) = chars.next() else {
                return Err(QifError::EmptyLine { line: lineno });
            };
            let rest = chars.as_str();

            match code {
                '!' => state.record.r#type = rest.to_string(),
                'D' => state.record.date = rest.to_string(),
                'T' | 'U' => state.record.amount = rest.to_string(),
                'N' => state.record.number = rest.to_string(),
                'C' => state.record.cleared = rest.to_string(),
                'P' => state.record.payee = rest.to_string(),
                'L' => {
                    let (label, transfer) = sanitize_label(rest);
                    state.record.label = label.to_string();
                    state.record.transfer = transfer;
                }
                'M' => state.record.memo = rest.to_string(),
                'S' => {
                    state.close_split();
                    state.open_split = Some(Split {
                        category: rest.to_string(),
                        ..Split::default()
                    });
                }
                'E' => {
                    if let Some(split) = state.split_field(code, lineno) {
                        split.memo = rest.to_string();
                    }
                }
                '$' => {
                    if let Some(split) = state.split_field(code, lineno) {
                        split.amount = rest.to_string();
                    }
                }
                '%' => state.defer(QifError::Unsupported("Field %")),
                '^' => return state.finish().map(Some),
                other => debug!("QIF: ignoring field {:?} at line {}", other, lineno),
            }
        }
        Ok(None)
    }
}

impl<L> Iterator for Parser<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Strips a wrapping `[` `]` pair from a label.
///
/// Returns the inner text and `true` when the pair was present, which is how
/// QIF marks a transfer to another account; otherwise the label unchanged and
/// `false`.
pub fn sanitize_label(label: &str) -> (&str, bool) {
    match label.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
        Some(inner) => (inner, true),
        None => (label, false),
    }
}
