// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type shared by the parser, the record set assembler and the converter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QifError {
    #[error("QIF: empty line at line {line}")]
    EmptyLine { line: usize },

    #[error("QIF: read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("QIF: no record before end of input")]
    EmptyInput,

    #[error("QIF: {0:?} not supported")]
    Unsupported(&'static str),

    #[error("QIF: split field {code:?} at line {line} without an open split")]
    OrphanSplitField { code: char, line: usize },

    #[error("reading first QIF record: {0}")]
    MissingHeader(Box<QifError>),

    #[error(
        "unsupported first record type: got {found:?} want \"Type:Bank\", \"Type:CCard\" or \"Type:Cash\" (record: {record})"
    )]
    UnsupportedAccountType { found: String, record: String },

    #[error("reading QIF record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<QifError>,
    },

    #[error("invalid date {0:?}, expected dd/mm'yyyy or dd/mm/yyyy")]
    DateFormat(String),

    #[error("invalid amount {0:?}")]
    AmountFormat(String),

    #[error("amounts overflow when summed: {0}")]
    AmountOverflow(String),

    #[error("converting QIF record {index} ({record}): {source}")]
    Conversion {
        index: usize,
        record: String,
        #[source]
        source: Box<QifError>,
    },

    #[error("split {split}: {source}")]
    Split {
        split: String,
        #[source]
        source: Box<QifError>,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QifError>;
