// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::qif::RecordSet;
use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use std::fs;
use std::io;
use std::path::Path;

/// Decodes raw QIF bytes. Microsoft Money exports are Windows-1252 / Latin-1,
/// so bytes that are not valid UTF-8 are read as ISO-8859-1.
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

pub fn read_record_set(path: &Path) -> Result<RecordSet> {
    let bytes = fs::read(path).with_context(|| format!("Opening {}", path.display()))?;
    let text = decode(bytes);
    let rs = RecordSet::read(text.lines().map(|l| Ok::<_, io::Error>(l.to_string())))
        .with_context(|| format!("Reading {}", path.display()))?;
    Ok(rs)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}
