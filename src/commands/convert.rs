// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::convert::Converter;
use crate::models::{Transaction, sort_by_date};
use crate::render::{CsvRenderer, HledgerRenderer, JsonLinesRenderer, Renderer};
use crate::utils::read_record_set;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let config = Config::load(m.get_one::<String>("config").map(Path::new))
        .context("Loading config")?;
    let converter = Converter::new(config);
    let files: Vec<&Path> = m
        .get_many::<String>("files")
        .unwrap_or_default()
        .map(Path::new)
        .collect();
    let max = m.get_one::<usize>("max").copied().unwrap_or(0);
    let renderer = renderer_for(m.get_one::<String>("format").map(String::as_str).unwrap_or("hledger"));

    let txns = convert_files(&converter, &files)?;

    let mut out: Box<dyn Write> = match m.get_one::<String>("out") {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Creating {}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let written = write_transactions(&mut out, renderer.as_ref(), &txns, max)?;
    out.flush()?;
    info!("wrote {} of {} transactions", written, txns.len());
    Ok(())
}

pub fn renderer_for(format: &str) -> Box<dyn Renderer> {
    match format {
        "json" => Box::new(JsonLinesRenderer),
        "csv" => Box::new(CsvRenderer),
        _ => Box::new(HledgerRenderer),
    }
}

/// Parses and converts every file independently, then merges the results
/// into one list sorted by date.
pub fn convert_files(converter: &Converter, paths: &[&Path]) -> Result<Vec<Transaction>> {
    let mut all = Vec::new();
    for path in paths {
        info!("parsing QIF from {}", path.display());
        let rs = read_record_set(path)?;
        info!("parsed {} QIF records", rs.records.len());

        let txns = converter
            .convert(&rs)
            .with_context(|| format!("Converting {}", path.display()))?;
        info!(
            "converted {} records for account {:?}",
            txns.len(),
            rs.account_name()
        );
        all.extend(txns);
    }
    sort_by_date(&mut all);
    Ok(all)
}

/// Writes at most `max` transactions (all of them when `max` is 0) and
/// returns how many were written.
pub fn write_transactions(
    w: &mut dyn Write,
    renderer: &dyn Renderer,
    txns: &[Transaction],
    max: usize,
) -> Result<usize> {
    let limit = if max == 0 { txns.len() } else { max.min(txns.len()) };
    renderer.render(w, &txns[..limit])?;
    Ok(limit)
}
