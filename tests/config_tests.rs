// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use qifledger::config::{CategoryMap, Config, DEFAULT_TRANSFER_ACCOUNT, DEFAULT_UNKNOWN_ACCOUNT};
use qifledger::error::QifError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn remap_passes_unknown_labels_through() {
    let map: CategoryMap = [("Joint - smile Current", "assets:bank:smile:joint:current")]
        .into_iter()
        .collect();
    assert_eq!(
        map.remap("Joint - smile Current"),
        "assets:bank:smile:joint:current"
    );
    assert_eq!(map.remap("Food:Groceries"), "Food:Groceries");
    assert_eq!(map.remap(map.remap("Food:Groceries")), "Food:Groceries");
    assert_eq!(map.remap(""), "");

    let mut map = CategoryMap::new();
    map.insert("Cash", "assets:cash");
    assert_eq!(map.remap("Cash"), "assets:cash");
}

#[test]
fn defaults() {
    let cfg = Config::default();
    assert!(cfg.categories.is_empty());
    assert_eq!(cfg.transfer_account, DEFAULT_TRANSFER_ACCOUNT);
    assert_eq!(cfg.unknown_account, DEFAULT_UNKNOWN_ACCOUNT);
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = Config::from_json(r#"{"categories": {"Cash": "assets:cash"}}"#).unwrap();
    assert_eq!(cfg.categories.len(), 1);
    assert_eq!(cfg.categories.remap("Cash"), "assets:cash");
    assert_eq!(cfg.transfer_account, DEFAULT_TRANSFER_ACCOUNT);
}

#[test]
fn rejects_bad_config() {
    assert!(matches!(
        Config::from_json(r#"{"unknown_account": " "}"#),
        Err(QifError::Config(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{"categoriez": {}}"#),
        Err(QifError::Config(_))
    ));
    assert!(matches!(Config::from_json("not json"), Err(QifError::Config(_))));
    assert!(matches!(
        Config::from_json(r#"{"categories": {"": "expenses:misc"}}"#),
        Err(QifError::Config(_))
    ));
}

#[test]
fn load_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"transfer_account": "assets:transfers", "categories": {{}}}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let cfg = Config::load(Some(file.path())).unwrap();
    assert_eq!(cfg.transfer_account, "assets:transfers");

    let missing = file.path().with_extension("missing");
    let err = Config::load(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("missing"));
}
