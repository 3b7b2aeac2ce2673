// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Conversion settings: the category remapping table and the names of the
//! synthetic accounts the converter falls back to.

use crate::error::{QifError, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Qifledger", "qifledger"));

pub const DEFAULT_TRANSFER_ACCOUNT: &str = "transfer_account";
pub const DEFAULT_UNKNOWN_ACCOUNT: &str = "((unknown account))";

/// Lookup from raw QIF category labels to account paths.
///
/// Labels missing from the table pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<String, String>);

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, account: impl Into<String>) {
        self.0.insert(label.into(), account.into());
    }

    pub fn remap<'a>(&'a self, label: &'a str) -> &'a str {
        self.0.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CategoryMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub categories: CategoryMap,
    pub transfer_account: String,
    pub unknown_account: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            categories: CategoryMap::new(),
            transfer_account: DEFAULT_TRANSFER_ACCOUNT.to_string(),
            unknown_account: DEFAULT_UNKNOWN_ACCOUNT.to_string(),
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Config> {
        let cfg: Config = serde_json::from_str(s).map_err(|e| QifError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .map_err(|e| QifError::Config(format!("reading {}: {}", path.display(), e)))?;
        Config::from_json(&raw).map_err(|e| match e {
            QifError::Config(msg) => QifError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Loads `explicit` when given, else the user config file when it exists,
    /// else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Config::from_path(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Config::from_path(&path),
            _ => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.transfer_account.trim().is_empty() {
            return Err(QifError::Config("transfer_account must not be empty".into()));
        }
        if self.unknown_account.trim().is_empty() {
            return Err(QifError::Config("unknown_account must not be empty".into()));
        }
        if self.categories.contains("") {
            return Err(QifError::Config(
                "categories must not remap the empty category".into(),
            ));
        }
        Ok(())
    }
}

/// Platform config location, e.g. `~/.config/qifledger/config.json`.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|proj| proj.config_dir().join("config.json"))
}
