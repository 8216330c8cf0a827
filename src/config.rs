//! Encoder configuration.
//!
//! `EncoderConfig` is built once at the application boundary (CLI flags or a
//! JSON file) and passed by reference into the encoder. Every field has a
//! default, so an empty JSON object is a valid configuration.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Backing store for the forest of unmerged nodes. Both produce the same tree.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ForestKind {
    /// Vector kept sorted by insertion. O(k) per merge.
    #[default]
    Sorted,

    /// Binary min-heap. O(log k) per merge.
    Heap,
}

/// What to do when the tree is a single leaf and its path would be empty.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SingleSymbolPolicy {
    /// Give the lone byte the one-bit code `0`.
    #[default]
    SyntheticBit,

    /// Fail with `HuffmanError::SingleSymbol`.
    Reject,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EncoderConfig {
    #[serde(default)]
    pub forest: ForestKind,

    /// Seed the forest with a zero-weight leaf for every byte that does not
    /// occur. When false, only present bytes get leaves (and codes).
    #[serde(default = "default_true")]
    pub retain_unused_symbols: bool,

    #[serde(default)]
    pub single_symbol: SingleSymbolPolicy,
}

impl EncoderConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        EncoderConfig::from_json(&text)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            forest: ForestKind::default(),
            retain_unused_symbols: true,
            single_symbol: SingleSymbolPolicy::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
