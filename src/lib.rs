//! # huffpack
//!
//! A canonical Huffman encoder: count byte frequencies, build the tree by
//! repeatedly merging the two lowest nodes (ties broken by the smallest byte
//! value in each subtree), derive a bit path per byte, and pack the encoded
//! input MSB first into zero-padded bytes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use huffpack::{EncoderConfig, HuffmanEncoder};
//! use std::path::Path;
//!
//! let encoder = HuffmanEncoder::new(EncoderConfig::default());
//! let summary = encoder.encode_file(Path::new("input.txt"), Path::new("input.huff"))?;
//! println!("{} -> {} bytes", summary.input_bytes, summary.output_bytes);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```
//!
//! The output is raw packed bits: no header, no stored tree, no bit length.

pub mod bit_vec;
pub mod code_table;
pub mod compressed_data;
pub mod config;
pub mod error;
pub mod forest;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod min_heap;

// Re-export main types for convenience
pub use bit_vec::{bits_to_bytes, bytes_to_bits};
pub use code_table::{BitPath, CodeTable};
pub use compressed_data::EncodedData;
pub use config::{EncoderConfig, ForestKind, SingleSymbolPolicy};
pub use error::HuffmanError;
pub use frequency::{count_frequencies, FrequencyTable};
pub use huffman_codec::{encode, EncodeSummary, HuffmanEncoder};
pub use hufftree::{HuffNode, HuffmanTree};
