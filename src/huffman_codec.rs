use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::bit_vec;
use crate::code_table::CodeTable;
use crate::compressed_data::EncodedData;
use crate::config::EncoderConfig;
use crate::error::Result;
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::hufftree::HuffmanTree;

/// Everything derived from one input on the way to its packed bits.
#[derive(Debug, Clone)]
pub struct EncodingPlan {
    pub frequencies: FrequencyTable,
    pub tree: HuffmanTree,
    pub table: CodeTable,
}

/// Sizes reported after a stream or file encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub bit_count: usize,
    pub padding_bits: usize,
}

impl From<&EncodedData> for EncodeSummary {
    fn from(data: &EncodedData) -> Self {
        EncodeSummary {
            input_bytes: data.original_length,
            output_bytes: data.compressed_bits.len(),
            bit_count: data.bit_count,
            padding_bits: data.padding_bits(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    config: EncoderConfig,
}

impl HuffmanEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        HuffmanEncoder { config }
    }

    /// Counts, builds the tree and derives the code table for `data`.
    /// Returns `None` for empty input, which has no tree.
    pub fn plan(&self, data: &[u8]) -> Result<Option<EncodingPlan>> {
        let frequencies = count_frequencies(data);
        if frequencies.is_empty() {
            return Ok(None);
        }
        let tree = HuffmanTree::from_frequencies(&frequencies, &self.config)?;
        let table = tree.generate_table(self.config.single_symbol)?;
        Ok(Some(EncodingPlan {
            frequencies,
            tree,
            table,
        }))
    }

    pub fn encode(&self, data: &[u8]) -> Result<EncodedData> {
        match self.plan(data)? {
            Some(plan) => self.encode_with(data, &plan),
            None => {
                log::debug!("empty input, nothing to encode");
                Ok(EncodedData::empty())
            }
        }
    }

    pub fn encode_with(&self, data: &[u8], plan: &EncodingPlan) -> Result<EncodedData> {
        let bits = bit_vec::pack(data, &plan.table)?;
        let encoded = EncodedData::from_bits(bits, data.len());
        log::debug!(
            "encoded {} bytes ({} distinct) into {} bits",
            data.len(),
            plan.frequencies.distinct(),
            encoded.bit_count
        );
        Ok(encoded)
    }

    /// Reads all of `input`, encodes it and writes the packed bytes to `output`.
    pub fn encode_stream<R: Read, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<EncodeSummary> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;

        let encoded = self.encode(&data)?;
        encoded.write_to(&mut output)?;
        Ok(log_summary(&encoded))
    }

    /// Encodes `source` into `target`. The target is only created once the
    /// whole input has been encoded, so a failed encode leaves it untouched.
    pub fn encode_file(&self, source: &Path, target: &Path) -> Result<EncodeSummary> {
        log::info!("encoding {} -> {}", source.display(), target.display());
        let data = fs::read(source)?;
        let encoded = self.encode(&data)?;
        encoded.write_file(target)?;
        Ok(log_summary(&encoded))
    }
}

fn log_summary(encoded: &EncodedData) -> EncodeSummary {
    let summary = EncodeSummary::from(encoded);
    log::info!(
        "{} bytes -> {} bytes ({} bits, {} padding)",
        summary.input_bytes,
        summary.output_bytes,
        summary.bit_count,
        summary.padding_bits
    );
    summary
}

/// Encodes `data` with the default configuration and returns the packed bytes.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    Ok(HuffmanEncoder::default().encode(data)?.compressed_bits)
}
