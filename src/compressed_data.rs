use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::bit_vec::BitVec;

/// Output of one encode call: raw packed Huffman bits with no header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedData {
    pub compressed_bits: Vec<u8>,
    /// Meaningful bits in `compressed_bits`, before padding.
    pub bit_count: usize,
    pub original_length: usize,
}

impl EncodedData {
    pub fn empty() -> Self {
        EncodedData::default()
    }

    pub(crate) fn from_bits(bits: BitVec, original_length: usize) -> Self {
        let bit_count = bits.bit_count();
        EncodedData {
            compressed_bits: bits.into_bytes(),
            bit_count,
            original_length,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.compressed_bits
    }

    pub fn padding_bits(&self) -> usize {
        self.compressed_bits.len() * 8 - self.bit_count
    }

    /// Output size over input size; 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.compressed_bits.len() as f64 / self.original_length as f64
    }

    /// Writes the packed bytes, and nothing else, to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.compressed_bits)?;
        writer.flush()
    }

    /// Creates (or truncates) `target` and writes the packed bytes to it.
    pub fn write_file(&self, target: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(target)?);
        self.write_to(&mut writer)
    }
}
