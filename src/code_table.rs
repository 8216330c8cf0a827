use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::config::SingleSymbolPolicy;
use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::hufftree::{HuffNode, HuffmanTree};

/// Root-to-leaf branch choices: `false` (0) is left, `true` (1) is right.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitPath {
    bits: Vec<bool>,
}

impl BitPath {
    pub fn new() -> Self {
        BitPath { bits: Vec::new() }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn is_prefix_of(&self, other: &BitPath) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn child(&self, bit: bool) -> BitPath {
        let mut path = self.clone();
        path.push(bit);
        path
    }
}

impl FromStr for BitPath {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(HuffmanError::InvalidBitSymbol(other)),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(BitPath { bits })
    }
}

impl fmt::Display for BitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPath(\"{}\")", self)
    }
}

/// Bit path for every byte value. Bytes with no leaf in the tree map to an
/// empty path.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    paths: Vec<BitPath>,
}

impl CodeTable {
    /// Walks `tree` depth first, left before right, recording the path to
    /// every leaf.
    pub fn from_tree(tree: &HuffmanTree, policy: SingleSymbolPolicy) -> Result<Self> {
        let mut paths = vec![BitPath::new(); SYMBOL_COUNT];

        if let HuffNode::Leaf { byte, .. } = &tree.root {
            let byte = *byte;
            return match policy {
                SingleSymbolPolicy::SyntheticBit => {
                    log::debug!("single-leaf tree, byte {} gets code 0", byte);
                    paths[byte as usize] = BitPath::new().child(false);
                    Ok(CodeTable { paths })
                }
                SingleSymbolPolicy::Reject => Err(HuffmanError::SingleSymbol(byte)),
            };
        }

        let mut stack = vec![(&tree.root, BitPath::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffNode::Leaf { byte, .. } => paths[*byte as usize] = path,
                HuffNode::Internal { left, right, .. } => {
                    stack.push((right, path.child(true)));
                    stack.push((left, path.child(false)));
                }
            }
        }

        Ok(CodeTable { paths })
    }

    /// The path for `byte`, or `None` if the byte has no leaf.
    pub fn get(&self, byte: u8) -> Option<&BitPath> {
        let path = &self.paths[byte as usize];
        (!path.is_empty()).then_some(path)
    }

    /// `(byte, path)` for every byte with a code, ascending by byte.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (u8, &BitPath)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_empty())
            .map(|(b, p)| (b as u8, p))
    }

    /// Bits needed to encode an input with the given frequencies, before padding.
    pub fn encoded_bit_len(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .iter_present()
            .map(|(b, count)| self.paths[b as usize].len() as u64 * count)
            .sum()
    }

    /// One `byte  count  path` row per byte present in `freqs`.
    pub fn render(&self, freqs: &FrequencyTable) -> String {
        let mut out = String::new();
        for (byte, count) in freqs.iter_present() {
            let shown = if byte.is_ascii_graphic() {
                format!("'{}'", byte as char)
            } else {
                format!("0x{:02x}", byte)
            };
            let _ = writeln!(out, "{:>5}  {:>10}  {}", shown, count, self.paths[byte as usize]);
        }
        out
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_assigned()).finish()
    }
}
