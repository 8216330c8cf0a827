use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::code_table::CodeTable;
use crate::config::{EncoderConfig, ForestKind, SingleSymbolPolicy};
use crate::error::{HuffmanError, Result};
use crate::forest::{Forest, OrderedForest};
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::min_heap::MinHeap;

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    /// Builds the tree for `bytes` with the default configuration.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        HuffmanTree::from_frequencies(&count_frequencies(bytes), &EncoderConfig::default())
    }

    pub fn from_frequencies(table: &FrequencyTable, config: &EncoderConfig) -> Result<Self> {
        let retain = config.retain_unused_symbols;
        match config.forest {
            ForestKind::Sorted => {
                HuffmanTree::build(OrderedForest::from_frequencies(table, retain))
            }
            ForestKind::Heap => HuffmanTree::build(MinHeap::from_frequencies(table, retain)),
        }
    }

    /// Merges the two lowest nodes of `forest` until a single root remains.
    pub fn build<F: Forest>(mut forest: F) -> Result<Self> {
        if forest.is_empty() {
            return Err(HuffmanError::EmptyForest);
        }

        let merges = forest.len() - 1;
        log::debug!("building Huffman tree: {} leaves, {} merges", forest.len(), merges);

        for _ in 0..merges {
            let a = forest.pop_lowest()?;
            let b = forest.pop_lowest()?;
            forest.push(HuffNode::merge(a, b));
        }

        let root = forest.pop_lowest()?;
        log::debug!(
            "Huffman tree done: root weight {}, tie key {}",
            root.weight(),
            root.tie_key()
        );
        Ok(HuffmanTree { root })
    }

    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => count += 1,
                HuffNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }

    pub fn generate_table(&self, policy: SingleSymbolPolicy) -> Result<CodeTable> {
        CodeTable::from_tree(self, policy)
    }

    /// Indented, one-node-per-line rendering of the tree.
    pub fn render_structure(&self) -> String {
        let mut out = String::from("Huffman Tree Structure:\n");
        render_node(&self.root, 0, "root", &mut out);
        out
    }
}

fn render_node(node: &HuffNode, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        HuffNode::Leaf { byte, weight } => {
            let _ = writeln!(
                out,
                "{}{}-> Leaf: {:?} ({}) [weight: {}]",
                indent,
                label,
                *byte as char,
                byte,
                weight
            );
        }
        HuffNode::Internal {
            weight,
            tie_key,
            left,
            right,
        } => {
            let _ = writeln!(
                out,
                "{}{}-> Internal [weight: {}, tie key: {}]",
                indent, label, weight, tie_key
            );
            render_node(left, depth + 1, "L", out);
            render_node(right, depth + 1, "R", out);
        }
    }
}

/// A node of the Huffman tree.
///
/// Nodes compare by merge priority: weight first, then tie key (the smallest
/// byte value in the subtree). Two nodes that compare equal need not have the
/// same shape.
#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        byte: u8,
    },
    Internal {
        weight: u64,
        tie_key: u8,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(b: u8, f: u64) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn tie_key(&self) -> u8 {
        match self {
            HuffNode::Leaf { byte, .. } => *byte,
            HuffNode::Internal { tie_key, .. } => *tie_key,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn less_than(&self, other: &HuffNode) -> bool {
        self.weight() < other.weight()
            || (self.weight() == other.weight() && self.tie_key() < other.tie_key())
    }

    pub fn merge(a: Self, b: Self) -> Self {
        // a is the lower node and goes left
        HuffNode::Internal {
            weight: a.weight() + b.weight(),
            tie_key: a.tie_key().min(b.tie_key()),
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

impl PartialEq for HuffNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HuffNode {}

impl PartialOrd for HuffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HuffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| self.tie_key().cmp(&other.tie_key()))
    }
}
