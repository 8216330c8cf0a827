use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffNode;

/// The working set of not-yet-merged nodes during tree construction.
pub trait Forest {
    fn push(&mut self, node: HuffNode);

    /// Removes the node that is lowest by weight, then tie key.
    fn pop_lowest(&mut self) -> Result<HuffNode>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Leaves for every byte value in ascending byte order, optionally skipping
/// bytes that never occur.
pub(crate) fn seed_leaves(
    table: &FrequencyTable,
    retain_unused: bool,
) -> impl Iterator<Item = HuffNode> + '_ {
    (0..=u8::MAX)
        .map(move |byte| HuffNode::new(byte, table.get(byte)))
        .filter(move |leaf| retain_unused || leaf.weight() > 0)
}

/// A forest kept as a vector sorted ascending by [`HuffNode::less_than`].
#[derive(Debug, Clone, Default)]
pub struct OrderedForest {
    nodes: Vec<HuffNode>,
}

impl OrderedForest {
    pub fn new() -> Self {
        OrderedForest { nodes: Vec::new() }
    }

    pub fn from_frequencies(table: &FrequencyTable, retain_unused: bool) -> Self {
        OrderedForest::from_nodes(seed_leaves(table, retain_unused))
    }

    /// Insertion-sorts `nodes` into a new forest.
    pub fn from_nodes<I: IntoIterator<Item = HuffNode>>(nodes: I) -> Self {
        let mut forest = OrderedForest::new();
        for node in nodes {
            forest.insert_sorted(node);
        }
        forest
    }

    /// Places `node` before the first element it is strictly less than, or at
    /// the end. Equal nodes keep their insertion order.
    pub fn insert_sorted(&mut self, node: HuffNode) {
        let pos = self
            .nodes
            .iter()
            .position(|other| node.less_than(other))
            .unwrap_or(self.nodes.len());
        self.nodes.insert(pos, node);
    }

    pub fn get(&self, index: usize) -> Result<&HuffNode> {
        self.nodes.get(index).ok_or(HuffmanError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    pub fn nodes(&self) -> &[HuffNode] {
        &self.nodes
    }

    pub fn is_sorted(&self) -> bool {
        self.nodes.windows(2).all(|w| !w[1].less_than(&w[0]))
    }
}

impl Forest for OrderedForest {
    fn push(&mut self, node: HuffNode) {
        self.insert_sorted(node);
    }

    fn pop_lowest(&mut self) -> Result<HuffNode> {
        if self.nodes.is_empty() {
            return Err(HuffmanError::EmptyForest);
        }
        Ok(self.nodes.remove(0))
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frequency::count_frequencies;

    fn keys(forest: &OrderedForest) -> Vec<(u64, u8)> {
        forest
            .nodes()
            .iter()
            .map(|n| (n.weight(), n.tie_key()))
            .collect()
    }

    #[test]
    fn test_insert_sorted_orders_by_weight_then_tie_key() {
        let forest = OrderedForest::from_nodes(vec![
            HuffNode::new(b'c', 2),
            HuffNode::new(b'a', 5),
            HuffNode::new(b'b', 2),
            HuffNode::new(b'd', 1),
        ]);
        assert_eq!(
            keys(&forest),
            vec![(1, b'd'), (2, b'b'), (2, b'c'), (5, b'a')]
        );
        assert!(forest.is_sorted());
    }

    #[test]
    fn test_insert_sorted_places_internal_by_tie_key() {
        let mut forest = OrderedForest::from_nodes(vec![
            HuffNode::new(b'a', 3),
            HuffNode::new(b'z', 3),
        ]);
        let merged = HuffNode::merge(HuffNode::new(b'm', 1), HuffNode::new(b'q', 2));
        forest.insert_sorted(merged);
        assert_eq!(keys(&forest), vec![(3, b'a'), (3, b'm'), (3, b'z')]);
    }

    #[test]
    fn test_equal_nodes_keep_insertion_order() {
        let mut forest = OrderedForest::new();
        forest.insert_sorted(HuffNode::new(b'k', 4));
        forest.insert_sorted(HuffNode::merge(HuffNode::new(b'k', 4), HuffNode::new(b'x', 0)));
        assert!(forest.get(0).unwrap().is_leaf());
        assert!(!forest.get(1).unwrap().is_leaf());
    }

    #[test]
    fn test_seeded_forest_keeps_zero_weight_leaves() {
        let forest = OrderedForest::from_frequencies(&count_frequencies(b"bba"), true);
        assert_eq!(forest.len(), 256);
        assert!(forest.is_sorted());
        // 254 zero-weight leaves first, ascending by byte, then a:1, b:2
        assert_eq!(forest.get(0).unwrap().tie_key(), 0);
        assert_eq!(forest.get(253).unwrap().tie_key(), 255);
        assert_eq!(keys(&forest)[254..], [(1, b'a'), (2, b'b')]);

        let trimmed = OrderedForest::from_frequencies(&count_frequencies(b"bba"), false);
        assert_eq!(keys(&trimmed), vec![(1, b'a'), (2, b'b')]);
    }

    #[test]
    fn test_out_of_range_and_empty() {
        let mut forest = OrderedForest::from_nodes(vec![HuffNode::new(1, 1)]);
        match forest.get(1) {
            Err(HuffmanError::IndexOutOfRange { index, len }) => {
                assert_eq!((index, len), (1, 1));
            }
            other => panic!("expected out of range, got {:?}", other),
        }
        assert_eq!(forest.pop_lowest().unwrap().tie_key(), 1);
        assert!(matches!(forest.pop_lowest(), Err(HuffmanError::EmptyForest)));
    }
}
