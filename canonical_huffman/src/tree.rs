//! Provisional (non-canonical) Huffman tree, used only to find the code lengths.

use crate::{Error, Result};

/// Node of the [`ProvisionalTree`] arena.
///
/// Children are referenced by their indices in the arena and are owned by the tree.
/// The parent index is only used to walk upward from a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    /// Total weight of the leaves in the subtree.
    pub weight: u64,
    /// Left child (reached by bit `0`).
    pub left: Option<u32>,
    /// Right child (reached by bit `1`).
    pub right: Option<u32>,
    /// Parent of the node, `None` for the root.
    pub parent: Option<u32>,
    /// The bit this node represents under its parent.
    pub bit: u8
}

impl TreeNode {
    #[inline] fn leaf(weight: u64) -> Self {
        Self { weight, left: None, right: None, parent: None, bit: 0 }
    }

    /// Returns whether the node has no children.
    #[inline] pub fn is_leaf(&self) -> bool { self.left.is_none() && self.right.is_none() }
}

/// Binary tree built by the greedy forest-merge.
///
/// The first `number_of_leaves` nodes are the leaves, the `i`-th of them corresponds to the `i`-th weight,
/// so the original index of a leaf is equal to its position in the arena.
/// The remaining nodes are the internal ones, in order of creation, the last one is the root.
pub struct ProvisionalTree {
    nodes: Vec<TreeNode>,
    number_of_leaves: usize
}

impl ProvisionalTree {
    /// Builds the tree for the given `weights` (indexed by the symbol indices).
    ///
    /// Each of `weights.len()-1` steps (stable) sorts the forest by weight,
    /// so trees of equal weight keep their relative positions in the forest,
    /// and merges its two first trees: the first one becomes the left child (bit `0`), the second the right one (bit `1`).
    /// The new tree is placed at the end of the forest.
    ///
    /// The algorithm runs in *O(n² log n)* time, where *n* is the number of weights.
    pub fn build(weights: &[u32]) -> Result<Self> {
        let len = weights.len();
        if len == 0 { return Err(Error::EmptyInput); }
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(2 * len - 1);
        nodes.extend(weights.iter().map(|w| TreeNode::leaf(*w as u64)));
        let mut forest: Vec<u32> = (0..len as u32).collect();
        for _ in 1..len {
            forest.sort_by_key(|n| nodes[*n as usize].weight);
            let (first, second) = (forest[0], forest[1]);
            let parent = nodes.len() as u32;
            nodes.push(TreeNode {
                weight: nodes[first as usize].weight + nodes[second as usize].weight,
                left: Some(first),
                right: Some(second),
                parent: None,
                bit: 0
            });
            let first = &mut nodes[first as usize];
            first.parent = Some(parent);
            first.bit = 0;
            let second = &mut nodes[second as usize];
            second.parent = Some(parent);
            second.bit = 1;
            forest.drain(..2);
            forest.push(parent);
        }
        log::debug!("provisional tree built for {} symbols, root weight {}", len, nodes[nodes.len()-1].weight);
        Ok(Self { nodes, number_of_leaves: len })
    }

    /// Returns the number of leaves, which equals the number of symbols.
    #[inline] pub fn number_of_leaves(&self) -> usize { self.number_of_leaves }

    /// Returns all nodes; leaves first, root last.
    #[inline] pub fn nodes(&self) -> &[TreeNode] { &self.nodes }

    /// Returns the root of the tree.
    #[inline] pub fn root(&self) -> &TreeNode { &self.nodes[self.nodes.len() - 1] }

    /// Returns the depth of the leaf with given `index`, that is the number of edges to the root.
    ///
    /// The tree of a single leaf is special-cased and has the depth of `1`.
    pub fn depth(&self, index: usize) -> u32 {
        if self.number_of_leaves == 1 { return 1; }
        let mut depth = 0;
        let mut node = &self.nodes[index];
        while let Some(parent) = node.parent {
            depth += 1;
            node = &self.nodes[parent as usize];
        }
        depth
    }

    /// Returns code lengths (depths of the leaves), indexed by the symbol indices.
    pub fn code_lengths(&self) -> Box<[u32]> {
        (0..self.number_of_leaves).map(|i| self.depth(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(ProvisionalTree::build(&[]).err(), Some(Error::EmptyInput));
    }

    #[test]
    fn single_leaf() {
        let tree = ProvisionalTree::build(&[5]).unwrap();
        assert_eq!(tree.nodes().len(), 1);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.code_lengths().as_ref(), [1]);
    }

    #[test]
    fn two_leaves() {
        let tree = ProvisionalTree::build(&[1, 100]).unwrap();
        assert_eq!(tree.code_lengths().as_ref(), [1, 1]);
        assert_eq!(tree.root().left, Some(0));
        assert_eq!(tree.root().right, Some(1));
    }

    #[test]
    fn three_leaves() {
        //   /\
        //  /\ a
        //  cb
        let tree = ProvisionalTree::build(&[4, 2, 1]).unwrap();
        assert_eq!(tree.nodes().len(), 5);
        assert_eq!(tree.root().weight, 7);
        assert_eq!(tree.nodes()[3], TreeNode { weight: 3, left: Some(2), right: Some(1), parent: Some(4), bit: 0 });
        assert_eq!(tree.nodes()[0].bit, 1);
        assert_eq!(tree.code_lengths().as_ref(), [1, 2, 2]);
    }

    #[test]
    fn ties_keep_forest_positions() {
        // step 1 merges 0 and 1 into 4 (weight 2), which goes behind leaf 2 (also weight 2)
        let tree = ProvisionalTree::build(&[1, 1, 2, 3]).unwrap();
        assert_eq!(tree.nodes()[4].left, Some(0));
        assert_eq!(tree.nodes()[4].right, Some(1));
        assert_eq!(tree.nodes()[5].left, Some(2));
        assert_eq!(tree.nodes()[5].right, Some(4));
        assert_eq!(tree.code_lengths().as_ref(), [3, 3, 2, 1]);

        let tree = ProvisionalTree::build(&[1, 1, 1]).unwrap();
        assert_eq!(tree.code_lengths().as_ref(), [2, 2, 1]);
    }

    #[test]
    fn skewed() {
        let tree = ProvisionalTree::build(&[16, 8, 4, 2, 1]).unwrap();
        assert_eq!(tree.code_lengths().as_ref(), [1, 2, 3, 4, 4]);
    }
}
