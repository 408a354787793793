//! Binary trie rebuilt from the canonical codewords.

use dyn_size_of::GetSize;
use crate::Code;

/// Node of the [`Trie`] arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Children reached by bits `0` and `1` respectively.
    pub children: [Option<u32>; 2],
    /// Parent of the node, `None` for the root.
    pub parent: Option<u32>,
    /// The bit this node represents under its parent.
    pub bit: u8,
    /// Index of the symbol, set only in the leaves.
    pub index: Option<u32>
}

impl GetSize for TrieNode {}

/// Navigable binary trie that maps codewords to symbol indices.
///
/// Nodes are kept in an arena, the root is the first one.
pub struct Trie {
    nodes: Vec<TrieNode>,
    /// Arena indices of the leaves, indexed by symbol indices.
    leaves: Box<[u32]>
}

impl GetSize for Trie {
    fn size_bytes_dyn(&self) -> usize {
        self.nodes.size_bytes_dyn() + self.leaves.size_bytes_dyn()
    }
    const USES_DYN_MEM: bool = true;
}

impl Trie {
    /// Arena index of the root.
    pub const ROOT: u32 = 0;

    /// Builds the trie by inserting the path of each code (indexed by symbol indices) from the root,
    /// creating the missing nodes on the way (bit `0` leads to the left child, `1` to the right one).
    /// The node at the end of the path stores the index of the symbol.
    ///
    /// A single code makes the root itself a leaf, whatever the code is.
    pub fn from_codes(codes: &[Code]) -> Self {
        let mut nodes = vec![TrieNode::default()];
        if codes.len() == 1 {
            nodes[0].index = Some(0);
            return Self { nodes, leaves: vec![Self::ROOT].into_boxed_slice() };
        }
        let mut leaves = Vec::with_capacity(codes.len());
        for (index, code) in codes.iter().enumerate() {
            let mut node = Self::ROOT;
            for bit in code.bits() {
                node = match nodes[node as usize].children[bit as usize] {
                    Some(child) => child,
                    None => {
                        let child = nodes.len() as u32;
                        nodes.push(TrieNode { children: [None, None], parent: Some(node), bit, index: None });
                        nodes[node as usize].children[bit as usize] = Some(child);
                        child
                    }
                };
            }
            nodes[node as usize].index = Some(index as u32);
            leaves.push(node);
        }
        log::debug!("trie rebuilt for {} codes with {} nodes", codes.len(), nodes.len());
        Self { nodes, leaves: leaves.into_boxed_slice() }
    }

    /// Returns the number of nodes.
    #[inline] pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns node with given arena index.
    #[inline] pub fn node(&self, node: u32) -> &TrieNode { &self.nodes[node as usize] }

    /// Returns the child of `node` reached by `bit` (any non-zero `bit` is treated as `1`).
    #[inline] pub fn child(&self, node: u32, bit: u8) -> Option<u32> {
        self.nodes[node as usize].children[(bit != 0) as usize]
    }

    /// Returns the symbol index stored in `node` if it is a leaf.
    #[inline] pub fn index(&self, node: u32) -> Option<u32> {
        self.nodes[node as usize].index
    }

    /// Returns whether the root is a leaf, which is the case for single-symbol alphabets.
    #[inline] pub fn is_root_leaf(&self) -> bool { self.nodes[Self::ROOT as usize].index.is_some() }

    /// Reads the codeword of the symbol with given `index` by walking from its leaf up to the root.
    /// Returns `None` if `index` is out of range.
    ///
    /// The code of a root leaf is the single bit `0`.
    pub fn code_of(&self, index: usize) -> Option<Code> {
        let mut node = *self.leaves.get(index)?;
        if node == Self::ROOT { return Some(Code::zero(1)); }
        let mut code = Code::default();
        while let Some(parent) = self.nodes[node as usize].parent {
            code.content |= (self.nodes[node as usize].bit as u128) << code.len;
            code.len += 1;
            node = parent;
        }
        Some(code)
    }
}
