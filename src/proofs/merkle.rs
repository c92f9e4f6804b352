//! Merkle tree implementation
//!
//! Binary tree over keccak-256 leaves with sorted-pair node hashing.
//! Pairs are formed by position (0&1, 2&3, ...). On an odd-length level the
//! last node is carried up unchanged: it is never hashed with itself or
//! duplicated.

use crate::core::error::{MintkitError, Result};
use crate::core::hash::hash_sorted_pair;
use crate::core::types::{Hash, Leaf, Root};
use crate::core::Address;
use crate::proofs::proof::Proof;
use rayon::prelude::*;
use std::fmt::Write as _;

/// Level width at which pair hashing moves onto the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Merkle tree for generating proofs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// All levels of the tree (leaves at index 0, root alone at the end)
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree from leaves, in the given order.
    ///
    /// Duplicate leaves are kept as given. Fails with `EmptyInput` when
    /// `leaves` is empty.
    pub fn build(leaves: Vec<Leaf>) -> Result<Self> {
        Self::build_with_threshold(leaves, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Like [`MerkleTree::build`], hashing levels at least `parallel_threshold`
    /// wide in parallel. The result is identical either way.
    pub fn build_with_threshold(leaves: Vec<Leaf>, parallel_threshold: usize) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MintkitError::empty_input("cannot build a Merkle tree without leaves"));
        }

        let mut levels = vec![leaves];
        while let Some(level) = levels.last() {
            if level.len() == 1 {
                break;
            }
            let next = next_level(level, parallel_threshold);
            tracing::trace!(width = next.len(), depth = levels.len(), "hashed level");
            levels.push(next);
        }

        tracing::debug!(
            leaves = levels[0].len(),
            depth = levels.len() - 1,
            "built merkle tree"
        );
        Ok(Self { levels })
    }

    /// Build a tree whose leaves are the addresses' leaf encodings
    pub fn from_addresses(addresses: &[Address]) -> Result<Self> {
        Self::build(addresses.iter().map(Address::leaf).collect())
    }

    /// Root hash of the tree
    pub fn root(&self) -> Root {
        // `build` guarantees at least one level and a single-node top level
        self.levels[self.levels.len() - 1][0]
    }

    /// All levels, leaves first
    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    /// Leaves in input order
    pub fn leaves(&self) -> &[Leaf] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of hashing rounds between the leaves and the root
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Index of the first leaf equal to `leaf`.
    ///
    /// Equal leaves cannot be told apart by hash, so with duplicates this is
    /// always the earliest position.
    pub fn leaf_index(&self, leaf: &Leaf) -> Option<usize> {
        self.levels[0].iter().position(|candidate| candidate == leaf)
    }

    /// Generate the proof for `leaf` (first match when duplicated)
    pub fn prove(&self, leaf: &Leaf) -> Result<Proof> {
        let index = self
            .leaf_index(leaf)
            .ok_or_else(|| MintkitError::leaf_not_found(leaf.to_prefixed_hex()))?;
        self.prove_index(index)
    }

    /// Generate the proof for the leaf at `leaf_index`.
    ///
    /// Siblings are collected leaf to root. A node carried up from an
    /// odd-length level has no sibling on that level and contributes nothing.
    pub fn prove_index(&self, leaf_index: usize) -> Result<Proof> {
        if leaf_index >= self.leaf_count() {
            return Err(MintkitError::leaf_not_found(format!(
                "leaf index {} (tree has {} leaves)",
                leaf_index,
                self.leaf_count()
            )));
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut index = leaf_index;

        for level in &self.levels[..self.depth()] {
            let sibling_index = index ^ 1;
            if let Some(sibling) = level.get(sibling_index) {
                siblings.push(*sibling);
            }
            index /= 2;
        }

        Ok(Proof::new(siblings))
    }

    /// Human-readable dump of every level, root first.
    ///
    /// Display only. Trees are always rebuilt from the address list and this
    /// text is never parsed back.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (depth, level) in self.levels.iter().enumerate().rev() {
            let _ = writeln!(out, "level {} ({} nodes)", depth, level.len());
            for (index, node) in level.iter().enumerate() {
                let _ = writeln!(out, "  [{}] {}", index, node);
            }
        }
        out
    }
}

/// Hash consecutive pairs of `level`; an unpaired last node is carried up as is
fn next_level(level: &[Hash], parallel_threshold: usize) -> Vec<Hash> {
    let combine = |pair: &[Hash]| match pair {
        [left, right] => hash_sorted_pair(left, right),
        [single] => *single,
        _ => unreachable!("chunks(2) yields one or two nodes"),
    };

    if level.len() >= parallel_threshold {
        level.par_chunks(2).map(combine).collect()
    } else {
        level.chunks(2).map(combine).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::keccak256;

    fn leaves(n: usize) -> Vec<Hash> {
        (0..n).map(|i| keccak256(format!("leaf-{}", i).as_bytes())).collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = MerkleTree::build(vec![]);
        assert!(matches!(result, Err(MintkitError::EmptyInput { .. })));
    }

    #[test]
    fn test_single_leaf_is_root() {
        let leaf = keccak256(b"only");
        let tree = MerkleTree::build(vec![leaf]).unwrap();
        assert_eq!(tree.root(), leaf);
        assert_eq!(tree.depth(), 0);
        assert!(tree.prove(&leaf).unwrap().is_empty());
    }

    #[test]
    fn test_two_leaves() {
        let l = leaves(2);
        let tree = MerkleTree::build(l.clone()).unwrap();
        assert_eq!(tree.root(), hash_sorted_pair(&l[0], &l[1]));
        assert_eq!(tree.prove(&l[0]).unwrap().siblings(), &[l[1]]);
        assert_eq!(tree.prove(&l[1]).unwrap().siblings(), &[l[0]]);
    }

    #[test]
    fn test_odd_level_carries_last_node() {
        let l = leaves(3);
        let tree = MerkleTree::build(l.clone()).unwrap();
        let ab = hash_sorted_pair(&l[0], &l[1]);

        assert_eq!(tree.levels()[1], vec![ab, l[2]]);
        assert_eq!(tree.root(), hash_sorted_pair(&ab, &l[2]));
        assert_eq!(tree.prove(&l[0]).unwrap().siblings(), &[l[1], l[2]]);
        assert_eq!(tree.prove(&l[2]).unwrap().siblings(), &[ab]);
    }

    #[test]
    fn test_five_leaves_carry_twice() {
        // level0: 5 nodes, level1: 3 nodes, level2: 2 nodes, root
        let l = leaves(5);
        let tree = MerkleTree::build(l.clone()).unwrap();
        assert_eq!(
            tree.levels().iter().map(Vec::len).collect::<Vec<_>>(),
            vec![5, 3, 2, 1]
        );

        // leaf 4 is carried twice and only pairs at the top
        let proof = tree.prove(&l[4]).unwrap();
        assert_eq!(proof.siblings(), &[tree.levels()[2][0]]);
    }

    #[test]
    fn test_balanced_proof_length() {
        let l = leaves(8);
        let tree = MerkleTree::build(l.clone()).unwrap();
        for leaf in &l {
            assert_eq!(tree.prove(leaf).unwrap().len(), 3);
        }
    }

    #[test]
    fn test_unknown_leaf() {
        let tree = MerkleTree::build(leaves(4)).unwrap();
        let result = tree.prove(&keccak256(b"stranger"));
        assert!(matches!(result, Err(MintkitError::LeafNotFound { .. })));
        assert!(tree.prove_index(4).is_err());
    }

    #[test]
    fn test_duplicate_leaves_use_first_index() {
        let l = leaves(2);
        let tree = MerkleTree::build(vec![l[0], l[1], l[0]]).unwrap();
        assert_eq!(tree.leaf_index(&l[0]), Some(0));
        assert_eq!(tree.prove(&l[0]).unwrap(), tree.prove_index(0).unwrap());
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let l = leaves(37);
        let sequential = MerkleTree::build_with_threshold(l.clone(), usize::MAX).unwrap();
        let parallel = MerkleTree::build_with_threshold(l, 2).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_dump_lists_root_first() {
        let tree = MerkleTree::build(leaves(3)).unwrap();
        let dump = tree.dump();
        assert!(dump.starts_with("level 2 (1 nodes)"));
        assert!(dump.contains(&tree.root().to_prefixed_hex()));
    }
}
