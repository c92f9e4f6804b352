//! Proof verification and the persisted proof record

use crate::core::error::{MintkitError, Result};
use crate::core::hash::hash_sorted_pair;
use crate::core::types::{Hash, Leaf, Root};
use crate::core::Address;
use crate::whitelist::WhitelistData;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Sibling hashes from leaf to root; apply them in that order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    siblings: Vec<Hash>,
}

impl Proof {
    pub fn new(siblings: Vec<Hash>) -> Self {
        Self { siblings }
    }

    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Check this proof links `leaf` to `root`
    pub fn verify(&self, leaf: &Leaf, root: &Root) -> bool {
        verify(&self.siblings, leaf, root)
    }

    /// `0x`-prefixed hex of every sibling, in order
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.siblings.iter().map(Hash::to_prefixed_hex).collect()
    }
}

impl From<Vec<Hash>> for Proof {
    fn from(siblings: Vec<Hash>) -> Self {
        Self::new(siblings)
    }
}

/// Fold `proof` over `leaf` with sorted-pair hashing and compare with `root`.
///
/// Pure and total: a proof of the wrong length or content just yields `false`.
pub fn verify(proof: &[Hash], leaf: &Leaf, root: &Root) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |node, sibling| hash_sorted_pair(&node, sibling));
    computed == *root
}

/// Proof output file: `proof_<first 6 hex digits>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRecord {
    pub address: Address,
    pub proof: Proof,
    pub merkle_root: Root,
    pub verified: bool,
    pub generated_at: String,
}

impl ProofRecord {
    /// Generate a proof for `address` from persisted whitelist data.
    ///
    /// The tree is rebuilt from the address list and checked against the
    /// recorded root before the proof is produced, then the proof is verified
    /// once more as a sanity check.
    pub fn generate(data: &WhitelistData, address: &Address) -> Result<Self> {
        if !data.contains(address) {
            return Err(MintkitError::leaf_not_found(address.canonical()));
        }

        let tree = data.rebuild_tree()?;
        let leaf = address.leaf();
        let proof = tree.prove(&leaf)?;
        let verified = proof.verify(&leaf, &tree.root());

        tracing::info!(
            address = %address,
            siblings = proof.len(),
            verified,
            "generated proof"
        );

        Ok(Self {
            address: *address,
            proof,
            merkle_root: tree.root(),
            verified,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Verify against the recorded root
    pub fn verify(&self) -> bool {
        self.verify_against(&self.merkle_root)
    }

    /// Verify against an externally supplied root (e.g. the one on-chain)
    pub fn verify_against(&self, root: &Root) -> bool {
        self.proof.verify(&self.address.leaf(), root)
    }

    /// File name the proof is saved under: `<prefix><hex digits 0..6>.json`
    pub fn file_name(&self, prefix: &str) -> String {
        let canonical = self.address.canonical();
        format!("{}{}.json", prefix, &canonical[2..8])
    }
}
