//! Merkle proof system for mintkit
//!
//! This module builds whitelist trees and generates and verifies inclusion
//! proofs for single addresses.

pub mod merkle;
pub mod proof;

// Re-export commonly used items
pub use merkle::{MerkleTree, DEFAULT_PARALLEL_THRESHOLD};
pub use proof::{verify, Proof, ProofRecord};
