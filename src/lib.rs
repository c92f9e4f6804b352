//! mintkit - whitelist and provenance tooling for NFT mints
//!
//! mintkit covers the off-chain half of a whitelisted, provably fair mint:
//!
//! - **Whitelist Merkle root**: a binary keccak-256 tree over the addresses,
//!   with sorted-pair node hashing so proofs verify without position bits
//! - **Inclusion proofs**: sibling paths for single addresses, checked with
//!   the same fold an on-chain verifier performs
//! - **Provenance hash**: one SHA-256 commitment over a metadata directory,
//!   published before the sale to fix the reveal order
//!
//! # Example Usage
//!
//! ```rust
//! use mintkit::{Address, MerkleTree};
//!
//! let addresses = [
//!     Address::parse("0x1111111111111111111111111111111111111111")?,
//!     Address::parse("0x2222222222222222222222222222222222222222")?,
//!     Address::parse("0x3333333333333333333333333333333333333333")?,
//! ];
//! let tree = MerkleTree::from_addresses(&addresses)?;
//!
//! let leaf = addresses[2].leaf();
//! let proof = tree.prove(&leaf)?;
//! assert!(mintkit::verify(proof.siblings(), &leaf, &tree.root()));
//! # Ok::<(), mintkit::MintkitError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;
pub mod provenance;
pub mod whitelist;

// Re-export commonly used types
pub use crate::core::{
    address::{encode_leaf, Address},
    error::{MintkitError, Result},
    types::{Hash, Leaf, Root},
};

pub use proofs::{
    merkle::MerkleTree,
    proof::{verify, Proof, ProofRecord},
};

pub use provenance::{provenance, DigestScheme, Provenance, ProvenanceRecord};

pub use whitelist::{Whitelist, WhitelistData};

/// Current version of mintkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
