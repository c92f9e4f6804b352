//! Hash utilities for mintkit
//!
//! Two unrelated primitives live here: keccak-256 (the original Keccak
//! padding used by the EVM, not FIPS-202 SHA3-256) for Merkle nodes, and
//! SHA-256 for provenance commitments.

use crate::core::types::Hash;
use sha2::{Digest, Sha256};
use sha3::Keccak256;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Compute the keccak-256 hash of data
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Hash two nodes in ascending byte order: `keccak256(min(a, b) || max(a, b))`.
///
/// The result does not depend on argument order, so a verifier never needs to
/// know whether a node was the left or right child.
pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let hash = Keccak256::new()
        .chain_update(low.as_bytes())
        .chain_update(high.as_bytes())
        .finalize();
    Hash::from_bytes(hash.into())
}

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Compute SHA-256 hash of a file without loading it whole
pub fn sha256_file(path: &Path) -> io::Result<Hash> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Hash::from_bytes(hasher.finalize().into()))
}

/// SHA-256 over a sequence of chunks, as if they were concatenated
pub fn sha256_chunks<I, T>(chunks: I) -> Hash
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for chunk in chunks {
        hasher.update(chunk.as_ref());
    }
    Hash::from_bytes(hasher.finalize().into())
}
