//! Core types and utilities for mintkit
//!
//! This module contains the fundamental data types, error handling,
//! hash primitives and artifact I/O used throughout the system.

pub mod address;
pub mod artifact;
pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use address::{encode_leaf, Address};
pub use error::{MintkitError, Result};
pub use hash::{hash_sorted_pair, keccak256, sha256, sha256_file};
pub use types::{Hash, Leaf, Root};
