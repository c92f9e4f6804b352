//! Whitelist parsing and the persisted whitelist data record

use crate::core::artifact;
use crate::core::error::{MintkitError, Result};
use crate::core::types::{Leaf, Root};
use crate::core::Address;
use crate::proofs::merkle::{MerkleTree, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// An ordered, duplicate-free list of addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    addresses: Vec<Address>,
}

impl Whitelist {
    /// Parse whitelist text, one address per line.
    ///
    /// A leading byte-order mark is ignored. Blank lines and `#` comments
    /// are skipped. Lines that do not start
    /// with `0x` are skipped with a warning. Every `0x` line must be a well
    /// formed address, and an address may appear only once.
    pub fn parse(text: &str) -> Result<Self> {
        let mut addresses = Vec::new();
        let mut seen: HashMap<Address, usize> = HashMap::new();

        // Editors on Windows often save with a byte-order mark
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !(line.starts_with("0x") || line.starts_with("0X")) {
                tracing::warn!(line = line_number, content = line, "skipping non-address line");
                continue;
            }

            let address = Address::parse(line).map_err(|e| e.at_line(line_number))?;
            if let Some(&first_line) = seen.get(&address) {
                return Err(MintkitError::DuplicateAddress {
                    address: address.canonical(),
                    first_line,
                    line: line_number,
                });
            }
            seen.insert(address, line_number);
            addresses.push(address);
        }

        Self::from_addresses(addresses)
    }

    /// Read and parse a whitelist file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = artifact::read_text(path)?;
        Self::parse(&text)
    }

    /// Wrap an already validated address list, keeping its order
    pub fn from_addresses(addresses: Vec<Address>) -> Result<Self> {
        if addresses.is_empty() {
            return Err(MintkitError::empty_input("no valid addresses found in whitelist"));
        }
        Ok(Self { addresses })
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Leaf encodings in whitelist order
    pub fn leaves(&self) -> Vec<Leaf> {
        self.addresses.iter().map(Address::leaf).collect()
    }

    pub fn build_tree(&self) -> Result<MerkleTree> {
        self.build_tree_with_threshold(DEFAULT_PARALLEL_THRESHOLD)
    }

    pub fn build_tree_with_threshold(&self, parallel_threshold: usize) -> Result<MerkleTree> {
        MerkleTree::build_with_threshold(self.leaves(), parallel_threshold)
    }
}

/// Whitelist data file (`whitelist_data.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistData {
    pub merkle_root: Root,
    pub total_addresses: usize,
    pub addresses: Vec<Address>,
    /// Level dump for humans; ignored when proofs are generated
    #[serde(default)]
    pub tree: String,
}

impl WhitelistData {
    pub fn new(whitelist: &Whitelist, tree: &MerkleTree) -> Self {
        Self {
            merkle_root: tree.root(),
            total_addresses: whitelist.len(),
            addresses: whitelist.addresses().to_vec(),
            tree: tree.dump(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data: Self = artifact::read_json(path)?;
        tracing::debug!(
            path = %path.display(),
            addresses = data.addresses.len(),
            "loaded whitelist data"
        );
        Ok(data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        artifact::write_json(path, self)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    /// Rebuild the tree from the address list and check it against the
    /// recorded root and address count. The persisted `tree` dump is never
    /// deserialized.
    pub fn rebuild_tree(&self) -> Result<MerkleTree> {
        let tree = MerkleTree::from_addresses(&self.addresses)?;
        if tree.root() != self.merkle_root {
            return Err(MintkitError::RootMismatch {
                expected: self.merkle_root,
                actual: tree.root(),
            });
        }
        if self.total_addresses != self.addresses.len() {
            return Err(MintkitError::CountMismatch {
                expected: self.total_addresses,
                actual: self.addresses.len(),
            });
        }
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "0x1111111111111111111111111111111111111111";
    const B: &str = "0x2222222222222222222222222222222222222222";

    #[test]
    fn test_parse_skips_noise() {
        let upper_b = B.to_uppercase().replacen("0X", "0x", 1);
        let text = format!("# team wallets\n\n  {}  \nnot an address\n{}\n", A, upper_b);
        let whitelist = Whitelist::parse(&text).unwrap();
        assert_eq!(whitelist.len(), 2);
        assert_eq!(whitelist.addresses()[1].canonical(), B);
    }

    #[test]
    fn test_parse_reports_line_of_malformed_address() {
        let text = format!("{}\n0x1234\n", A);
        match Whitelist::parse(&text) {
            Err(MintkitError::MalformedAddress { line, .. }) => assert_eq!(line, Some(2)),
            other => panic!("expected malformed address, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_case_insensitive_duplicates() {
        let text = format!("{}\n{}\n{}\n", A, B, A.replace("0x", "0X"));
        match Whitelist::parse(&text) {
            Err(MintkitError::DuplicateAddress {
                first_line, line, ..
            }) => {
                assert_eq!(first_line, 1);
                assert_eq!(line, 3);
            }
            other => panic!("expected duplicate address, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty() {
        let result = Whitelist::parse("\n# nothing here\n");
        assert!(matches!(result, Err(MintkitError::EmptyInput { .. })));
    }

    #[test]
    fn test_data_rebuild_detects_tampering() {
        let whitelist = Whitelist::parse(&format!("{}\n{}\n", A, B)).unwrap();
        let tree = whitelist.build_tree().unwrap();
        let mut data = WhitelistData::new(&whitelist, &tree);
        assert_eq!(data.rebuild_tree().unwrap().root(), tree.root());

        data.addresses.pop();
        assert!(matches!(
            data.rebuild_tree(),
            Err(MintkitError::RootMismatch { .. })
        ));
    }

    #[test]
    fn test_data_rebuild_detects_edited_count() {
        let whitelist = Whitelist::parse(&format!("{}\n{}\n", A, B)).unwrap();
        let mut data = WhitelistData::new(&whitelist, &whitelist.build_tree().unwrap());
        data.total_addresses = 3;
        match data.rebuild_tree() {
            Err(MintkitError::CountMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected count mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let text = format!("\u{feff}{}\n{}\n", A, B);
        let whitelist = Whitelist::parse(&text).unwrap();
        assert_eq!(whitelist.len(), 2);
        assert_eq!(whitelist.addresses()[0].canonical(), A);
    }

    #[test]
    fn test_data_json_field_names() {
        let whitelist = Whitelist::parse(A).unwrap();
        let tree = whitelist.build_tree().unwrap();
        let json = serde_json::to_value(WhitelistData::new(&whitelist, &tree)).unwrap();

        assert_eq!(json["merkleRoot"], tree.root().to_prefixed_hex());
        assert_eq!(json["totalAddresses"], 1);
        assert_eq!(json["addresses"][0], A);
        assert!(json["tree"].is_string());
    }
}
