use sha2::{Digest, Sha256};

pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first_hash = Sha256::digest(data);
    let result = Sha256::digest(first_hash);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Txids are displayed with the hash bytes reversed.
pub fn txid_hex(hash: &[u8; 32]) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}
