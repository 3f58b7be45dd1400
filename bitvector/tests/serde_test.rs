#![cfg(feature = "serde")]

use bitvector::BitVector;

#[test]
fn serializes_as_bit_string() {
    let vector: BitVector = "0010110".parse().unwrap();
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(json, "\"0010110\"");
    let back: BitVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_string(), "0010110");
}

#[test]
fn rejects_non_binary_strings() {
    let result: Result<BitVector, _> = serde_json::from_str("\"0120\"");
    assert!(result.unwrap_err().to_string().contains("failed to parse BitVector"));
}
