use bitvector::{BitVector, BitVectorError, Bitwise};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sparse_count_matches_dense(vector in arbitrary_bitvector(1000)) {
        let expected = vector.iter().filter(|bit| *bit).count();
        assert_eq!(vector.count_bits(), expected);
        assert_eq!(vector.count_bits_sparse(), expected);
    }

    #[test]
    fn next_set_bit_matches_scan(vector in arbitrary_bitvector(400), start in 0usize..420) {
        let expected = (start..vector.len()).find(|index| vector.index(*index));
        assert_eq!(vector.next_set_bit(start), expected);
    }

    #[test]
    fn rank_counts_prefix(vector in arbitrary_bitvector(300), index in 0usize..300) {
        prop_assume!(index < vector.len());
        let expected = if vector.index(index) {
            vector.iter().take(index + 1).filter(|bit| *bit).count()
        } else {
            0
        };
        assert_eq!(vector.rank_of_bit_set_at_index(index).unwrap(), expected);
    }

    #[test]
    fn power_of_two_variants_agree(vector in arbitrary_bitvector(300)) {
        assert_eq!(vector.is_power_of_2(), vector.is_power_of_2_sparse());
        assert_eq!(vector.is_power_of_2(), vector.count_bits() == 1);
    }

    #[test]
    fn reverse_twice_restores(vector in arbitrary_bitvector(300)) {
        let reversed = vector.reverse();
        let expected: String = vector.to_string().chars().rev().collect();
        assert_eq!(reversed.to_string(), expected);
        assert_eq!(reversed.reverse().to_string(), vector.to_string());
    }

    #[test]
    fn runs_concatenate_to_vector(vector in arbitrary_bitvector(300)) {
        let runs = vector.runs();
        assert_eq!(runs.concat(), vector.to_string());
        for pair in runs.windows(2) {
            assert_ne!(pair[0].chars().next(), pair[1].chars().next());
        }
    }

    #[test]
    fn hamming_distance_is_xor_weight((left, right) in equal_length_bitvectors(300)) {
        let expected = left.iter().zip(right.iter()).filter(|(a, b)| a != b).count();
        assert_eq!(left.hamming_distance(&right).unwrap(), expected);
    }

    #[test]
    fn jaccard_similarity_and_distance_sum_to_one((left, right) in equal_length_bitvectors(300)) {
        let similarity = left.jaccard_similarity(&right).unwrap();
        let distance = left.jaccard_distance(&right).unwrap();
        assert!((0.0..=1.0).contains(&similarity));
        assert!((similarity + distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn min_canonical_is_smallest_rotation(vector in arbitrary_bitvector(40)) {
        let canonical = vector.min_canonical();
        assert_eq!(canonical.len(), vector.len());
        let mut rotation = vector.clone();
        for _ in 0..vector.len() {
            rotation.rotate_left_by_one();
            assert!(canonical <= rotation);
        }
    }
}

fn arbitrary_bitvector(max_length: usize) -> impl Strategy<Value = BitVector> {
    prop::collection::vec(any::<bool>(), 0..max_length).prop_map(BitVector::from_iter)
}

fn equal_length_bitvectors(max_length: usize) -> impl Strategy<Value = (BitVector, BitVector)> {
    (0..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length).prop_map(BitVector::from_iter),
            prop::collection::vec(any::<bool>(), length).prop_map(BitVector::from_iter),
        )
    })
}

fn vector(bits: &str) -> BitVector {
    bits.parse().unwrap()
}

#[test]
fn sparse_count_on_huge_vector() {
    let mut huge = BitVector::zeros(1 << 24);
    huge.set(0, 1).unwrap();
    huge.set(1 << 20, 1).unwrap();
    huge.set(-1, 1).unwrap();
    assert_eq!(huge.count_bits_sparse(), 3);
    assert!(!huge.is_power_of_2_sparse());
}

#[test]
fn next_set_bit_examples() {
    let value = vector("00000000000001");
    assert_eq!(value.next_set_bit(5), Some(13));
    assert_eq!(value.next_set_bit(14), None);
    assert_eq!(vector("0000").next_set_bit(0), None);
}

#[test]
fn rank_examples() {
    let value = vector("01010101011100");
    assert_eq!(value.rank_of_bit_set_at_index(10).unwrap(), 6);
    assert_eq!(value.rank_of_bit_set_at_index(12).unwrap(), 0);
    assert!(matches!(
        value.rank_of_bit_set_at_index(14),
        Err(BitVectorError::IndexOutOfRange { index: 14, size: 14 })
    ));
}

#[test]
fn power_of_two_examples() {
    assert!(vector("10000000001110").slice(0, 8).unwrap().is_power_of_2());
    assert!(vector("00010000").is_power_of_2_sparse());
    assert!(!vector("00011000").is_power_of_2());
    assert!(!vector("0000").is_power_of_2());
}

#[test]
fn runs_example() {
    assert_eq!(vector("1001").runs(), vec!["1", "00", "1"]);
    assert_eq!(vector("111").runs(), vec!["111"]);
    assert!(BitVector::zeros(0).runs().is_empty());
}

#[test]
fn metric_examples() {
    let left = vector("11111111");
    let right = vector("00101011");
    assert_eq!(left.hamming_distance(&right).unwrap(), 4);
    assert!((left.jaccard_similarity(&right).unwrap() - 0.5).abs() < 1e-12);
    assert!((left.jaccard_distance(&right).unwrap() - 0.5).abs() < 1e-12);
    assert!(left.hamming_distance(&vector("1")).is_err());
    assert!(left.jaccard_similarity(&vector("1")).is_err());
}

#[test]
fn jaccard_of_zero_vectors_is_identity() {
    let zeros = BitVector::zeros(16);
    assert_eq!(zeros.jaccard_similarity(&zeros).unwrap(), 1.0);
    assert_eq!(zeros.jaccard_distance(&zeros).unwrap(), 0.0);
}

#[test]
fn min_canonical_example() {
    assert_eq!(vector("00110100").min_canonical().to_string(), "00001101");
    assert!(vector("0").min_canonical().is_zero());
}
