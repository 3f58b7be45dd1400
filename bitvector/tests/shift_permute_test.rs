use bitvector::{BitVector, BitVectorError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rotate_left_then_right_restores(vector in arbitrary_bitvector(300), count in 0usize..700) {
        let mut rotated = vector.clone();
        rotated.rotate_left(count).rotate_right(count);
        assert_eq!(rotated.to_string(), vector.to_string());
    }

    #[test]
    fn rotation_equals_repeated_single_steps(vector in arbitrary_bitvector(150), count in 0usize..200) {
        let mut batched = vector.clone();
        batched.rotate_left(count);
        let mut stepped = vector.clone();
        for _ in 0..count {
            stepped.rotate_left_by_one();
        }
        assert_eq!(batched.to_string(), stepped.to_string());

        batched.rotate_right(count);
        for _ in 0..count {
            stepped.rotate_right_by_one();
        }
        assert_eq!(batched.to_string(), vector.to_string());
        assert_eq!(stepped.to_string(), vector.to_string());
    }

    #[test]
    fn rotation_matches_string_rotation(vector in arbitrary_bitvector(300), count in 0usize..300) {
        prop_assume!(!vector.is_empty());
        let text = vector.to_string();
        let split = count % text.len();
        let expected = format!("{}{}", &text[split..], &text[..split]);
        let mut rotated = vector.clone();
        rotated.rotate_left(count);
        assert_eq!(rotated.to_string(), expected);
    }

    #[test]
    fn non_circular_shifts_match_strings(vector in arbitrary_bitvector(300), count in 0usize..350) {
        let text = vector.to_string();
        let kept = text.len().saturating_sub(count);
        let mut shifted_left = vector.clone();
        shifted_left.shift_left(count);
        assert_eq!(shifted_left.to_string(), format!("{}{}", &text[text.len() - kept..], "0".repeat(text.len() - kept)));

        let mut shifted_right = vector.clone();
        shifted_right.shift_right(count);
        assert_eq!(shifted_right.to_string(), format!("{}{}", "0".repeat(text.len() - kept), &text[..kept]));
    }

    #[test]
    fn permute_then_unpermute_restores(
        (vector, indices) in (1usize..200).prop_flat_map(|length| (
            prop::collection::vec(any::<bool>(), length).prop_map(BitVector::from_iter),
            Just((0..length).collect::<Vec<usize>>()).prop_shuffle(),
        ))
    ) {
        let permuted = vector.permute(&indices).unwrap();
        let restored = permuted.unpermute(&indices).unwrap();
        assert_eq!(restored.to_string(), vector.to_string());
    }

    #[test]
    fn divide_into_two_splits_halves(vector in arbitrary_bitvector(300)) {
        let text = vector.to_string();
        match vector.divide_into_two() {
            Ok((first, second)) => {
                let half = text.len() / 2;
                assert_eq!(first.to_string(), &text[..half]);
                assert_eq!(second.to_string(), &text[half..]);
            }
            Err(BitVectorError::OddSize { size }) => assert_eq!(size % 2, 1),
            Err(other) => panic!("unexpected error {other}"),
        }
    }
}

fn arbitrary_bitvector(max_length: usize) -> impl Strategy<Value = BitVector> {
    prop::collection::vec(any::<bool>(), 0..max_length).prop_map(BitVector::from_iter)
}

fn vector(bits: &str) -> BitVector {
    bits.parse().unwrap()
}

#[test]
fn rotations_chain() {
    let mut value = vector("10010000");
    value.rotate_left_by_one().rotate_left_by_one();
    assert_eq!(value.to_string(), "01000010");
    value.rotate_right(10);
    assert_eq!(value.to_string(), "10010000");
}

#[test]
fn shifts_on_empty_and_zero_are_no_ops() {
    let mut empty = BitVector::zeros(0);
    empty.rotate_left(5).rotate_right(3).shift_left(2).shift_right(1);
    assert!(empty.is_empty());

    let mut value = vector("1011");
    value.rotate_left(0).shift_left(0).shift_right(0);
    assert_eq!(value.to_string(), "1011");
    value.rotate_left(4);
    assert_eq!(value.to_string(), "1011");
}

#[test]
fn permute_examples() {
    let value = vector("1001101");
    assert_eq!(value.permute(&[6, 2, 0, 1]).unwrap().to_string(), "1010");
    assert_eq!(value.permute(&[0, 0, 0]).unwrap().to_string(), "111");
    assert!(value.permute(&[]).unwrap().is_empty());
    assert!(matches!(
        value.permute(&[7]),
        Err(BitVectorError::PermutationIndex { index: 7, size: 7 })
    ));
}

#[test]
fn unpermute_validates_indices() {
    let value = vector("110");
    assert_eq!(value.unpermute(&[2, 0, 1]).unwrap().to_string(), "101");
    assert!(matches!(
        value.unpermute(&[0, 1]),
        Err(BitVectorError::PermutationLength { expected: 3, found: 2 })
    ));
    assert!(matches!(
        value.unpermute(&[0, 1, 3]),
        Err(BitVectorError::PermutationIndex { index: 3, size: 3 })
    ));
}

#[test]
fn divide_into_two_example() {
    let (first, second) = vector("11110000").divide_into_two().unwrap();
    assert_eq!(first.to_string(), "1111");
    assert_eq!(second.to_string(), "0000");
    assert!(matches!(vector("101").divide_into_two(), Err(BitVectorError::OddSize { size: 3 })));
    let (first, second) = BitVector::zeros(0).divide_into_two().unwrap();
    assert!(first.is_empty() && second.is_empty());
}

#[test]
fn shift_left_across_words() {
    let mut value = BitVector::zeros(130);
    value.set(-1, 1).unwrap();
    value.shift_left(65);
    assert_eq!(value.next_set_bit(0), Some(64));
    value.shift_left(500);
    assert!(value.to_string().chars().all(|bit| bit == '0'));
}
