use bitvector::{BitVector, BitVectorError, Bitwise, BitwiseMut, Source, SourceArgs};
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_bits_then_get(bits in prop::collection::vec(0u8..=1, 0..500)) {
        let vector = BitVector::from_bits(bits.clone()).unwrap();
        assert_eq!(vector.len(), bits.len());
        for (index, expected) in bits.iter().enumerate() {
            assert_eq!(vector.get(index as isize).unwrap(), *expected);
        }
    }

    #[test]
    fn negative_indices_count_from_end(bits in prop::collection::vec(0u8..=1, 1..300)) {
        let vector = BitVector::from_bits(bits.clone()).unwrap();
        let length = bits.len() as isize;
        for offset in 1..=length {
            assert_eq!(vector.get(-offset).unwrap(), bits[(length - offset) as usize]);
        }
        assert!(vector.get(-length - 1).is_err());
        assert!(vector.get(length).is_err());
    }

    #[test]
    fn set_then_get(bits in prop::collection::vec(0u8..=1, 0..300)) {
        let mut vector = BitVector::zeros(bits.len());
        for (index, bit) in bits.iter().enumerate() {
            vector.set(index as isize, *bit).unwrap();
        }
        let actual: Vec<u8> = vector.iter().map(u8::from).collect();
        assert_eq!(actual, bits);
    }

    #[test]
    fn display_parse_round_trip(vector in arbitrary_bitvector(500)) {
        let parsed: BitVector = vector.to_string().parse().unwrap();
        assert_eq!(parsed.len(), vector.len());
        assert_eq!(parsed.as_words(), vector.as_words());
    }

    #[test]
    fn padding_stays_clear(vector in arbitrary_bitvector(300)) {
        let inverted = !&vector;
        let extra_bits: u32 = inverted.as_words().iter().map(|word| word.count_ones()).sum::<u32>();
        assert_eq!(extra_bits as usize, inverted.len() - vector.count_bits());
    }

    #[test]
    fn slice_matches_bits(vector in arbitrary_bitvector(400), start in 0usize..400, length in 0usize..400) {
        let start = start.min(vector.len());
        let stop = (start + length).min(vector.len());
        let sliced = vector.slice(start, stop).unwrap();
        let expected: Vec<bool> = vector.iter().skip(start).take(stop - start).collect();
        assert_eq!(sliced.iter().collect::<Vec<bool>>(), expected);
    }

    #[test]
    fn int_round_trip(value in any::<u128>()) {
        let vector = BitVector::from_int(value);
        assert_eq!(vector.int_value().unwrap(), value);
        assert_eq!(vector.to_width(128).unwrap().int_value().unwrap(), value);
    }

    #[test]
    fn pad_from_left_keeps_value(vector in arbitrary_bitvector(200), count in 0usize..100) {
        let mut padded = vector.clone();
        padded.pad_from_left(count);
        assert_eq!(padded.len(), vector.len() + count);
        assert_eq!(padded, vector);
    }
}

fn arbitrary_bitvector(max_length: usize) -> impl Strategy<Value = BitVector> {
    prop::collection::vec(any::<bool>(), 0..max_length).prop_map(BitVector::from_iter)
}

#[test]
fn construction_modes() {
    assert_eq!(BitVector::from_bits([1, 0, 0, 1]).unwrap().to_string(), "1001");
    assert_eq!(BitVector::from_int(5678).to_string(), "1011000101110");
    assert_eq!(BitVector::from_int_with_size(5678, 16).unwrap().to_string(), "0001011000101110");
    assert_eq!(BitVector::zeros(5).to_string(), "00000");
    assert_eq!(BitVector::ones(5).to_string(), "11111");
    assert_eq!(BitVector::from_hex("F0a").unwrap().to_string(), "111100001010");
    assert_eq!(BitVector::from_text("hi").unwrap().to_string(), "0110100001101001");
    assert_eq!(BitVector::from_bytes(&[0xA5]).to_string(), "10100101");
    let mut reader = std::io::Cursor::new("0101");
    assert_eq!(BitVector::from_reader(&mut reader).unwrap().to_string(), "0101");
}

#[test]
fn construction_errors() {
    assert!(matches!(
        BitVector::from_bits([1, 2]),
        Err(BitVectorError::InvalidBit { value: 2 })
    ));
    assert!(matches!(
        BitVector::from_int_with_size(8, 3),
        Err(BitVectorError::ValueTooWide { required: 4, size: 3 })
    ));
    assert!(matches!(
        BitVector::from_bitstring("01x"),
        Err(BitVectorError::InvalidDigit { character: 'x', position: 2, .. })
    ));
    assert!(BitVector::from_hex("12g").is_err());
    assert!(BitVector::from_text("Ω").is_err());
}

#[test]
fn source_enum_builds_vectors() {
    let bits = [1, 1, 0];
    let built = BitVector::from_source(Source::Bits(&bits)).unwrap().into_vector().unwrap();
    assert_eq!(built.to_string(), "110");
    let built = BitVector::from_source(Source::Int { value: 3, size: Some(4) })
        .unwrap()
        .into_vector()
        .unwrap();
    assert_eq!(built.to_string(), "0011");
    let built = BitVector::from_source(Source::Size(3)).unwrap().into_vector().unwrap();
    assert_eq!(built.to_string(), "000");
}

#[test]
fn source_args_reject_conflicts() {
    let conflicting = SourceArgs {
        bits: Some(vec![1, 0]),
        int_value: Some(3),
        ..SourceArgs::default()
    };
    match conflicting.build() {
        Err(BitVectorError::ConflictingSources { modes }) => assert_eq!(modes, vec!["bits", "int_value"]),
        other => panic!("expected conflicting sources, got {other:?}"),
    }
    assert!(matches!(SourceArgs::default().build(), Err(BitVectorError::MissingSource)));

    let sized = SourceArgs {
        size: Some(4),
        ..SourceArgs::default()
    };
    assert_eq!(sized.build().unwrap().into_vector().unwrap().to_string(), "0000");

    let from_reader = SourceArgs {
        reader: Some(Box::new(std::io::Cursor::new("1100"))),
        ..SourceArgs::default()
    };
    assert_eq!(from_reader.build().unwrap().into_vector().unwrap().to_string(), "1100");
}

#[test]
fn set_rejects_bad_values_without_mutation() {
    let mut vector: BitVector = "0000".parse().unwrap();
    assert!(matches!(vector.set(1, 2), Err(BitVectorError::InvalidBit { value: 2 })));
    assert!(matches!(
        vector.set(4, 1),
        Err(BitVectorError::IndexOutOfRange { index: 4, size: 4 })
    ));
    assert!(vector.set(-5, 1).is_err());
    assert_eq!(vector.to_string(), "0000");
    vector.set(-1, 1).unwrap();
    assert_eq!(vector.to_string(), "0001");
}

#[test]
fn slices() {
    let vector: BitVector = "0010010000001101".parse().unwrap();
    assert_eq!(vector.slice(2, 7).unwrap().to_string(), "10010");
    assert_eq!(vector.slice(5, 5).unwrap().len(), 0);
    assert!(matches!(
        vector.slice(7, 2),
        Err(BitVectorError::SliceOutOfRange { start: 7, stop: 2, .. })
    ));

    let mut target = BitVector::zeros(8);
    target.set_slice(2, 5, &"111".parse().unwrap()).unwrap();
    assert_eq!(target.to_string(), "00111000");
    assert!(target.set_slice(2, 5, &"11".parse().unwrap()).is_err());
    assert!(target.set_slice(6, 9, &"111".parse().unwrap()).is_err());
    assert_eq!(target.to_string(), "00111000");
}

#[test]
fn slice_across_words() {
    let mut vector = BitVector::zeros(200);
    vector.assign_index(63, true);
    vector.assign_index(64, true);
    vector.assign_index(130, true);
    let sliced = vector.slice(60, 140).unwrap();
    let support: Vec<usize> = sliced.support().collect();
    assert_eq!(support, vec![3, 4, 70]);
}

#[test]
fn padding_and_reset() {
    let mut vector: BitVector = "101".parse().unwrap();
    vector.pad_from_left(2).pad_from_right(3);
    assert_eq!(vector.to_string(), "00101000");
    vector.reset(1).unwrap();
    assert_eq!(vector.to_string(), "11111111");
    assert!(vector.reset(3).is_err());
    vector.reset(0).unwrap();
    assert!(vector.is_zero());
}

#[test]
fn set_value_replaces_contents() {
    let mut vector = BitVector::zeros(3);
    vector.set_value(Source::BitString("110011")).unwrap();
    assert_eq!(vector.to_string(), "110011");
    vector.set_value(Source::Int { value: 9, size: None }).unwrap();
    assert_eq!(vector.to_string(), "1001");
    assert!(vector.set_value(Source::HexString("zz")).is_err());
    assert_eq!(vector.to_string(), "1001");
}

#[test]
fn text_and_hex_exports() {
    let vector = BitVector::from_text("Hello").unwrap();
    assert_eq!(vector.get_bitvector_in_ascii().unwrap(), "Hello");
    assert_eq!(vector.get_bitvector_in_hex().unwrap(), "48656c6c6f");
    assert!(BitVector::zeros(7).get_bitvector_in_ascii().is_err());
    assert!(BitVector::zeros(6).get_bitvector_in_hex().is_err());
    assert_eq!(BitVector::from_hex("deadBEEF").unwrap().get_bitvector_in_hex().unwrap(), "deadbeef");
}

#[test]
fn int_value_ignores_leading_zeros_but_not_overflow() {
    let mut wide = BitVector::zeros(300);
    wide.assign_index(299, true);
    assert_eq!(wide.int_value().unwrap(), 1);
    wide.assign_index(0, true);
    assert!(matches!(wide.int_value(), Err(BitVectorError::ValueTooWide { .. })));
}

#[test]
fn empty_vector() {
    let empty = BitVector::zeros(0);
    assert!(empty.is_empty());
    assert_eq!(empty.count_bits(), 0);
    assert_eq!(empty.to_string(), "");
    assert_eq!(empty.iter().count(), 0);
    assert_eq!(empty.int_value().unwrap(), 0);
    let parsed: BitVector = "".parse().unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn debug_format() {
    let vector: BitVector = "0110".parse().unwrap();
    assert_eq!(format!("{vector:?}"), "BitVector(0110)");
}
