use sorted_iter::assume::AssumeSortedByItemExt;

use crate::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};

/// Storage unit of a [`BitVector`](crate::BitVector).
pub type Word = u64;

/// Number of bits held by one storage [`Word`].
pub const WORD_BIT_LEN: usize = Word::BITS as usize;

/// Iterator over the set bits of a single word, lowest position first.
///
/// Each step clears the lowest set bit, so a full traversal costs one step per
/// set bit rather than one per bit position.
#[derive(Clone, Debug)]
pub struct SetBits {
    word: Word,
    offset: usize,
}

impl SetBits {
    /// Iterate over the set bits of `word`, reporting each position shifted by `offset`.
    #[must_use]
    pub fn new(word: Word, offset: usize) -> Self {
        Self { word, offset }
    }
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let position = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(self.offset + position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBits {}

macro_rules! implement_word_traits {
    ($word_type:ty) => {
        impl BitLength for $word_type {
            fn bit_len(&self) -> usize {
                Self::BLOCK_BIT_LEN
            }
            const BLOCK_BIT_LEN: usize = <$word_type>::BITS as usize;
        }

        impl Bitwise for $word_type {
            #[inline]
            fn index(&self, index: usize) -> bool {
                assert!(index < Self::BLOCK_BIT_LEN);
                ((*self >> index) & 1) == 1
            }

            #[inline]
            fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
                SetBits::new(Word::from(*self), 0).assume_sorted_by_item()
            }

            #[inline]
            fn min_support(&self) -> Option<usize> {
                if *self == 0 {
                    return None;
                }
                Some(self.trailing_zeros() as usize)
            }

            #[inline]
            fn max_support(&self) -> Option<usize> {
                if *self == 0 {
                    return None;
                }
                Some(Self::BLOCK_BIT_LEN - self.leading_zeros() as usize - 1)
            }

            #[inline]
            fn weight(&self) -> usize {
                self.count_ones() as usize
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }

        impl BitwiseMut for $word_type {
            #[inline]
            fn assign_index(&mut self, index: usize, to: bool) {
                assert!(index < Self::BLOCK_BIT_LEN);
                let mask: $word_type = 1 << index;
                if to {
                    *self |= mask;
                } else {
                    *self &= !mask;
                }
            }

            #[inline]
            fn negate_index(&mut self, index: usize) {
                assert!(
                    index < Self::BLOCK_BIT_LEN,
                    "index {} is larger than capacity {}",
                    index,
                    Self::BLOCK_BIT_LEN
                );
                let mask: $word_type = 1 << index;
                *self ^= mask;
            }

            #[inline]
            fn clear_bits(&mut self) {
                *self = 0;
            }

            fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
                assert!(bit_count <= Self::BLOCK_BIT_LEN);
                if bit_count == 0 {
                    return;
                }
                let mask = <$word_type>::MAX >> (Self::BLOCK_BIT_LEN - bit_count);
                *self = (*self & !mask) | (random_number_generator.r#gen::<$word_type>() & mask);
            }
        }

        impl BitwisePair for $word_type {
            #[inline]
            fn and_weight(&self, other: &Self) -> usize {
                (*self & *other).count_ones() as usize
            }

            #[inline]
            fn or_weight(&self, other: &Self) -> usize {
                (*self | *other).count_ones() as usize
            }

            #[inline]
            fn xor_weight(&self, other: &Self) -> usize {
                (*self ^ *other).count_ones() as usize
            }
        }

        impl BitwisePairMut for $word_type {
            #[inline]
            fn assign(&mut self, other: &Self) {
                *self = *other;
            }

            #[inline]
            fn bitand_assign(&mut self, other: &Self) {
                *self &= *other;
            }

            #[inline]
            fn bitor_assign(&mut self, other: &Self) {
                *self |= *other;
            }

            #[inline]
            fn bitxor_assign(&mut self, other: &Self) {
                *self ^= *other;
            }
        }
    };
}

// Bytes carry the MSB-first file and text encodings, words carry vector storage.
implement_word_traits!(u8);
implement_word_traits!(u64);

/// Mask selecting the bits of the last storage word that lie inside a vector of `bit_length` bits.
#[inline]
#[must_use]
pub fn tail_mask(bit_length: usize) -> Word {
    match bit_length % WORD_BIT_LEN {
        0 => Word::MAX,
        used => Word::MAX >> (WORD_BIT_LEN - used),
    }
}

/// Number of words needed to store `bit_length` bits.
#[inline]
#[must_use]
pub fn word_count(bit_length: usize) -> usize {
    bit_length.div_ceil(WORD_BIT_LEN)
}

/// Word index and intra-word offset of bit `index`.
#[inline]
#[must_use]
pub fn word_and_bit_index(index: usize) -> (usize, usize) {
    (index / WORD_BIT_LEN, index % WORD_BIT_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bits_visits_each_one() {
        let positions: Vec<usize> = SetBits::new(0b1010_0001, 64).collect();
        assert_eq!(positions, vec![64, 69, 71]);
    }

    #[test]
    fn tail_mask_covers_partial_word() {
        assert_eq!(tail_mask(3), 0b111);
        assert_eq!(tail_mask(64), Word::MAX);
        assert_eq!(tail_mask(130), 0b11);
    }

    #[test]
    fn byte_bits() {
        let mut byte = 0u8;
        byte.assign_index(7, true);
        assert_eq!(byte, 0x80);
        assert_eq!(byte.max_support(), Some(7));
        byte.negate_index(0);
        assert_eq!(byte.weight(), 2);
    }
}
