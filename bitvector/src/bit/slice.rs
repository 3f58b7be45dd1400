use std::iter::zip;

use sorted_iter::assume::AssumeSortedByItemExt;

use crate::bit::word::{SetBits, WORD_BIT_LEN, Word, word_and_bit_index};
use crate::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};

impl BitLength for [Word] {
    fn bit_len(&self) -> usize {
        self.len() * WORD_BIT_LEN
    }
    const BLOCK_BIT_LEN: usize = WORD_BIT_LEN;
}

impl Bitwise for [Word] {
    #[inline]
    fn index(&self, index: usize) -> bool {
        let (word_index, bit_index) = word_and_bit_index(index);
        self[word_index].index(bit_index)
    }

    /// Skips zero words entirely and spends one step per set bit in the others.
    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        self.iter()
            .enumerate()
            .filter(|(_, word)| **word != 0)
            .flat_map(|(word_index, word)| SetBits::new(*word, word_index * WORD_BIT_LEN))
            .assume_sorted_by_item()
    }

    #[inline]
    fn weight(&self) -> usize {
        self.iter().map(Bitwise::weight).sum()
    }

    #[inline]
    fn parity(&self) -> bool {
        let folded: Word = self.iter().fold(0, |accumulator, word| accumulator ^ *word);
        folded.count_ones() % 2 == 1
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.iter().all(|word| *word == 0)
    }

    #[inline]
    fn max_support(&self) -> Option<usize> {
        for (word_index, word) in self.iter().enumerate().rev() {
            if let Some(bit_index) = word.max_support() {
                return Some(word_index * WORD_BIT_LEN + bit_index);
            }
        }
        None
    }

    #[inline]
    fn min_support(&self) -> Option<usize> {
        for (word_index, word) in self.iter().enumerate() {
            if let Some(bit_index) = word.min_support() {
                return Some(word_index * WORD_BIT_LEN + bit_index);
            }
        }
        None
    }
}

impl BitwiseMut for [Word] {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        let (word_index, bit_index) = word_and_bit_index(index);
        self[word_index].assign_index(bit_index, to);
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        let (word_index, bit_index) = word_and_bit_index(index);
        self[word_index].negate_index(bit_index);
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.fill(0);
    }

    fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
        assert!(bit_count <= self.bit_len());
        let mut remaining = bit_count;
        for word in self.iter_mut() {
            if remaining == 0 {
                break;
            }
            let chunk = remaining.min(WORD_BIT_LEN);
            word.assign_random(chunk, random_number_generator);
            remaining -= chunk;
        }
    }
}

impl BitwisePair for [Word] {
    #[inline]
    fn and_weight(&self, other: &Self) -> usize {
        zip(self, other).map(|(left, right)| left.and_weight(right)).sum()
    }

    #[inline]
    fn or_weight(&self, other: &Self) -> usize {
        zip(self, other).map(|(left, right)| left.or_weight(right)).sum()
    }

    #[inline]
    fn xor_weight(&self, other: &Self) -> usize {
        zip(self, other).map(|(left, right)| left.xor_weight(right)).sum()
    }
}

impl BitwisePairMut for [Word] {
    #[inline]
    fn assign(&mut self, other: &Self) {
        self.copy_from_slice(other);
    }

    #[inline]
    fn bitand_assign(&mut self, other: &Self) {
        for (left, right) in zip(self, other) {
            *left &= *right;
        }
    }

    #[inline]
    fn bitor_assign(&mut self, other: &Self) {
        for (left, right) in zip(self, other) {
            *left |= *right;
        }
    }

    #[inline]
    fn bitxor_assign(&mut self, other: &Self) {
        for (left, right) in zip(self, other) {
            *left ^= *right;
        }
    }
}

/// Moves every bit `count` positions toward index zero, filling the far end with zeros.
pub fn shift_toward_front(words: &mut [Word], count: usize) {
    let total_words = words.len();
    let word_shift = count / WORD_BIT_LEN;
    let bit_shift = count % WORD_BIT_LEN;

    if word_shift >= total_words {
        words.fill(0);
        return;
    }

    if bit_shift == 0 {
        words.copy_within(word_shift..total_words, 0);
    } else {
        let complement_shift = WORD_BIT_LEN - bit_shift;
        for destination in 0..total_words - word_shift {
            let source = destination + word_shift;
            let low_bits = words[source] >> bit_shift;
            let high_bits = if source + 1 < total_words {
                words[source + 1] << complement_shift
            } else {
                0
            };
            words[destination] = low_bits | high_bits;
        }
    }

    words[total_words - word_shift..].fill(0);
}

/// Moves every bit `count` positions away from index zero, filling the near end with zeros.
///
/// Bits pushed past the last word are discarded; bits landing in padding are left for the
/// caller to mask.
pub fn shift_toward_back(words: &mut [Word], count: usize) {
    let total_words = words.len();
    let word_shift = count / WORD_BIT_LEN;
    let bit_shift = count % WORD_BIT_LEN;

    if word_shift >= total_words {
        words.fill(0);
        return;
    }

    if bit_shift == 0 {
        words.copy_within(0..total_words - word_shift, word_shift);
    } else {
        let complement_shift = WORD_BIT_LEN - bit_shift;
        for destination in (word_shift..total_words).rev() {
            let source = destination - word_shift;
            let high_bits = words[source] << bit_shift;
            let low_bits = if source > 0 {
                words[source - 1] >> complement_shift
            } else {
                0
            };
            words[destination] = high_bits | low_bits;
        }
    }

    words[..word_shift].fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_spans_words() {
        let words: [Word; 3] = [0b10, 0, 1 << 63];
        let support: Vec<usize> = words.support().collect();
        assert_eq!(support, vec![1, 191]);
        assert_eq!(words.min_support(), Some(1));
        assert_eq!(words.max_support(), Some(191));
    }

    #[test]
    fn shifts_cross_word_boundaries() {
        let mut words: [Word; 2] = [0, 1];
        shift_toward_front(&mut words, 1);
        assert_eq!(words, [1 << 63, 0]);
        shift_toward_back(&mut words, 64);
        assert_eq!(words, [0, 1 << 63]);
        shift_toward_front(&mut words, 65);
        assert_eq!(words, [1 << 62, 0]);
        shift_toward_back(&mut words, 66);
        assert_eq!(words, [0, 0]);
    }
}
