//! Bitwise access to a word slice that only exposes its first `bit_len()` bits.
//!
//! The padding above the logical length in the last word is never read: every
//! accessor here masks it or stops before it.

use std::iter::zip;

use sorted_iter::assume::AssumeSortedByItemExt;

use crate::bit::word::{Word, tail_mask};
use crate::{BitLength, Bitwise, BitwiseMut, BitwisePairMut};

fn assert_equal_length<T1: BitLength + ?Sized, T2: BitLength + ?Sized>(left: &T1, right: &T2) {
    assert!(
        left.bit_len() == right.bit_len(),
        "Left-hand side ({} bits) and right-hand side ({} bits) must have equal lengths",
        left.bit_len(),
        right.bit_len()
    );
}

pub trait BitwiseTruncated
where
    Self: AsRef<[Word]> + BitLength,
{
    /// Storage words with the padding of the last word cleared.
    #[inline]
    fn masked_words(&self) -> impl Iterator<Item = Word> + '_ {
        let words = self.as_ref();
        let last = words.len().saturating_sub(1);
        let mask = tail_mask(self.bit_len());
        words
            .iter()
            .enumerate()
            .map(move |(word_index, word)| if word_index == last { word & mask } else { *word })
    }

    #[inline]
    fn index(&self, index: usize) -> bool {
        assert!(
            index < self.bit_len(),
            "index {} out of range for {} bits",
            index,
            self.bit_len()
        );
        self.as_ref().index(index)
    }

    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        let length = self.bit_len();
        self.as_ref()
            .support()
            .take_while(move |index| *index < length)
            .assume_sorted_by_item()
    }

    #[inline]
    fn weight(&self) -> usize {
        self.masked_words().map(|word| word.count_ones() as usize).sum()
    }

    #[inline]
    fn parity(&self) -> bool {
        self.masked_words().fold(0, |accumulator: Word, word| accumulator ^ word).count_ones() % 2 == 1
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.masked_words().all(|word| word == 0)
    }

    #[inline]
    fn min_support(&self) -> Option<usize> {
        <Self as BitwiseTruncated>::support(self).next()
    }

    #[inline]
    fn max_support(&self) -> Option<usize> {
        let words: Vec<Word> = self.masked_words().collect();
        words.as_slice().max_support()
    }
}

impl<T> BitwiseTruncated for T where T: AsRef<[Word]> + BitLength {}

pub trait BitwiseMutTruncated
where
    Self: AsMut<[Word]> + BitLength,
{
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        assert!(
            index < self.bit_len(),
            "index {} out of range for {} bits",
            index,
            self.bit_len()
        );
        self.as_mut().assign_index(index, to);
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        assert!(
            index < self.bit_len(),
            "index {} out of range for {} bits",
            index,
            self.bit_len()
        );
        self.as_mut().negate_index(index);
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.as_mut().clear_bits();
    }
}

impl<T> BitwiseMutTruncated for T where T: AsMut<[Word]> + BitLength {}

pub trait BitwisePairTruncated<Other: ?Sized>
where
    Self: BitwiseTruncated,
    Other: BitwiseTruncated,
{
    #[inline]
    fn and_weight(&self, other: &Other) -> usize {
        assert_equal_length(self, other);
        zip(self.masked_words(), other.masked_words())
            .map(|(left, right)| (left & right).count_ones() as usize)
            .sum()
    }

    #[inline]
    fn or_weight(&self, other: &Other) -> usize {
        assert_equal_length(self, other);
        zip(self.masked_words(), other.masked_words())
            .map(|(left, right)| (left | right).count_ones() as usize)
            .sum()
    }

    #[inline]
    fn xor_weight(&self, other: &Other) -> usize {
        assert_equal_length(self, other);
        zip(self.masked_words(), other.masked_words())
            .map(|(left, right)| (left ^ right).count_ones() as usize)
            .sum()
    }
}

impl<T: ?Sized, Other: ?Sized> BitwisePairTruncated<Other> for T
where
    T: BitwiseTruncated,
    Other: BitwiseTruncated,
{
}

pub trait BitwisePairMutTruncated<Other: ?Sized>
where
    Self: AsMut<[Word]> + BitLength,
    Other: AsRef<[Word]> + BitLength,
{
    #[inline]
    fn assign(&mut self, other: &Other) {
        assert_equal_length(self, other);
        <[Word] as BitwisePairMut>::assign(self.as_mut(), other.as_ref());
    }

    #[inline]
    fn bitand_assign(&mut self, other: &Other) {
        assert_equal_length(self, other);
        <[Word] as BitwisePairMut>::bitand_assign(self.as_mut(), other.as_ref());
    }

    #[inline]
    fn bitor_assign(&mut self, other: &Other) {
        assert_equal_length(self, other);
        <[Word] as BitwisePairMut>::bitor_assign(self.as_mut(), other.as_ref());
    }

    #[inline]
    fn bitxor_assign(&mut self, other: &Other) {
        assert_equal_length(self, other);
        <[Word] as BitwisePairMut>::bitxor_assign(self.as_mut(), other.as_ref());
    }
}

impl<T: ?Sized, Other: ?Sized> BitwisePairMutTruncated<Other> for T
where
    T: AsMut<[Word]> + BitLength,
    Other: AsRef<[Word]> + BitLength,
{
}
