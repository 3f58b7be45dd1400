use std::fmt;
use std::iter::FusedIterator;

use crate::bit::slice::shift_toward_front;
use crate::bit::truncated;
use crate::bit::word::{WORD_BIT_LEN, Word, tail_mask, word_and_bit_index, word_count};
use crate::error::{BitVectorError, Result};
use crate::{BitLength, Bitwise, BitwiseMut};
use crate::{delegate_bitwise, delegate_bitwise_mut, delegate_bitwise_pair, delegate_bitwise_pair_mut};

/// A packed, fixed-length sequence of bits.
///
/// Bit `i` lives in storage word `i / 64` at offset `i % 64`. Bit `0` is the
/// leftmost bit of the string form and the most significant bit of the
/// integer value, so `BitVector::from_int(5)` prints as `101`.
///
/// # Construction
///
/// ```
/// use bitvector::BitVector;
///
/// let from_bits = BitVector::from_bits([1, 0, 0, 1])?;
/// let from_int = BitVector::from_int_with_size(5678, 16)?;
/// let zeros = BitVector::zeros(62);
/// let parsed: BitVector = "111100001111".parse()?;
/// assert_eq!(from_bits.to_string(), "1001");
/// assert_eq!(from_int.to_string(), "0001011000101110");
/// assert_eq!(zeros.len(), 62);
/// assert_eq!(parsed.count_bits(), 8);
/// # Ok::<(), bitvector::BitVectorError>(())
/// ```
///
/// # Equality
///
/// `==` and the ordering operators compare the unsigned integer values, so
/// `0011` equals `11`. The logical operators, on the other hand, require both
/// operands to have the same length.
///
/// # See Also
///
/// - [`Source`](crate::Source) for mode-driven construction
/// - [`BitCursor`](crate::BitCursor) for block reads from files
#[must_use]
#[derive(Clone, Default)]
pub struct BitVector {
    pub(crate) words: Vec<Word>,
    pub(crate) bit_length: usize,
}

impl AsRef<[Word]> for BitVector {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl AsMut<[Word]> for BitVector {
    fn as_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }
}

impl BitLength for BitVector {
    fn bit_len(&self) -> usize {
        self.bit_length
    }
    const BLOCK_BIT_LEN: usize = WORD_BIT_LEN;
}

delegate_bitwise!(BitVector, truncated::BitwiseTruncated);
delegate_bitwise_mut!(BitVector, truncated::BitwiseMutTruncated);
delegate_bitwise_pair!(BitVector, BitVector, truncated::BitwisePairTruncated<BitVector>);
delegate_bitwise_pair_mut!(BitVector, BitVector, truncated::BitwisePairMutTruncated<BitVector>);

impl BitVector {
    /// Wraps storage words, clearing any bits beyond `bit_length`.
    pub(crate) fn from_raw(words: Vec<Word>, bit_length: usize) -> BitVector {
        debug_assert_eq!(words.len(), word_count(bit_length));
        let mut vector = BitVector { words, bit_length };
        vector.clear_padding();
        vector
    }

    /// Creates a vector of `length` zero bits.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::{BitVector, Bitwise};
    ///
    /// let v = BitVector::zeros(100);
    /// assert_eq!(v.len(), 100);
    /// assert!(v.is_zero());
    /// ```
    pub fn zeros(length: usize) -> BitVector {
        BitVector {
            words: vec![0; word_count(length)],
            bit_length: length,
        }
    }

    /// Creates a vector of `length` one bits.
    pub fn ones(length: usize) -> BitVector {
        BitVector::from_raw(vec![Word::MAX; word_count(length)], length)
    }

    /// Returns the number of bits in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_length
    }

    /// Returns `true` if the vector holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }

    /// View the storage words. Bits beyond [`len()`](BitVector::len) in the last word are zero.
    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    /// Zeroes the bits of the last word that lie beyond the logical length.
    pub(crate) fn clear_padding(&mut self) {
        let mask = tail_mask(self.bit_length);
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }

    /// Translates a possibly negative index into a position, counting negative indices from the end.
    pub(crate) fn resolve_index(&self, index: isize) -> Result<usize> {
        let size = self.bit_length;
        let position = if index >= 0 {
            index.unsigned_abs()
        } else {
            match size.checked_sub(index.unsigned_abs()) {
                Some(position) => position,
                None => return Err(BitVectorError::IndexOutOfRange { index, size }),
            }
        };
        if position < size {
            Ok(position)
        } else {
            Err(BitVectorError::IndexOutOfRange { index, size })
        }
    }

    /// Returns the bit at `index` as `0` or `1`; `-1` addresses the last bit.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] when the index falls outside the vector.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "1101".parse()?;
    /// assert_eq!(v.get(2)?, 0);
    /// assert_eq!(v.get(-1)?, 1);
    /// assert!(v.get(4).is_err());
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn get(&self, index: isize) -> Result<u8> {
        let position = self.resolve_index(index)?;
        Ok(u8::from(self.index(position)))
    }

    /// Sets the bit at `index` to `value`, which must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidBit`] for any other value and
    /// [`BitVectorError::IndexOutOfRange`] for an index outside the vector.
    pub fn set(&mut self, index: isize, value: u8) -> Result<()> {
        let bit = bit_from_value(value)?;
        let position = self.resolve_index(index)?;
        self.assign_index(position, bit);
        Ok(())
    }

    /// Returns an iterator over the bits, leftmost first.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "01010".parse()?;
    /// let bits: Vec<bool> = v.iter().collect();
    /// assert_eq!(bits, vec![false, true, false, true, false]);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn iter(&self) -> BitIterator<'_> {
        BitIterator {
            words: &self.words,
            front: 0,
            back: self.bit_length,
        }
    }

    /// Copies the bits from `start` (inclusive) to `stop` (exclusive) into a new vector.
    ///
    /// A `stop` past the end is clamped to the length.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::SliceOutOfRange`] when `start` exceeds the clamped `stop`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "0010010000001101".parse()?;
    /// assert_eq!(v.slice(2, 7)?.to_string(), "10010");
    /// assert_eq!(v.slice(12, 100)?.to_string(), "1101");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn slice(&self, start: usize, stop: usize) -> Result<BitVector> {
        let stop = stop.min(self.bit_length);
        if start > stop {
            return Err(BitVectorError::SliceOutOfRange {
                start,
                stop,
                size: self.bit_length,
            });
        }
        Ok(self.extract(start, stop))
    }

    /// Block-level copy of `start..stop`; the range must already be valid.
    pub(crate) fn extract(&self, start: usize, stop: usize) -> BitVector {
        let length = stop - start;
        if length == 0 {
            return BitVector::zeros(0);
        }
        let start_word = start / WORD_BIT_LEN;
        let mut words = self.words[start_word..word_count(stop)].to_vec();
        shift_toward_front(&mut words, start % WORD_BIT_LEN);
        words.truncate(word_count(length));
        BitVector::from_raw(words, length)
    }

    /// Overwrites the bits from `start` to `stop` with the bits of `source`.
    ///
    /// # Errors
    ///
    /// Fails without modifying the vector when the range is outside the vector or
    /// when `source` does not have exactly `stop - start` bits.
    pub fn set_slice(&mut self, start: usize, stop: usize, source: &BitVector) -> Result<&mut Self> {
        if start > stop || stop > self.bit_length {
            return Err(BitVectorError::SliceOutOfRange {
                start,
                stop,
                size: self.bit_length,
            });
        }
        if source.len() != stop - start {
            return Err(BitVectorError::SizeMismatch {
                left: stop - start,
                right: source.len(),
            });
        }
        for (offset, bit) in source.iter().enumerate() {
            self.assign_index(start + offset, bit);
        }
        Ok(self)
    }

    /// Prepends `count` zero bits. The integer value is unchanged.
    pub fn pad_from_left(&mut self, count: usize) -> &mut Self {
        if count > 0 {
            *self = BitVector::zeros(count).concat(self);
        }
        self
    }

    /// Appends `count` zero bits.
    pub fn pad_from_right(&mut self, count: usize) -> &mut Self {
        self.resize(self.bit_length + count);
        self
    }

    /// Changes the length, truncating from the right or appending zeros.
    pub(crate) fn resize(&mut self, new_length: usize) {
        self.clear_padding();
        self.words.resize(word_count(new_length), 0);
        self.bit_length = new_length;
        self.clear_padding();
    }

    /// Sets every bit to `value`, which must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidBit`] for any other value.
    pub fn reset(&mut self, value: u8) -> Result<&mut Self> {
        let fill = if bit_from_value(value)? { Word::MAX } else { 0 };
        self.words.fill(fill);
        self.clear_padding();
        Ok(self)
    }

    /// Number of bits from the first set bit to the end, zero for an all-zero vector.
    #[must_use]
    pub(crate) fn significant_len(&self) -> usize {
        self.min_support().map_or(0, |first| self.bit_length - first)
    }

    /// Same value, left-padded to `width` bits; `width` must be at least the current length.
    pub(crate) fn widened(&self, width: usize) -> BitVector {
        let mut widened = self.clone();
        widened.pad_from_left(width.saturating_sub(self.bit_length));
        widened
    }

    /// Same value in its minimal representation, never shorter than one bit.
    pub(crate) fn trimmed(&self) -> BitVector {
        let significant = self.significant_len().max(1);
        if significant >= self.bit_length {
            return self.widened(1);
        }
        self.extract(self.bit_length - significant, self.bit_length)
    }

    /// Returns a vector of exactly `width` bits holding the same integer value.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::ValueTooWide`] when the value needs more than `width` bits.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "000101".parse()?;
    /// assert_eq!(v.to_width(3)?.to_string(), "101");
    /// assert_eq!(v.to_width(8)?.to_string(), "00000101");
    /// assert!(v.to_width(2).is_err());
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn to_width(&self, width: usize) -> Result<BitVector> {
        let significant = self.significant_len();
        if significant > width {
            return Err(BitVectorError::ValueTooWide {
                required: significant,
                size: width,
            });
        }
        if width >= self.bit_length {
            Ok(self.widened(width))
        } else {
            Ok(self.extract(self.bit_length - width, self.bit_length))
        }
    }
}

pub(crate) fn bit_from_value(value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(BitVectorError::InvalidBit { value }),
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<Bits: IntoIterator<Item = bool>>(iterator: Bits) -> Self {
        let iterator = iterator.into_iter();
        let mut words = Vec::with_capacity(word_count(iterator.size_hint().0));
        let mut length = 0;
        for bit in iterator {
            let (word_index, bit_index) = word_and_bit_index(length);
            if bit_index == 0 {
                words.push(0);
            }
            if bit {
                words[word_index].assign_index(bit_index, true);
            }
            length += 1;
        }
        BitVector {
            words,
            bit_length: length,
        }
    }
}

impl Extend<bool> for BitVector {
    fn extend<Bits: IntoIterator<Item = bool>>(&mut self, iterator: Bits) {
        let appended: BitVector = iterator.into_iter().collect();
        *self = self.concat(&appended);
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("BitVector")
            .field(&format_args!("{self}"))
            .finish()
    }
}

/// Iterator over the bits of a [`BitVector`], leftmost first.
#[derive(Clone, Debug)]
pub struct BitIterator<'life> {
    words: &'life [Word],
    front: usize,
    back: usize,
}

impl Iterator for BitIterator<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = self.words.index(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for BitIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.words.index(self.back))
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

impl FusedIterator for BitIterator<'_> {}

impl<'life> IntoIterator for &'life BitVector {
    type Item = bool;
    type IntoIter = BitIterator<'life>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
