use itertools::Itertools;

use crate::bit::word::{SetBits, WORD_BIT_LEN, Word, word_and_bit_index};
use crate::error::{BitVectorError, Result};
use crate::{BitVector, Bitwise, BitwisePair};

impl BitVector {
    /// Number of set bits, counted word by word.
    #[must_use]
    pub fn count_bits(&self) -> usize {
        self.weight()
    }

    /// Number of set bits, spending one step per set bit and skipping zero words.
    ///
    /// Suited to very long vectors with few set bits.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let mut v = BitVector::zeros(1 << 20);
    /// v.set(7, 1)?;
    /// v.set(777_777, 1)?;
    /// assert_eq!(v.count_bits_sparse(), 2);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn count_bits_sparse(&self) -> usize {
        self.support().count()
    }

    /// Smallest position at or after `start` holding a 1.
    #[must_use]
    pub fn next_set_bit(&self, start: usize) -> Option<usize> {
        if start >= self.len() {
            return None;
        }
        let (first_word, bit_index) = word_and_bit_index(start);
        let head = self.words[first_word] & (Word::MAX << bit_index);
        SetBits::new(head, first_word * WORD_BIT_LEN)
            .chain(
                self.words[first_word + 1..]
                    .iter()
                    .enumerate()
                    .filter(|(_, word)| **word != 0)
                    .flat_map(|(offset, word)| SetBits::new(*word, (first_word + 1 + offset) * WORD_BIT_LEN)),
            )
            .next()
    }

    /// Number of set bits at positions up to and including `index`, or 0 when bit `index` is 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] when `index` is outside the vector.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "01010101011100".parse()?;
    /// assert_eq!(v.rank_of_bit_set_at_index(10)?, 6);
    /// assert_eq!(v.rank_of_bit_set_at_index(2)?, 0);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn rank_of_bit_set_at_index(&self, index: usize) -> Result<usize> {
        if index >= self.len() {
            return Err(BitVectorError::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                size: self.len(),
            });
        }
        if !self.index(index) {
            return Ok(0);
        }
        Ok(self.support().take_while(|position| *position <= index).count())
    }

    /// Returns `true` if the integer value is a power of two.
    #[must_use]
    pub fn is_power_of_2(&self) -> bool {
        self.count_bits() == 1
    }

    /// Same as [`is_power_of_2`](BitVector::is_power_of_2), stopping after the second set bit.
    #[must_use]
    pub fn is_power_of_2_sparse(&self) -> bool {
        self.support().take(2).count() == 1
    }

    /// A new vector with the bit order reversed.
    pub fn reverse(&self) -> BitVector {
        self.iter().rev().collect()
    }

    /// Maximal runs of equal consecutive bits, left to right.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "1001".parse()?;
    /// assert_eq!(v.runs(), vec!["1", "00", "1"]);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn runs(&self) -> Vec<String> {
        let mut runs = Vec::new();
        for (bit, run) in &self.iter().chunk_by(|bit| *bit) {
            let digit = if bit { "1" } else { "0" };
            runs.push(digit.repeat(run.count()));
        }
        runs
    }

    /// The circular rotation of this vector with the smallest integer value.
    pub fn min_canonical(&self) -> BitVector {
        let mut rotation = self.clone();
        let mut smallest = self.clone();
        for _ in 1..self.len() {
            rotation.rotate_left_by_one();
            if rotation < smallest {
                smallest.clone_from(&rotation);
            }
        }
        smallest
    }

    /// Number of positions at which two equal-sized vectors differ.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::SizeMismatch`] when the sizes differ.
    pub fn hamming_distance(&self, other: &BitVector) -> Result<usize> {
        self.require_same_size(other)?;
        Ok(self.xor_weight(other))
    }

    /// `|A ∩ B| / |A ∪ B|` over the set bits; two all-zero vectors have similarity 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::SizeMismatch`] when the sizes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let a: BitVector = "11111111".parse()?;
    /// let b: BitVector = "00101011".parse()?;
    /// assert_eq!(a.hamming_distance(&b)?, 4);
    /// assert_eq!(a.jaccard_similarity(&b)?, 0.5);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn jaccard_similarity(&self, other: &BitVector) -> Result<f64> {
        self.require_same_size(other)?;
        let union = self.or_weight(other);
        if union == 0 {
            return Ok(1.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let similarity = self.and_weight(other) as f64 / union as f64;
        Ok(similarity)
    }

    /// `1 - jaccard_similarity`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::SizeMismatch`] when the sizes differ.
    pub fn jaccard_distance(&self, other: &BitVector) -> Result<f64> {
        Ok(1.0 - self.jaccard_similarity(other)?)
    }
}
