use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::bit::word::word_count;
use crate::error::{BitVectorError, Result};
use crate::{BitVector, Bitwise, BitwisePairMut, WORD_BIT_LEN};

impl BitVector {
    pub(crate) fn require_same_size(&self, other: &BitVector) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(BitVectorError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }

    /// Bitwise AND of two vectors of equal size.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::SizeMismatch`] when the sizes differ.
    pub fn checked_and(&self, other: &BitVector) -> Result<BitVector> {
        self.require_same_size(other)?;
        Ok(self & other)
    }

    /// Bitwise OR of two vectors of equal size.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::SizeMismatch`] when the sizes differ.
    pub fn checked_or(&self, other: &BitVector) -> Result<BitVector> {
        self.require_same_size(other)?;
        Ok(self | other)
    }

    /// Bitwise XOR of two vectors of equal size.
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
    /// let a: BitVector = "1100".parse()?;
    /// let b: BitVector = "1010".parse()?;
    /// assert_eq!(a.checked_xor(&b)?.to_string(), "0110");
    /// assert!(a.checked_xor(&BitVector::zeros(3)).is_err());
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn checked_xor(&self, other: &BitVector) -> Result<BitVector> {
        self.require_same_size(other)?;
        Ok(self ^ other)
    }

    /// Appends the bits of `other` after the bits of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let a: BitVector = "110".parse()?;
    /// let b: BitVector = "01".parse()?;
    /// assert_eq!(a.concat(&b).to_string(), "11001");
    /// assert_eq!(a.concat(&BitVector::zeros(0)), a);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn concat(&self, other: &BitVector) -> BitVector {
        let total = self.len() + other.len();
        let mut words = self.words.clone();
        words.resize(word_count(total), 0);
        let word_offset = self.len() / WORD_BIT_LEN;
        let bit_offset = self.len() % WORD_BIT_LEN;
        for (index, word) in other.words.iter().enumerate() {
            let target = word_offset + index;
            words[target] |= word << bit_offset;
            if bit_offset != 0 && target + 1 < words.len() {
                words[target + 1] |= word >> (WORD_BIT_LEN - bit_offset);
            }
        }
        BitVector::from_raw(words, total)
    }

    /// Returns `true` if the bits of `needle` appear contiguously in `self`.
    ///
    /// An empty needle is contained in every vector; a needle longer than `self` never is.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let haystack: BitVector = "0011001100".parse()?;
    /// assert!(haystack.contains(&"0110".parse()?));
    /// assert!(!haystack.contains(&"111".parse()?));
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn contains(&self, needle: &BitVector) -> bool {
        if needle.is_empty() {
            return true;
        }
        if needle.len() > self.len() {
            return false;
        }
        (0..=self.len() - needle.len()).any(|start| self.extract(start, start + needle.len()).words == needle.words)
    }

    /// Compares the unsigned integer values, ignoring leading zeros.
    fn cmp_value(&self, other: &BitVector) -> Ordering {
        let left = self.significant_len();
        let right = other.significant_len();
        left.cmp(&right).then_with(|| {
            let left_bits = self.iter().skip(self.len() - left);
            let right_bits = other.iter().skip(other.len() - right);
            left_bits.cmp(right_bits)
        })
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for BitVector {}

impl PartialOrd for BitVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for BitVector {
    /// Hashes the powers of two present in the value, so equal values hash equally.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let length = self.len();
        for position in self.support() {
            state.write_usize(length - position);
        }
    }
}

impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, other: &BitVector) {
        BitwisePairMut::bitand_assign(self, other);
    }
}

impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, other: &BitVector) {
        BitwisePairMut::bitor_assign(self, other);
    }
}

impl BitXorAssign<&BitVector> for BitVector {
    fn bitxor_assign(&mut self, other: &BitVector) {
        BitwisePairMut::bitxor_assign(self, other);
    }
}

/// # Panics
///
/// Panics if the operands have different sizes; see [`BitVector::checked_and`].
impl BitAnd for &BitVector {
    type Output = BitVector;

    fn bitand(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        clone &= other;
        clone
    }
}

/// # Panics
///
/// Panics if the operands have different sizes; see [`BitVector::checked_or`].
impl BitOr for &BitVector {
    type Output = BitVector;

    fn bitor(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        clone |= other;
        clone
    }
}

/// # Panics
///
/// Panics if the operands have different sizes; see [`BitVector::checked_xor`].
impl BitXor for &BitVector {
    type Output = BitVector;

    fn bitxor(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        clone ^= other;
        clone
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl Not for BitVector {
    type Output = BitVector;

    fn not(mut self) -> Self::Output {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_padding();
        self
    }
}

/// Concatenation.
impl Add for &BitVector {
    type Output = BitVector;

    fn add(self, other: Self) -> Self::Output {
        self.concat(other)
    }
}
