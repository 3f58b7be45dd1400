use std::iter::zip;

use crate::BitVector;
use crate::bit::slice::{shift_toward_back, shift_toward_front};

/// Shifts and rotations, all in place.
///
/// "Left" moves bits toward index 0, the leftmost character of the string form;
/// "right" moves them toward the end. Every method returns `&mut Self` so calls chain.
impl BitVector {
    /// Rotates the bits `count` positions to the left; bits leaving index 0 re-enter at the end.
    ///
    /// `count` may exceed the length, in which case it is taken modulo the length.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let mut v: BitVector = "10010000".parse()?;
    /// v.rotate_left(3).rotate_right(1);
    /// assert_eq!(v.to_string(), "01000010");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn rotate_left(&mut self, count: usize) -> &mut Self {
        let length = self.len();
        if length == 0 {
            return self;
        }
        let count = count % length;
        if count == 0 {
            return self;
        }
        let mut wrapped = self.words.clone();
        shift_toward_back(&mut wrapped, length - count);
        shift_toward_front(&mut self.words, count);
        for (word, wrapped_word) in zip(&mut self.words, &wrapped) {
            *word |= wrapped_word;
        }
        self.clear_padding();
        self
    }

    /// Rotates the bits `count` positions to the right; bits leaving the end re-enter at index 0.
    pub fn rotate_right(&mut self, count: usize) -> &mut Self {
        let length = self.len();
        if length == 0 {
            return self;
        }
        self.rotate_left(length - count % length)
    }

    pub fn rotate_left_by_one(&mut self) -> &mut Self {
        self.rotate_left(1)
    }

    pub fn rotate_right_by_one(&mut self) -> &mut Self {
        self.rotate_right(1)
    }

    /// Shifts the bits `count` positions to the left, filling the end with zeros.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let mut v: BitVector = "10010000".parse()?;
    /// v.shift_left(3);
    /// assert_eq!(v.to_string(), "10000000");
    /// v.shift_right(9);
    /// assert_eq!(v.to_string(), "00000000");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn shift_left(&mut self, count: usize) -> &mut Self {
        let length = self.len();
        shift_toward_front(&mut self.words, count.min(length));
        self
    }

    /// Shifts the bits `count` positions to the right, filling index 0 onward with zeros.
    pub fn shift_right(&mut self, count: usize) -> &mut Self {
        if count >= self.len() {
            self.words.fill(0);
            return self;
        }
        shift_toward_back(&mut self.words, count);
        self.clear_padding();
        self
    }
}
