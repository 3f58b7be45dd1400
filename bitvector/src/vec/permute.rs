use crate::error::{BitVectorError, Result};
use crate::{BitVector, Bitwise, BitwiseMut};

impl BitVector {
    fn check_permutation_indices(&self, indices: &[usize]) -> Result<()> {
        match indices.iter().find(|index| **index >= self.len()) {
            Some(index) => Err(BitVectorError::PermutationIndex {
                index: *index,
                size: self.len(),
            }),
            None => Ok(()),
        }
    }

    /// Builds a vector whose bit `k` is bit `indices[k]` of `self`.
    ///
    /// The output has `indices.len()` bits, so indices may repeat or leave positions out.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::PermutationIndex`] for an index outside the vector.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "1001101".parse()?;
    /// assert_eq!(v.permute(&[6, 2, 0, 1])?.to_string(), "1010");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn permute(&self, indices: &[usize]) -> Result<BitVector> {
        self.check_permutation_indices(indices)?;
        Ok(indices.iter().map(|index| self.index(*index)).collect())
    }

    /// Inverse of [`permute`](BitVector::permute) for a bijective index list:
    /// bit `k` of `self` lands at position `indices[k]` of the output.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::PermutationLength`] when `indices` and `self` differ in
    /// length and [`BitVectorError::PermutationIndex`] for an index outside the vector.
    pub fn unpermute(&self, indices: &[usize]) -> Result<BitVector> {
        if indices.len() != self.len() {
            return Err(BitVectorError::PermutationLength {
                expected: self.len(),
                found: indices.len(),
            });
        }
        self.check_permutation_indices(indices)?;
        let mut output = BitVector::zeros(self.len());
        for (position, index) in indices.iter().enumerate() {
            output.assign_index(*index, self.index(position));
        }
        Ok(output)
    }

    /// Splits an even-sized vector into its first and second halves.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::OddSize`] when the size is odd.
    pub fn divide_into_two(&self) -> Result<(BitVector, BitVector)> {
        if self.len() % 2 != 0 {
            return Err(BitVectorError::OddSize { size: self.len() });
        }
        let half = self.len() / 2;
        Ok((self.extract(0, half), self.extract(half, self.len())))
    }
}
