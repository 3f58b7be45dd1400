use crate::BitVector;
use crate::error::{BitVectorError, Result};

impl BitVector {
    /// The unsigned integer value, most significant bit at index 0.
    ///
    /// Leading zeros do not count toward the 128-bit limit. Wider values are read with
    /// [`to_bytes`](BitVector::to_bytes) after left-padding to a multiple of 8 bits,
    /// which yields the big-endian bytes of the value.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::ValueTooWide`] when the value does not fit in 128 bits.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "0001011000101110".parse()?;
    /// assert_eq!(v.int_value()?, 5678);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn int_value(&self) -> Result<u128> {
        let significant = self.significant_len();
        if significant > u128::BITS as usize {
            return Err(BitVectorError::ValueTooWide {
                required: significant,
                size: u128::BITS as usize,
            });
        }
        Ok(self
            .iter()
            .skip(self.len() - significant)
            .fold(0, |value, bit| (value << 1) | u128::from(bit)))
    }

    /// Packs the bits eight per byte, most significant bit first.
    ///
    /// Only the `len() / 8` complete bytes are produced; trailing bits are dropped.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() / 8);
        let mut bits = self.iter();
        for _ in 0..self.len() / 8 {
            let byte = bits
                .by_ref()
                .take(8)
                .fold(0u8, |byte, bit| (byte << 1) | u8::from(bit));
            bytes.push(byte);
        }
        bytes
    }

    /// Decodes each byte as one character.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidWidth`] when the size is not a multiple of 8.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v = BitVector::from_text("hello")?;
    /// assert_eq!(v.len(), 40);
    /// assert_eq!(v.get_bitvector_in_ascii()?, "hello");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn get_bitvector_in_ascii(&self) -> Result<String> {
        if self.len() % 8 != 0 {
            return Err(BitVectorError::InvalidWidth {
                width: self.len(),
                reason: "text needs a multiple of 8 bits",
            });
        }
        Ok(self.to_bytes().into_iter().map(char::from).collect())
    }

    /// Lower-case hexadecimal digits, four bits each.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidWidth`] when the size is not a multiple of 4.
    pub fn get_bitvector_in_hex(&self) -> Result<String> {
        if self.len() % 4 != 0 {
            return Err(BitVectorError::InvalidWidth {
                width: self.len(),
                reason: "hexadecimal needs a multiple of 4 bits",
            });
        }
        let mut hex = String::with_capacity(self.len() / 4);
        let mut bits = self.iter();
        for _ in 0..self.len() / 4 {
            let digit = bits.by_ref().take(4).fold(0u32, |digit, bit| (digit << 1) | u32::from(bit));
            if let Some(character) = char::from_digit(digit, 16) {
                hex.push(character);
            }
        }
        Ok(hex)
    }
}
