use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::bit::word::{WORD_BIT_LEN, Word, word_count};
use crate::error::{BitVectorError, Result};
use crate::io::FileCursor;
use crate::vec::bitvector::bit_from_value;
use crate::{BitVector, BitwiseMut};

/// One construction mode for a [`BitVector`].
///
/// Each variant carries exactly the inputs of its mode, so a single value can never
/// describe two modes at once. [`SourceArgs`] accepts the loose keyword-style inputs
/// and rejects conflicting combinations before turning them into a `Source`.
pub enum Source<'a> {
    /// Explicit bits, each `0` or `1`.
    Bits(&'a [u8]),
    /// Minimal binary form of `value`, left-padded with zeros to `size` when given.
    ///
    /// Values wider than 128 bits are built from big-endian bytes with
    /// [`BitVector::from_bytes`] or from digits with [`BitVector::from_hex`].
    Int { value: u128, size: Option<usize> },
    /// All-zero vector of the given size.
    Size(usize),
    /// A string of `'0'` and `'1'` characters.
    BitString(&'a str),
    /// Hexadecimal digits, four bits each.
    HexString(&'a str),
    /// Text whose characters all fit in one byte, eight bits each.
    Text(&'a str),
    /// A reader drained to its end and parsed as a bit string.
    Reader(&'a mut dyn Read),
    /// A file opened as a block-reading cursor.
    File(&'a Path),
}

/// Result of building from a [`Source`]: a vector, or a cursor for file sources.
#[derive(Debug)]
pub enum Constructed {
    Vector(BitVector),
    Cursor(FileCursor),
}

impl Constructed {
    #[must_use]
    pub fn into_vector(self) -> Option<BitVector> {
        match self {
            Constructed::Vector(vector) => Some(vector),
            Constructed::Cursor(_) => None,
        }
    }

    #[must_use]
    pub fn into_cursor(self) -> Option<FileCursor> {
        match self {
            Constructed::Vector(_) => None,
            Constructed::Cursor(cursor) => Some(cursor),
        }
    }
}

/// Keyword-style construction arguments, validated so that exactly one mode is present.
///
/// An integer value together with a size is a single mode; a size on its own is the
/// all-zero mode.
///
/// # Example
///
/// ```
/// use bitvector::SourceArgs;
///
/// let vector = SourceArgs { int_value: Some(5), size: Some(8), ..SourceArgs::default() }
///     .build()?
///     .into_vector();
/// assert_eq!(vector.map(|v| v.to_string()), Some("00000101".to_string()));
///
/// let conflicting = SourceArgs { size: Some(8), bitstring: Some("1".into()), ..SourceArgs::default() };
/// assert!(conflicting.build().is_err());
/// # Ok::<(), bitvector::BitVectorError>(())
/// ```
#[derive(Default)]
pub struct SourceArgs {
    pub bits: Option<Vec<u8>>,
    pub int_value: Option<u128>,
    pub size: Option<usize>,
    pub bitstring: Option<String>,
    pub hexstring: Option<String>,
    pub textstring: Option<String>,
    pub reader: Option<Box<dyn Read>>,
    pub filename: Option<PathBuf>,
}

impl SourceArgs {
    fn supplied_modes(&self) -> Vec<&'static str> {
        let mut modes = Vec::new();
        if self.bits.is_some() {
            modes.push("bits");
        }
        if self.int_value.is_some() {
            modes.push("int_value");
        } else if self.size.is_some() {
            modes.push("size");
        }
        if self.bitstring.is_some() {
            modes.push("bitstring");
        }
        if self.hexstring.is_some() {
            modes.push("hexstring");
        }
        if self.textstring.is_some() {
            modes.push("textstring");
        }
        if self.reader.is_some() {
            modes.push("reader");
        }
        if self.filename.is_some() {
            modes.push("filename");
        }
        modes
    }

    /// Builds the vector or cursor described by the single supplied mode.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::ConflictingSources`] when more than one mode is supplied,
    /// [`BitVectorError::MissingSource`] when none is, and the mode's own error otherwise.
    pub fn build(mut self) -> Result<Constructed> {
        let modes = self.supplied_modes();
        if modes.len() > 1 {
            return Err(BitVectorError::ConflictingSources { modes });
        }
        if let Some(bits) = &self.bits {
            return BitVector::from_source(Source::Bits(bits));
        }
        if let Some(value) = self.int_value {
            return BitVector::from_source(Source::Int { value, size: self.size });
        }
        if let Some(size) = self.size {
            return BitVector::from_source(Source::Size(size));
        }
        if let Some(bitstring) = &self.bitstring {
            return BitVector::from_source(Source::BitString(bitstring));
        }
        if let Some(hexstring) = &self.hexstring {
            return BitVector::from_source(Source::HexString(hexstring));
        }
        if let Some(textstring) = &self.textstring {
            return BitVector::from_source(Source::Text(textstring));
        }
        if let Some(reader) = self.reader.as_mut() {
            return BitVector::from_source(Source::Reader(&mut **reader));
        }
        if let Some(filename) = &self.filename {
            return BitVector::from_source(Source::File(filename));
        }
        Err(BitVectorError::MissingSource)
    }
}

fn minimal_bit_length(value: u128) -> usize {
    (u128::BITS - value.leading_zeros()).max(1) as usize
}

impl BitVector {
    /// Builds a vector or cursor from one construction mode.
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected mode.
    pub fn from_source(source: Source<'_>) -> Result<Constructed> {
        let vector = match source {
            Source::Bits(bits) => BitVector::from_bits(bits.iter().copied())?,
            Source::Int { value, size: None } => BitVector::from_int(value),
            Source::Int { value, size: Some(size) } => BitVector::from_int_with_size(value, size)?,
            Source::Size(size) => BitVector::zeros(size),
            Source::BitString(bitstring) => BitVector::from_bitstring(bitstring)?,
            Source::HexString(hexstring) => BitVector::from_hex(hexstring)?,
            Source::Text(text) => BitVector::from_text(text)?,
            Source::Reader(reader) => BitVector::from_reader(reader)?,
            Source::File(path) => return Ok(Constructed::Cursor(FileCursor::open(path)?)),
        };
        Ok(Constructed::Vector(vector))
    }

    /// Builds a vector from a sequence of `0`/`1` values.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidBit`] for any other value.
    pub fn from_bits(bits: impl IntoIterator<Item = u8>) -> Result<BitVector> {
        bits.into_iter().map(bit_from_value).collect()
    }

    /// The minimal binary representation of `value`; zero becomes the single bit `0`.
    ///
    /// Integers wider than `u128` are built with [`from_bytes`](BitVector::from_bytes),
    /// which reads big-endian bytes, or [`from_hex`](BitVector::from_hex).
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// assert_eq!(BitVector::from_int(123).to_string(), "1111011");
    /// assert_eq!(BitVector::from_int(0).to_string(), "0");
    /// ```
    pub fn from_int(value: u128) -> BitVector {
        let length = minimal_bit_length(value);
        let mut vector = BitVector::zeros(length);
        vector.write_int(value);
        vector
    }

    /// `value` left-padded with zeros to exactly `size` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::ValueTooWide`] when `value` needs more than `size` bits.
    pub fn from_int_with_size(value: u128, size: usize) -> Result<BitVector> {
        let required = if value == 0 { 0 } else { minimal_bit_length(value) };
        if required > size {
            return Err(BitVectorError::ValueTooWide { required, size });
        }
        let mut vector = BitVector::zeros(size);
        vector.write_int(value);
        Ok(vector)
    }

    /// Writes `value` into the rightmost bits; the vector must be zero and wide enough.
    fn write_int(&mut self, value: u128) {
        let length = self.len();
        for power in 0..minimal_bit_length(value).min(length) {
            if (value >> power) & 1 == 1 {
                self.assign_index(length - 1 - power, true);
            }
        }
    }

    /// Parses a string of `'0'` and `'1'` characters.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidDigit`] at the first other character.
    pub fn from_bitstring(bitstring: &str) -> Result<BitVector> {
        bitstring
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(BitVectorError::InvalidDigit {
                    character,
                    position,
                    expected: "binary",
                }),
            })
            .collect()
    }

    /// Parses hexadecimal digits in either case, four bits per digit.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidDigit`] at the first non-hexadecimal character.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// assert_eq!(BitVector::from_hex("68Ab")?.to_string(), "0110100010101011");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn from_hex(hexstring: &str) -> Result<BitVector> {
        let mut vector = BitVector::zeros(4 * hexstring.chars().count());
        for (position, character) in hexstring.chars().enumerate() {
            let digit = character.to_digit(16).ok_or(BitVectorError::InvalidDigit {
                character,
                position,
                expected: "hexadecimal",
            })?;
            for offset in 0..4 {
                vector.assign_index(4 * position + offset, (digit >> (3 - offset)) & 1 == 1);
            }
        }
        Ok(vector)
    }

    /// Encodes each character as its eight-bit code, most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidDigit`] for a character whose code does not fit in a byte.
    pub fn from_text(text: &str) -> Result<BitVector> {
        let bytes = text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(u32::from(character)).map_err(|_| BitVectorError::InvalidDigit {
                    character,
                    position,
                    expected: "8-bit text",
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(BitVector::from_bytes(&bytes))
    }

    /// Reads `reader` to its end and parses the contents as a bit string.
    ///
    /// This is the inverse of [`write_bits_to_writer`](BitVector::write_bits_to_writer).
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Io`] on a read failure and
    /// [`BitVectorError::InvalidDigit`] for contents other than `'0'` and `'1'`.
    pub fn from_reader(reader: &mut (impl Read + ?Sized)) -> Result<BitVector> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        BitVector::from_bitstring(&contents)
    }

    /// Unpacks bytes most significant bit first, eight bits per byte.
    pub fn from_bytes(bytes: &[u8]) -> BitVector {
        let length = 8 * bytes.len();
        let mut words: Vec<Word> = vec![0; word_count(length)];
        for (byte_index, byte) in bytes.iter().enumerate() {
            let reversed = Word::from(byte.reverse_bits());
            let position = 8 * byte_index;
            words[position / WORD_BIT_LEN] |= reversed << (position % WORD_BIT_LEN);
        }
        BitVector::from_raw(words, length)
    }

    /// Replaces the contents and size of this vector with a freshly built one.
    ///
    /// # Errors
    ///
    /// Fails for file sources, which produce a cursor rather than a value, and with
    /// the error of the selected mode. The vector is unchanged on failure.
    pub fn set_value(&mut self, source: Source<'_>) -> Result<&mut Self> {
        match BitVector::from_source(source)? {
            Constructed::Vector(vector) => *self = vector,
            Constructed::Cursor(_) => return Err(BitVectorError::CursorSource),
        }
        Ok(self)
    }
}

impl FromStr for BitVector {
    type Err = BitVectorError;

    fn from_str(bitstring: &str) -> Result<Self> {
        BitVector::from_bitstring(bitstring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_value_with_size_allows_zero_width_zero() {
        assert!(BitVector::from_int_with_size(0, 0).is_ok_and(|v| v.is_empty()));
        assert!(BitVector::from_int_with_size(1, 0).is_err());
    }

    #[test]
    fn bytes_are_most_significant_bit_first() {
        let vector = BitVector::from_bytes(&[0x80, 0x01]);
        assert_eq!(vector.to_string(), "1000000000000001");
    }
}
