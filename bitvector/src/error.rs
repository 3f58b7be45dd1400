use thiserror::Error;

/// Failures reported by [`BitVector`](crate::BitVector) construction, indexing, arithmetic and I/O.
///
/// The variants fall into three groups: usage errors (conflicting or missing
/// construction arguments, a closed cursor), range errors (indices and slices
/// outside the vector) and domain errors (operands of the wrong size or shape).
/// A missing multiplicative inverse is not an error; those operations return `None`.
#[derive(Error, Debug)]
pub enum BitVectorError {
    #[error("construction arguments for more than one mode were supplied: {}", modes.join(", "))]
    ConflictingSources { modes: Vec<&'static str> },

    #[error("no construction mode was supplied")]
    MissingSource,

    #[error("a file source builds a cursor, not a vector")]
    CursorSource,

    #[error("the file cursor has already been closed")]
    CursorClosed,

    #[error("index {index} is out of range for a vector of {size} bits")]
    IndexOutOfRange { index: isize, size: usize },

    #[error("slice {start}..{stop} is out of range for a vector of {size} bits")]
    SliceOutOfRange { start: usize, stop: usize, size: usize },

    #[error("permutation index {index} is out of range for a vector of {size} bits")]
    PermutationIndex { index: usize, size: usize },

    #[error("permutation has {found} indices but the vector has {expected} bits")]
    PermutationLength { expected: usize, found: usize },

    #[error("operands have different sizes: {left} and {right} bits")]
    SizeMismatch { left: usize, right: usize },

    #[error("a vector of {size} bits cannot be divided into two equal halves")]
    OddSize { size: usize },

    #[error("block size {blocksize} is not a positive multiple of 8")]
    BlockSize { blocksize: usize },

    #[error("bit value must be 0 or 1, got {value}")]
    InvalidBit { value: u8 },

    #[error("invalid {expected} character {character:?} at position {position}")]
    InvalidDigit {
        character: char,
        position: usize,
        expected: &'static str,
    },

    #[error("value needs {required} bits but the requested size is {size}")]
    ValueTooWide { required: usize, size: usize },

    #[error("invalid modulus: {reason}")]
    InvalidModulus { reason: &'static str },

    #[error("invalid width {width}: {reason}")]
    InvalidWidth { width: usize, reason: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BitVectorError>;
