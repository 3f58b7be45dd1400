#[macro_use]
pub mod bitwise;

pub use bitwise::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};
pub use word::{SetBits, WORD_BIT_LEN, Word};

pub mod slice;
pub mod truncated;
pub mod word;
