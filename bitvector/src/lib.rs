pub mod bit;
pub use bit::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, WORD_BIT_LEN, Word};

pub mod vec;
pub use vec::{BitIterator, BitVector, Constructed, Source, SourceArgs};

pub mod config;
pub use config::PrimalityConfig;

pub mod error;
pub use error::{BitVectorError, Result};

pub mod gf;
pub mod io;
pub use io::{BitCursor, FileCursor};

pub mod number;

#[cfg(feature = "serde")]
mod serde;
