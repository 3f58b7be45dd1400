mod analysis;
mod bitvector;
mod convert;
mod logic;
mod permute;
mod shift;
mod source;

pub use bitvector::{BitIterator, BitVector};
pub use source::{Constructed, Source, SourceArgs};
