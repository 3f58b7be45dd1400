//! Block-oriented reading of raw binary files and byte-packed writing.
//!
//! Files carry no header or length prefix: each byte holds eight bits, most
//! significant first, and the caller tracks the logical length.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, trace};

use crate::error::{BitVectorError, Result};
use crate::BitVector;

/// A cursor over a seekable byte source that hands out fixed-size blocks of bits.
///
/// The cursor holds no bits itself. After each full block it peeks one byte ahead
/// and seeks back, so [`more_to_read`](BitCursor::more_to_read) turns `false` as soon
/// as the source is exhausted.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use bitvector::BitCursor;
///
/// let mut cursor = BitCursor::new(Cursor::new(b"Hello".to_vec()));
/// let mut total = 0;
/// while cursor.more_to_read() {
///     total += cursor.read_bits_from_file(16)?.len();
/// }
/// assert_eq!(total, 40);
/// # Ok::<(), bitvector::BitVectorError>(())
/// ```
#[derive(Debug)]
pub struct BitCursor<R> {
    source: Option<R>,
    more_to_read: bool,
}

/// Cursor over a buffered file, as produced by [`Source::File`](crate::Source::File).
pub type FileCursor = BitCursor<BufReader<File>>;

impl FileCursor {
    /// Opens `path` for block reads.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Io`] when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<FileCursor> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("opened {} for block reads", path.display());
        Ok(BitCursor::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> BitCursor<R> {
    pub fn new(source: R) -> Self {
        BitCursor {
            source: Some(source),
            more_to_read: true,
        }
    }

    /// `false` once a read has reached the end of the source.
    #[must_use]
    pub fn more_to_read(&self) -> bool {
        self.more_to_read
    }

    /// Reads up to `blocksize` bits; the result is shorter at the end of the source
    /// and empty when nothing remains.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::CursorClosed`] after [`close`](BitCursor::close),
    /// [`BitVectorError::BlockSize`] when `blocksize` is not a positive multiple of 8, and
    /// [`BitVectorError::Io`] when the source fails.
    pub fn read_bits_from_file(&mut self, blocksize: usize) -> Result<BitVector> {
        let source = self.source.as_mut().ok_or(BitVectorError::CursorClosed)?;
        if blocksize == 0 || blocksize % 8 != 0 {
            return Err(BitVectorError::BlockSize { blocksize });
        }
        let wanted = blocksize / 8;
        let mut block = Vec::with_capacity(wanted);
        source.by_ref().take(wanted as u64).read_to_end(&mut block)?;
        trace!("read {} of {} requested bytes", block.len(), wanted);

        if block.len() < wanted {
            self.more_to_read = false;
        } else {
            let mut peeked = [0u8; 1];
            if source.read(&mut peeked)? == 1 {
                source.seek(SeekFrom::Current(-1))?;
            } else {
                debug!("look-ahead reached the end of the source");
                self.more_to_read = false;
            }
        }
        Ok(BitVector::from_bytes(&block))
    }

    /// Releases the source. Further reads fail with [`BitVectorError::CursorClosed`].
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::CursorClosed`] when the cursor was already closed.
    pub fn close(&mut self) -> Result<()> {
        match self.source.take() {
            Some(_) => {
                debug!("closed block-read cursor");
                self.more_to_read = false;
                Ok(())
            }
            None => Err(BitVectorError::CursorClosed),
        }
    }

    /// Returns the source, or `None` if the cursor was closed.
    pub fn into_inner(self) -> Option<R> {
        self.source
    }
}

impl BitVector {
    /// Writes the bits packed eight per byte, most significant bit first.
    ///
    /// Only the `len() / 8` complete bytes are written; pad the vector first to keep
    /// trailing bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Io`] when the writer fails.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let v: BitVector = "0100000100100001111".parse()?;
    /// let mut written = Vec::new();
    /// v.write_to_file(&mut written)?;
    /// assert_eq!(written, b"A!");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn write_to_file(&self, destination: &mut impl Write) -> Result<()> {
        destination.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Writes the `'0'`/`'1'` text form; [`BitVector::from_reader`] reads it back.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Io`] when the writer fails.
    pub fn write_bits_to_writer(&self, destination: &mut impl Write) -> Result<()> {
        write!(destination, "{self}")?;
        Ok(())
    }
}
