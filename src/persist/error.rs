use std::io;
use std::num::ParseIntError;
use std::string::FromUtf8Error;

use derive_more::{Display, Error, From, IsVariant};

/// A collection holds more elements than the binary format's `i32` count field can record.
#[derive(Debug, Display, Error)]
#[display("collection with {len} elements does not fit the count field")]
pub struct OversizedCollection {
    pub len: usize,
}

/// A count or record length read from a file was negative.
#[derive(Debug, Display, Error)]
#[display("negative count {count} in file")]
pub struct NegativeCount {
    pub count: i32,
}

/// The single failure signal returned by every `save_*` / `load_*` call.
///
/// [`Io`](PersistError::Io) covers files that cannot be opened or created and reads or writes
/// that come up short (a truncated file surfaces as an [`UnexpectedEof`] read). The remaining
/// variants cover data that was read successfully but doesn't decode: counts that are negative
/// or unencodable, unparsable text counts, and string records that aren't UTF-8.
///
/// [`UnexpectedEof`]: io::ErrorKind::UnexpectedEof
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum PersistError {
    Io(io::Error),
    Oversized(OversizedCollection),
    NegativeCount(NegativeCount),
    Parse(ParseIntError),
    Utf8(FromUtf8Error),
}
