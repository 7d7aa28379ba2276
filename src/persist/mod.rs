//! The file format idiom shared by every container's `save_*` / `load_*` pair.
//!
//! Binary files are positional with no header: a little-endian `i32` element count, then the
//! elements in the container's natural order. String elements are written as an `i32` byte
//! length followed by raw UTF-8 bytes; the tree writes raw `i32` keys. Text files carry a count
//! line followed by one value per line.
//!
//! These helpers deal only in readers and writers; each container opens its own file and decides
//! its own element order.

mod error;
mod tests;

pub use error::*;

use std::io::{BufRead, Read, Write};

/// Upper bound on capacity reserved ahead of a counted read. Counts come from the file, so they
/// are not trusted for allocation sizing; anything larger grows as it fills.
pub(crate) const PREALLOC_LIMIT: usize = 4096;

/// Writes a single `i32` in little-endian byte order.
pub(crate) fn write_i32<W: Write>(writer: &mut W, value: i32) -> Result<(), PersistError> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Reads a single little-endian `i32`, failing with an I/O error if the reader ends early.
pub(crate) fn read_i32<R: Read>(reader: &mut R) -> Result<i32, PersistError> {
    let mut buf = [0_u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Writes an element count as an `i32`, rejecting collections too large to record.
pub(crate) fn write_count<W: Write>(writer: &mut W, count: usize) -> Result<(), PersistError> {
    let encoded = i32::try_from(count).map_err(|_| OversizedCollection { len: count })?;
    write_i32(writer, encoded)
}

/// Reads an element count or record length, rejecting negative values.
pub(crate) fn read_count<R: Read>(reader: &mut R) -> Result<usize, PersistError> {
    let count = read_i32(reader)?;
    usize::try_from(count).map_err(|_| NegativeCount { count }.into())
}

/// Writes a string record: an `i32` byte length followed by the raw bytes.
pub(crate) fn write_record<W: Write>(writer: &mut W, value: &str) -> Result<(), PersistError> {
    write_count(writer, value.len())?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Reads one length-prefixed string record.
pub(crate) fn read_record<R: Read>(reader: &mut R) -> Result<String, PersistError> {
    let len = read_count(reader)?;
    let mut buf = vec![0_u8; len];
    reader.read_exact(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes a text count line.
pub(crate) fn write_count_line<W: Write>(writer: &mut W, count: usize) -> Result<(), PersistError> {
    writeln!(writer, "{count}")?;
    Ok(())
}

/// Reads and parses a text count line. An empty or non-numeric line is malformed data.
pub(crate) fn read_count_line<R: BufRead>(reader: &mut R) -> Result<usize, PersistError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end().parse::<usize>()?)
}

/// Writes one text value line.
pub(crate) fn write_line<W: Write>(writer: &mut W, value: &str) -> Result<(), PersistError> {
    writeln!(writer, "{value}")?;
    Ok(())
}
