//! # The export driver
//!
//! Walks a complete `phonebook.ib` file image and writes one vCard per
//! record. The file starts with a [`FILE_HEADER_LEN`] byte header that
//! carries no entry data and is skipped unparsed; the rest of the file
//! is a flat sequence of [`ENTRY_LEN`] byte records. A trailing block
//! shorter than a full record marks the end of the backup.

use std::io::{self, Write};

use displaydoc::Display;
use log::warn;
use thiserror::Error;

use crate::entry::{self, Entry, ENTRY_LEN};

/// The length of the file header before the first entry record
pub const FILE_HEADER_LEN: usize = 0x244;

/// An error while exporting a phonebook image
#[derive(Debug, Display, Error)]
pub enum ExportError {
    /// Failed to decode entry {index}: {source}
    Entry {
        /// The 0-based index of the record in the file
        index: usize,
        /// The decoding fault
        source: entry::Error,
    },
    /// Failed to write output: {0}
    Io(#[from] io::Error),
}

/// Export every entry of a phonebook image as vCards.
///
/// Returns the number of exported entries. The first record that fails
/// to decode aborts the whole export.
pub fn export<W: Write>(data: &[u8], out: &mut W) -> Result<usize, ExportError> {
    run(data, out, false)
}

/// Export a phonebook image, skipping records that fail to decode.
///
/// Best-effort variant of [`export`]: decoding faults are logged and
/// the record dropped instead of aborting the run. Output errors still
/// abort. Returns the number of entries that were exported.
pub fn export_lossy<W: Write>(data: &[u8], out: &mut W) -> Result<usize, ExportError> {
    run(data, out, true)
}

fn run<W: Write>(data: &[u8], out: &mut W, lossy: bool) -> Result<usize, ExportError> {
    // A file shorter than its own header holds no entries
    let records = data.get(FILE_HEADER_LEN..).unwrap_or(&[]);

    let mut exported = 0;
    let mut blocks = records.chunks_exact(ENTRY_LEN);
    for (index, block) in blocks.by_ref().enumerate() {
        match Entry::parse(block) {
            Ok(entry) => {
                write!(out, "{}", entry.vcard())?;
                exported += 1;
            }
            Err(source) if lossy => {
                warn!("Skipping entry {}: {}", index, source);
            }
            Err(source) => return Err(ExportError::Entry { index, source }),
        }
    }

    let trailing = blocks.remainder();
    if !trailing.is_empty() {
        warn!("Ignoring {} trailing bytes after the last entry", trailing.len());
    }
    Ok(exported)
}
