//! # The phonebook entry record
//!
//! Every contact is stored in a record of exactly [`ENTRY_LEN`] bytes.
//! The fields sit at fixed offsets within the record; everything in
//! between is unknown and ignored. The only structural validation the
//! format offers is the two byte magic at the start of each record.

use std::char::{self, DecodeUtf16Error};

use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian};
use displaydoc::Display;
use thiserror::Error;

use crate::digits::{decode_digit, DigitError};

/// The length of a single entry record
pub const ENTRY_LEN: usize = 0x3ac;

/// The magic bytes at the start of every valid entry
pub const ENTRY_MAGIC: [u8; 2] = [0x94, 0x03];

/// Signed count of packed phone digit bytes
const PHONE_LEN_OFFSET: usize = 0x12a;
/// Flag byte for the phone number
const PHONE_FLAGS_OFFSET: usize = 0x12b;
/// Start of the packed phone digits
const PHONE_DIGITS_OFFSET: usize = 0x12c;
/// Count of UTF-16 code units in the name
const NAME_LEN_OFFSET: usize = 0x16c;
/// Start of the UTF-16LE encoded name
const NAME_OFFSET: usize = 0x16e;

bitflags! {
    /// The flag byte stored next to the phone number length
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PhoneFlags: u8 {
        /// The number carries an international `+` prefix
        const INTERNATIONAL = 0x10;
    }
}

/// An error while decoding an entry
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Invalid entry (header 0x{0:04X})
    InvalidEntry(u16),
    /// {0}
    Digit(#[from] DigitError),
    /// Name is not valid UTF-16: {0}
    InvalidName(#[from] DecodeUtf16Error),
    /// Entry block is {0} bytes, expected 0x3ac
    BlockTooShort(usize),
}

/// A single decoded phonebook entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The contact name
    pub name: String,
    /// The phone number, with a leading `+` where flagged
    pub phone: String,
}

impl Entry {
    /// Decode one entry from a full record block.
    ///
    /// The block has to be at least [`ENTRY_LEN`] bytes; every field
    /// offset is covered by that single length check, as even a
    /// maximal name (255 code units at offset `0x16e`) ends before
    /// `0x3ac`.
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        if data.len() < ENTRY_LEN {
            return Err(Error::BlockTooShort(data.len()));
        }
        if data[..2] != ENTRY_MAGIC {
            return Err(Error::InvalidEntry(u16::from_be_bytes([data[0], data[1]])));
        }
        let phone = decode_phone(data)?;
        let name = decode_name(data)?;
        Ok(Entry { name, phone })
    }
}

/// Decode the packed phone number of an entry.
///
/// Each byte holds two digits, low nibble first. The length byte is
/// signed; a non-positive length yields no digits at all.
fn decode_phone(data: &[u8]) -> Result<String, Error> {
    let phone_len = data[PHONE_LEN_OFFSET] as i8;
    let flags = PhoneFlags::from_bits_retain(data[PHONE_FLAGS_OFFSET]);

    let packed = if phone_len > 0 {
        &data[PHONE_DIGITS_OFFSET..][..phone_len as usize]
    } else {
        &[][..]
    };

    let mut phone = String::with_capacity(packed.len() * 2 + 1);
    if flags.contains(PhoneFlags::INTERNATIONAL) {
        phone.push('+');
    }
    for &byte in packed {
        if let Some(digit) = decode_digit(byte & 0x0f)? {
            phone.push(digit);
        }
        if let Some(digit) = decode_digit(byte >> 4)? {
            phone.push(digit);
        }
    }
    Ok(phone)
}

/// Decode the name of an entry from its UTF-16LE code units.
fn decode_name(data: &[u8]) -> Result<String, Error> {
    let unit_count = data[NAME_LEN_OFFSET] as usize;
    let raw = &data[NAME_OFFSET..][..unit_count * 2];
    let mut units = vec![0u16; unit_count];
    LittleEndian::read_u16_into(raw, &mut units);
    let name = char::decode_utf16(units).collect::<Result<String, _>>()?;
    Ok(name)
}
