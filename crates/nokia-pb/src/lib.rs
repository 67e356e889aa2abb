#![warn(missing_docs)]
//! # The Nokia `phonebook.ib` format
//!
//! This crate is an implementation of the `phonebook.ib` backup file
//! written by legacy Nokia feature phones. The file holds the contact
//! list as a flat sequence of fixed-size binary records after a short
//! file header.
//!
//! At the moment, only reading the files is supported.

pub mod digits;
pub mod entry;
pub mod export;
pub mod vcard;

pub use entry::Entry;
