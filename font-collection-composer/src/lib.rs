// Copyright 2024-2025 Monotype Imaging Inc.
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! SFNT collection composer.
//!
//! Given two or more parsed fonts, finds the table bodies that are
//! byte-identical across them and emits a single font collection file in
//! which each distinct table body is stored once, while every member font
//! keeps its own table directory pointing at the shared (or unique) bodies.
//! Two container formats are supported: the OpenType `ttc`/`otc` font
//! collection, and Apple's data-fork `dfont` resource layout.
//!
//! This crate does not parse font files from disk - callers implement
//! [`font::Font`] over whatever font representation they already have. It
//! also does not re-encode or transform table bodies: every table is an
//! opaque byte sequence whose content determines its identity.
//!
//! # Example
//! ```
//! use font_collection_composer::compose::compose;
//! use font_collection_composer::font::MemoryFont;
//! use font_collection_composer::format::CollectionFormat;
//! use font_collection_composer::options::ComposeOptions;
//! use font_collection_composer::tag::FontTag;
//!
//! fn main() -> Result<(), font_collection_composer::error::ComposeError> {
//!     let shared_name = vec![0u8; 32];
//!     let font_a = MemoryFont::builder(0x0001_0000)
//!         .with_table(FontTag::new(*b"head"), vec![0u8; 54])
//!         .with_table(FontTag::new(*b"hhea"), vec![0u8; 36])
//!         .with_table(FontTag::new(*b"maxp"), vec![0u8; 32])
//!         .with_table(FontTag::new(*b"name"), shared_name.clone())
//!         .build();
//!     let font_b = MemoryFont::builder(0x0001_0000)
//!         .with_table(FontTag::new(*b"head"), vec![1u8; 54])
//!         .with_table(FontTag::new(*b"hhea"), vec![1u8; 36])
//!         .with_table(FontTag::new(*b"maxp"), vec![1u8; 32])
//!         .with_table(FontTag::new(*b"name"), shared_name)
//!         .build();
//!
//!     let result = compose(
//!         &[font_a, font_b],
//!         CollectionFormat::Ttc,
//!         &ComposeOptions::default(),
//!     )?;
//!     assert!(result.bytes_saved > 0);
//!     Ok(())
//! }
//! ```

use std::io::{Read, Seek, Write};

pub mod analyzer;
pub mod checksum;
pub mod collection;
pub mod compose;
pub mod dedup;
pub mod dfont;
pub mod digest;
pub mod error;
pub mod font;
pub mod format;
pub mod layout;
pub(crate) mod magic;
pub mod options;
pub mod tag;
pub(crate) mod utils;

/// Trait for reading a binary structure from a reader.
pub(crate) trait FontDataRead
where
    Self: Sized,
{
    /// The error type for reading the data.
    type Error;
    /// Reads the structure from a reader.
    fn from_reader<T: Read + Seek + ?Sized>(
        reader: &mut T,
    ) -> Result<Self, Self::Error>;
}

/// Trait for writing a binary structure to a writer.
pub(crate) trait FontDataWrite {
    /// The error type for writing the data.
    type Error;
    /// Writes the structure to a writer.
    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error>;
}
