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

//! A single member font's SFNT directory: the 12-byte directory header and
//! its table directory entries, sorted by tag.
//!
//! Shared by the `ttc`/`otc` emitter (where a directory entry's offset
//! points into the shared table-body region) and the `dfont` emitter
//! (where each font is reserialized standalone, and offsets are local to
//! that font's own bytes).

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{error::ComposeError, tag::FontTag, FontDataWrite};

/// One entry in an SFNT table directory.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SfntDirectoryEntry {
    pub(crate) tag: FontTag,
    pub(crate) checksum: u32,
    pub(crate) offset: u32,
    pub(crate) length: u32,
}

impl SfntDirectoryEntry {
    /// Size of a single directory entry, in bytes.
    pub(crate) const SIZE: usize = 16;
}

impl FontDataWrite for SfntDirectoryEntry {
    type Error = ComposeError;

    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error> {
        self.tag.write(dest)?;
        dest.write_u32::<BigEndian>(self.checksum)?;
        dest.write_u32::<BigEndian>(self.offset)?;
        dest.write_u32::<BigEndian>(self.length)?;
        Ok(())
    }
}

/// A font's SFNT directory header plus its (tag-sorted) table entries.
#[derive(Debug)]
pub(crate) struct SfntDirectory {
    sfnt_version: u32,
    entries: Vec<SfntDirectoryEntry>,
}

impl SfntDirectory {
    /// Size, in bytes, of the 12-byte directory header.
    pub(crate) const HEADER_SIZE: usize = 12;

    /// Builds a directory over `entries`, sorting them by tag - OpenType
    /// requires directory entries to be emitted in tag order regardless of
    /// the order the source font stored them in.
    pub(crate) fn new(
        sfnt_version: u32,
        mut entries: Vec<SfntDirectoryEntry>,
    ) -> Self {
        entries.sort_by_key(|entry| entry.tag);
        Self {
            sfnt_version,
            entries,
        }
    }

    /// The table entries, in tag-sorted order.
    pub(crate) fn entries(&self) -> &[SfntDirectoryEntry] {
        &self.entries
    }

    /// Total size, in bytes, of this directory: the 12-byte header plus 16
    /// bytes per entry.
    pub(crate) fn size_in_bytes(&self) -> usize {
        Self::HEADER_SIZE + SfntDirectoryEntry::SIZE * self.entries.len()
    }

    fn search_fields(&self) -> (u16, u16, u16) {
        let table_count = self.entries.len() as u16;
        let entry_selector = if table_count == 0 {
            0
        } else {
            (u16::BITS - 1 - (table_count.leading_zeros())) as u16
        };
        let search_range = 2u16.saturating_pow(entry_selector as u32) * 16;
        let range_shift =
            table_count.wrapping_mul(16).wrapping_sub(search_range);
        (search_range, entry_selector, range_shift)
    }
}

impl FontDataWrite for SfntDirectory {
    type Error = ComposeError;

    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error> {
        let (search_range, entry_selector, range_shift) =
            self.search_fields();
        dest.write_u32::<BigEndian>(self.sfnt_version)?;
        dest.write_u16::<BigEndian>(self.entries.len() as u16)?;
        dest.write_u16::<BigEndian>(search_range)?;
        dest.write_u16::<BigEndian>(entry_selector)?;
        dest.write_u16::<BigEndian>(range_shift)?;
        for entry in &self.entries {
            entry.write(dest)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
