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

//! The resource map: type list and reference list describing the `sfnt`
//! resources stored in the data region.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{dfont::header::ForkHeader, error::ComposeError, FontDataWrite};

/// Offset, from the start of the map, at which the type list begins.
const TYPE_LIST_OFFSET: u16 = 28;

/// Offset, from the start of the type list, at which the reference list
/// begins: 2 bytes for `numTypes - 1`, plus the 8-byte type entry.
const REFERENCE_LIST_OFFSET_FROM_TYPE_LIST: u16 = 10;

/// Size, in bytes, of one reference-list entry.
const REFERENCE_ENTRY_SIZE: u16 = 12;

/// The resource map that follows the data region: a verbatim copy of the
/// fork header, one type (`sfnt`), and one reference-list entry per member
/// font.
pub(crate) struct ResourceMap {
    fork_header: ForkHeader,
    /// Offset of each font's length-prefixed entry, measured from the
    /// start of the data region's *useful* data (i.e. after the 240-byte
    /// padding prelude).
    data_offsets: Vec<u32>,
}

impl ResourceMap {
    /// Size, in bytes, of the type list: `numTypes-1` (2) + one type entry
    /// (8) + one 12-byte reference-list entry per font.
    fn type_list_size(num_fonts: u16) -> u16 {
        2 + 8 + REFERENCE_ENTRY_SIZE * num_fonts
    }

    /// Total size, in bytes, of the resource map.
    pub(crate) fn size_in_bytes(num_fonts: u16) -> u32 {
        TYPE_LIST_OFFSET as u32 + Self::type_list_size(num_fonts) as u32
    }

    /// Builds the map for `data_offsets.len()` fonts, duplicating
    /// `fork_header` verbatim at the head of the map.
    pub(crate) fn new(fork_header: ForkHeader, data_offsets: Vec<u32>) -> Self {
        Self {
            fork_header,
            data_offsets,
        }
    }
}

impl FontDataWrite for ResourceMap {
    type Error = ComposeError;

    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error> {
        self.fork_header.write(dest)?;
        dest.write_all(&[0u8; 8])?; // reserved (next resource map handle, file ref num, attributes)

        let num_fonts = self.data_offsets.len() as u16;
        let type_list_size = Self::type_list_size(num_fonts);
        dest.write_u16::<BigEndian>(TYPE_LIST_OFFSET)?;
        dest.write_u16::<BigEndian>(TYPE_LIST_OFFSET + type_list_size)?;

        dest.write_u16::<BigEndian>(0)?; // numTypes - 1: exactly one type
        dest.write_all(b"sfnt")?;
        dest.write_u16::<BigEndian>(num_fonts.wrapping_sub(1))?;
        dest.write_u16::<BigEndian>(REFERENCE_LIST_OFFSET_FROM_TYPE_LIST)?;

        for (index, &data_offset) in self.data_offsets.iter().enumerate() {
            if data_offset > 0x00ff_ffff {
                return Err(ComposeError::OutputTooLarge {
                    offset: data_offset as u64,
                });
            }
            dest.write_u16::<BigEndian>(128 + index as u16)?;
            dest.write_i16::<BigEndian>(-1)?; // nameOffset: no name
            dest.write_u8(0)?; // attributes
            let be_bytes = data_offset.to_be_bytes();
            dest.write_all(&be_bytes[1..4])?; // 24-bit data offset
            dest.write_u32::<BigEndian>(0)?; // reserved (handle, in memory)
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
