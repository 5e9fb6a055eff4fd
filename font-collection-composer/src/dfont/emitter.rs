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

//! Wraps whole, reserialized SFNT fonts as resources in an Apple
//! data-fork container.
//!
//! Unlike the `ttc`/`otc` emitter, `dfont` stores whole fonts, not shared
//! tables: each member font is reserialized standalone from its own table
//! map, with offsets local to that font's own bytes.

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    checksum::ChecksumCodec,
    collection::directory::{SfntDirectory, SfntDirectoryEntry},
    dfont::{header::ForkHeader, map::ResourceMap},
    error::ComposeError,
    font::Font,
    options::ComposeOptions,
    tag::FontTag,
    utils::{align_to_four, pad_to},
    FontDataWrite,
};

/// Leading zero padding in the data region, so that useful data
/// conventionally begins at file offset `0x100`.
const DATA_REGION_PRELUDE: usize = 240;

/// Emits an Apple `dfont` container from a set of member fonts.
pub struct DfontEmitter;

impl DfontEmitter {
    /// Writes the complete `dfont` container and returns its bytes.
    pub(crate) fn emit<F: Font>(
        fonts: &[F],
        _options: &ComposeOptions,
    ) -> Result<Vec<u8>, ComposeError> {
        let mut data_region = vec![0u8; DATA_REGION_PRELUDE];
        let mut data_offsets = Vec::with_capacity(fonts.len());

        for font in fonts {
            let serialized = Self::serialize_font(font)?;
            data_offsets
                .push((data_region.len() - DATA_REGION_PRELUDE) as u32);
            data_region.write_u32::<BigEndian>(serialized.len() as u32)?;
            data_region.extend_from_slice(&serialized);
        }

        let data_len = data_region.len() as u32;
        let map_len = ResourceMap::size_in_bytes(fonts.len() as u16);
        let fork_header = ForkHeader::new(data_len, map_len);

        let mut out = Vec::with_capacity(
            ForkHeader::SIZE + data_region.len() + map_len as usize,
        );
        fork_header.write(&mut out)?;
        out.extend_from_slice(&data_region);
        ResourceMap::new(fork_header, data_offsets).write(&mut out)?;
        Ok(out)
    }

    /// Serializes one font as a standalone SFNT: a directory header, its
    /// (tag-sorted) directory entries, and the table bodies they point at.
    fn serialize_font<F: Font>(font: &F) -> Result<Vec<u8>, ComposeError> {
        let mut tags: Vec<FontTag> = font.table_names().to_vec();
        tags.sort();

        let directory_size = (SfntDirectory::HEADER_SIZE
            + SfntDirectoryEntry::SIZE * tags.len())
            as u32;
        let mut cursor = align_to_four(directory_size);

        let mut entries = Vec::with_capacity(tags.len());
        for tag in &tags {
            let body = font.table_data(tag);
            let length = body.len() as u32;
            entries.push(SfntDirectoryEntry {
                tag: *tag,
                checksum: ChecksumCodec::checksum(body),
                offset: cursor,
                length,
            });
            cursor = align_to_four(cursor + length);
        }

        let directory = SfntDirectory::new(font.sfnt_version(), entries);
        let mut out = Vec::with_capacity(cursor as usize);
        directory.write(&mut out)?;
        pad_to(&mut out, align_to_four(directory_size) as usize)?;
        for entry in directory.entries() {
            pad_to(&mut out, entry.offset as usize)?;
            out.extend_from_slice(font.table_data(&entry.tag));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod tests;
