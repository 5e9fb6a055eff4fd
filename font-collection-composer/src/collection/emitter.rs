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

//! Writes the `ttcf` header, offset table, per-font directories, and table
//! bodies that make up a `ttc`/`otc` collection.

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    checksum::ChecksumCodec,
    collection::{
        directory::{SfntDirectory, SfntDirectoryEntry},
        header::CollectionHeader,
    },
    dedup::DedupIndex,
    error::ComposeError,
    font::Font,
    layout::LayoutPlan,
    options::ComposeOptions,
    utils::pad_to,
    FontDataWrite,
};

/// Emits a `ttc`/`otc` collection from a [`LayoutPlan`] and [`DedupIndex`].
pub struct CollectionEmitter;

impl CollectionEmitter {
    /// Writes the complete collection and returns its bytes.
    pub(crate) fn emit<F: Font>(
        fonts: &[F],
        index: &DedupIndex<'_>,
        plan: &LayoutPlan,
        options: &ComposeOptions,
    ) -> Result<Vec<u8>, ComposeError> {
        let mut out = Vec::with_capacity(plan.total_len as usize);

        CollectionHeader::new(fonts.len() as u32).write(&mut out)?;
        for &offset in &plan.font_directory_offset {
            out.write_u32::<BigEndian>(offset)?;
        }

        for (font_index, font) in fonts.iter().enumerate() {
            pad_to(&mut out, plan.font_directory_offset[font_index] as usize)?;

            let mut entries = Vec::with_capacity(font.table_names().len());
            for tag in font.table_names() {
                let canonical =
                    index.canonical_for(font_index, tag).ok_or_else(|| {
                        ComposeError::InvariantViolation(format!(
                            "font {font_index} table {tag} missing from \
                             dedup index"
                        ))
                    })?;
                let offset = plan
                    .table_body_offset(canonical.tag(), canonical.digest())
                    .ok_or_else(|| {
                        ComposeError::InvariantViolation(format!(
                            "no planned offset for font {font_index} table \
                             {tag}"
                        ))
                    })?;
                entries.push(SfntDirectoryEntry {
                    tag: *tag,
                    checksum: ChecksumCodec::checksum(canonical.body()),
                    offset,
                    length: canonical.size() as u32,
                });
            }

            SfntDirectory::new(font.sfnt_version(), entries).write(&mut out)?;
        }

        let mut canonicals: Vec<_> = index.all_canonicals().collect();
        canonicals.sort_by_key(|canonical| {
            plan.table_body_offset(canonical.tag(), canonical.digest())
        });
        for canonical in &canonicals {
            let offset = plan
                .table_body_offset(canonical.tag(), canonical.digest())
                .ok_or_else(|| {
                    ComposeError::InvariantViolation(format!(
                        "no planned offset for canonical {}",
                        canonical.tag()
                    ))
                })?;
            pad_to(&mut out, offset as usize)?;
            out.extend_from_slice(canonical.body());
        }

        if options.verify_checksums {
            Self::verify_checksums(index, plan, &out)?;
        }

        Ok(out)
    }

    fn verify_checksums(
        index: &DedupIndex<'_>,
        plan: &LayoutPlan,
        out: &[u8],
    ) -> Result<(), ComposeError> {
        for canonical in index.all_canonicals() {
            let offset = plan
                .table_body_offset(canonical.tag(), canonical.digest())
                .ok_or_else(|| {
                    ComposeError::InvariantViolation(format!(
                        "no planned offset for canonical {}",
                        canonical.tag()
                    ))
                })? as usize;
            let length = canonical.size();
            let written = out.get(offset..offset + length).ok_or_else(|| {
                ComposeError::InvariantViolation(format!(
                    "emitted output too short for canonical {} at offset \
                     {offset}",
                    canonical.tag()
                ))
            })?;
            let expected = ChecksumCodec::checksum(canonical.body());
            let actual = ChecksumCodec::checksum(written);
            if actual != expected {
                return Err(ComposeError::InvariantViolation(format!(
                    "checksum mismatch for {} at offset {offset}: expected \
                     {expected:#010x}, got {actual:#010x}",
                    canonical.tag()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "emitter_test.rs"]
mod tests;
