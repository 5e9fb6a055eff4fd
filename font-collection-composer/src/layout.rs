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

//! Deterministic, byte-exact layout solving for a TTC/OTC collection.

use std::collections::BTreeMap;

use crate::{
    dedup::DedupIndex, digest::Digest, error::ComposeError, font::Font,
    tag::FontTag,
};

/// The complete byte-exact layout decision for a collection: where every
/// font's directory begins, and where every canonical table body is
/// written.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Always 12: the offset table immediately follows the 12-byte `ttcf`
    /// header.
    pub offset_table_offset: u32,
    /// `font_directory_offset[i]` is where font `i`'s table directory
    /// begins.
    pub font_directory_offset: Vec<u32>,
    table_body_offset: BTreeMap<(FontTag, Digest), u32>,
    /// Total length, in bytes, of the planned output.
    pub total_len: u32,
}

impl LayoutPlan {
    /// The planned offset for a canonical table's body, if one was planned
    /// for this exact `(tag, digest)`.
    pub fn table_body_offset(&self, tag: FontTag, digest: Digest) -> Option<u32> {
        self.table_body_offset.get(&(tag, digest)).copied()
    }
}

/// Solves a [`LayoutPlan`] for a set of fonts and their [`DedupIndex`].
pub(crate) struct LayoutPlanner;

impl LayoutPlanner {
    /// Runs the two-pass offset solver described in the module docs:
    /// header and offset table, then each font's directory, then every
    /// canonical table body - shared canonicals first, then unique ones,
    /// each group ordered by `(tag, digest)` bytewise.
    pub(crate) fn plan<F: Font>(
        fonts: &[F],
        index: &DedupIndex<'_>,
    ) -> Result<LayoutPlan, ComposeError> {
        let num_fonts = fonts.len() as u64;
        let mut cursor: u64 = 12 + 4 * num_fonts;

        let mut font_directory_offset = Vec::with_capacity(fonts.len());
        for font in fonts {
            font_directory_offset.push(to_u32(cursor)?);
            let table_count = font.table_names().len() as u64;
            cursor = align4(cursor + 12 + 16 * table_count);
        }
        let body_region_start = cursor;

        let (shared, unique): (Vec<_>, Vec<_>) =
            index.all_canonicals().partition(|c| c.shared());

        let mut table_body_offset = BTreeMap::new();
        for canonical in shared.into_iter().chain(unique) {
            let offset = to_u32(cursor)?;
            table_body_offset.insert(
                (canonical.tag(), canonical.digest()),
                offset,
            );
            cursor = align4(cursor + canonical.size() as u64);
        }

        tracing::trace!(
            fonts = fonts.len(),
            body_region_start,
            total_len = cursor,
            "solved collection layout"
        );

        Ok(LayoutPlan {
            offset_table_offset: 12,
            font_directory_offset,
            table_body_offset,
            total_len: to_u32(cursor)?,
        })
    }
}

fn align4(offset: u64) -> u64 {
    (offset + 3) & !3
}

fn to_u32(offset: u64) -> Result<u32, ComposeError> {
    u32::try_from(offset).map_err(|_| ComposeError::OutputTooLarge { offset })
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
