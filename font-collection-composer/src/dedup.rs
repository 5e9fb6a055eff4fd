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

//! Grouping of byte-identical table bodies across fonts.

use std::collections::{BTreeMap, HashMap};

use crate::{digest::Digest, font::Font, tag::FontTag};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The single stored copy of a byte-identical table body shared (or not)
/// across a collection's member fonts.
#[derive(Clone, Debug)]
pub struct CanonicalTable<'f> {
    tag: FontTag,
    digest: Digest,
    body: &'f [u8],
    referring_fonts: Vec<usize>,
}

impl<'f> CanonicalTable<'f> {
    /// This table's tag.
    pub fn tag(&self) -> FontTag {
        self.tag
    }

    /// This table's content digest.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// This table's body bytes.
    pub fn body(&self) -> &'f [u8] {
        self.body
    }

    /// The size, in bytes, of this table's body.
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// The indices, in ascending order of first reference, of every font
    /// whose table at [`CanonicalTable::tag`] hashes to this digest.
    pub fn referring_fonts(&self) -> &[usize] {
        &self.referring_fonts
    }

    /// Whether two or more fonts reference this table.
    pub fn shared(&self) -> bool {
        self.referring_fonts.len() >= 2
    }
}

/// An index of all canonical table bodies across a set of fonts, and each
/// font's reference into that index for each of its tables.
///
/// Built once per [`crate::compose::compose`] call via [`DedupIndex::build`].
#[derive(Debug, Default)]
pub struct DedupIndex<'f> {
    canonicals: BTreeMap<(FontTag, Digest), CanonicalTable<'f>>,
    font_refs: Vec<HashMap<FontTag, (FontTag, Digest)>>,
}

/// Summary statistics over a [`DedupIndex`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DedupStats {
    /// Total number of table references across all fonts.
    pub total_refs: usize,
    /// Number of distinct `(tag, digest)` canonical entries.
    pub distinct_canonicals: usize,
    /// Number of references that point at a shared canonical.
    pub shared_refs: usize,
    /// Number of references that point at a canonical referenced by only
    /// one font.
    pub unique_refs: usize,
}

impl<'f> DedupIndex<'f> {
    /// Builds an index of every table body across `fonts`.
    ///
    /// Fingerprinting may run in parallel across fonts when the `parallel`
    /// feature is enabled; the merge into canonical entries is always a
    /// single-threaded reduction performed in font-index order, so the
    /// resulting index - and in particular each canonical's
    /// `referring_fonts` order - is identical regardless of how
    /// fingerprinting was scheduled.
    pub fn build<F: Font>(fonts: &'f [F]) -> Self {
        let per_font_entries = Self::fingerprint_fonts(fonts);

        let mut canonicals = BTreeMap::new();
        let mut font_refs = Vec::with_capacity(fonts.len());

        for (font_index, entries) in per_font_entries.into_iter().enumerate()
        {
            let mut refs = HashMap::with_capacity(entries.len());
            for (tag, digest, body) in entries {
                let key = (tag, digest);
                refs.insert(tag, key);
                canonicals
                    .entry(key)
                    .or_insert_with(|| CanonicalTable {
                        tag,
                        digest,
                        body,
                        referring_fonts: Vec::new(),
                    })
                    .referring_fonts
                    .push(font_index);
            }
            font_refs.push(refs);
        }

        tracing::debug!(
            fonts = fonts.len(),
            canonicals = canonicals.len(),
            "built dedup index"
        );

        Self {
            canonicals,
            font_refs,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn fingerprint_fonts<F: Font>(
        fonts: &'f [F],
    ) -> Vec<Vec<(FontTag, Digest, &'f [u8])>> {
        fonts.iter().map(Self::fingerprint_one_font).collect()
    }

    #[cfg(feature = "parallel")]
    fn fingerprint_fonts<F: Font>(
        fonts: &'f [F],
    ) -> Vec<Vec<(FontTag, Digest, &'f [u8])>> {
        fonts.par_iter().map(Self::fingerprint_one_font).collect()
    }

    fn fingerprint_one_font<F: Font>(
        font: &'f F,
    ) -> Vec<(FontTag, Digest, &'f [u8])> {
        let mut fingerprinter = crate::digest::Fingerprinter::new();
        font.table_names()
            .iter()
            .map(|tag| {
                let body = font.table_data(tag);
                (*tag, fingerprinter.fingerprint(body), body)
            })
            .collect()
    }

    /// Looks up the canonical table a given font uses for `tag`.
    pub fn canonical_for(
        &self,
        font_index: usize,
        tag: &FontTag,
    ) -> Option<&CanonicalTable<'f>> {
        let key = self.font_refs.get(font_index)?.get(tag)?;
        self.canonicals.get(key)
    }

    /// All canonical tables, in deterministic `(tag, digest)` bytewise
    /// order.
    pub fn all_canonicals(&self) -> impl Iterator<Item = &CanonicalTable<'f>> {
        self.canonicals.values()
    }

    /// The number of fonts this index was built over.
    pub fn font_count(&self) -> usize {
        self.font_refs.len()
    }

    /// Summary statistics over this index.
    pub fn stats(&self) -> DedupStats {
        let total_refs =
            self.canonicals.values().map(|c| c.referring_fonts.len()).sum();
        let shared_refs = self
            .canonicals
            .values()
            .filter(|c| c.shared())
            .map(|c| c.referring_fonts.len())
            .sum();
        DedupStats {
            total_refs,
            distinct_canonicals: self.canonicals.len(),
            shared_refs,
            unique_refs: total_refs - shared_refs,
        }
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;
