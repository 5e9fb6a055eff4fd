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

//! Pre-build savings report.

use crate::{dedup::DedupIndex, digest::Digest, tag::FontTag};

/// The fonts that share one canonical table body.
#[derive(Clone, Debug, PartialEq)]
pub struct SharingGroup {
    /// The shared table's tag.
    pub tag: FontTag,
    /// The shared table's content digest.
    pub digest: Digest,
    /// The shared body's size in bytes.
    pub size: usize,
    /// Indices of every font referencing this body, in font-index order.
    pub font_indices: Vec<usize>,
}

/// A pre-build report describing the savings a [`DedupIndex`] makes
/// possible, independent of any layout or emit decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Number of fonts the index was built over.
    pub total_fonts: usize,
    /// One group per canonical table, in `(tag, digest)` bytewise order.
    pub groups: Vec<SharingGroup>,
    /// Bytes saved relative to a hypothetical concatenation of every font's
    /// tables with no sharing: for each canonical, its size multiplied by
    /// one less than its reference count.
    pub bytes_saved: u64,
    /// Percentage of table references, across all fonts, that point at a
    /// canonical shared by two or more fonts, to two decimal places.
    pub sharing_percentage: f64,
}

/// Produces a [`Report`] summarizing `index` without making any layout
/// decisions. May be computed and shown to a caller before the decision to
/// emit a collection is made.
pub fn analyze(index: &DedupIndex<'_>) -> Report {
    let mut groups = Vec::new();
    let mut bytes_saved: u64 = 0;

    for canonical in index.all_canonicals() {
        let refs = canonical.referring_fonts().len();
        bytes_saved += ((refs.saturating_sub(1)) as u64)
            * canonical.size() as u64;
        groups.push(SharingGroup {
            tag: canonical.tag(),
            digest: canonical.digest(),
            size: canonical.size(),
            font_indices: canonical.referring_fonts().to_vec(),
        });
    }

    let stats = index.stats();
    let sharing_percentage = if stats.total_refs == 0 {
        0.0
    } else {
        let raw = stats.shared_refs as f64 / stats.total_refs as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    };

    Report {
        total_fonts: index.font_count(),
        groups,
        bytes_saved,
        sharing_percentage,
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
