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

//! Errors related to composing font collections.

use super::{format::CollectionFormat, tag::FontTag};

/// Errors related to composing a font collection.
///
/// `InputInvalid` and `FormatIncompatible` (spec terms) are surfaced here as
/// [`ComposeError::TooFewFonts`], [`ComposeError::MissingRequiredTable`],
/// [`ComposeError::UnknownMagic`] and [`ComposeError::FormatIncompatible`];
/// these are recoverable - the caller can fix its input and retry.
/// [`ComposeError::InvariantViolation`] and [`ComposeError::OutputTooLarge`]
/// indicate a planner/emitter bug or an oversized collection, respectively.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Fewer than two fonts were supplied; a collection needs at least two
    /// members.
    #[error("at least two fonts are required to compose a collection, got {0}")]
    TooFewFonts(usize),
    /// One of the fonts is missing a table that every member font must
    /// carry.
    #[error("font {font_index} is missing the required '{tag}' table")]
    MissingRequiredTable {
        /// Index of the offending font within the input slice.
        font_index: usize,
        /// The missing table's tag.
        tag: FontTag,
    },
    /// A `ttc` collection was requested but one of the member fonts is not
    /// TrueType-flavored.
    #[error(
        "font {font_index} has sfnt version {sfnt_version:#010x}, which is \
         not compatible with the '{format}' format"
    )]
    FormatIncompatible {
        /// The format that was requested.
        format: CollectionFormat,
        /// Index of the offending font within the input slice.
        font_index: usize,
        /// The font's declared sfnt version.
        sfnt_version: u32,
    },
    /// An internal invariant was violated: the planner's offsets and the
    /// emitter's running position disagree, a canonical table lookup
    /// missed, or a written checksum failed reverification. This indicates
    /// a bug, not an input problem.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
    /// A computed file offset or length would not fit in the on-disk u32
    /// offset field.
    #[error(
        "computed offset {offset} exceeds the maximum representable u32 offset"
    )]
    OutputTooLarge {
        /// The offset that overflowed.
        offset: u64,
    },
    /// The font's `sfnt_version` value did not match any of the three
    /// signatures this crate recognizes for member fonts.
    #[error("unknown sfnt version: {0:#010x}")]
    UnknownMagic(u32),
    /// An error occurred while reading or writing in-memory buffers.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
