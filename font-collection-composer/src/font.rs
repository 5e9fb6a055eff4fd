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

//! The input contract a caller implements to hand fonts to the composer.

use crate::tag::FontTag;

/// A parsed font, as handed to [`crate::compose::compose`].
///
/// This crate never parses a font file itself - it only reads the tables a
/// caller already extracted. Implementors must uphold two invariants: tags
/// returned from [`Font::table_names`] are unique within one font, and
/// [`Font::table_data`] is infallible for any tag that `table_names`
/// reported.
pub trait Font {
    /// The four-byte `sfntVersion` signature this font declares.
    fn sfnt_version(&self) -> u32;

    /// The tags this font contains, in the order the source file stored
    /// them. This order is not significant to the bytes a `ttc`/`otc`
    /// directory emits (directory entries are always sorted by tag), but it
    /// does determine the size of the original, unsorted table count used
    /// in directory-size arithmetic.
    fn table_names(&self) -> &[FontTag];

    /// The raw body of one of this font's tables.
    ///
    /// # Panics
    /// May panic if `tag` was not reported by [`Font::table_names`].
    fn table_data(&self, tag: &FontTag) -> &[u8];
}

/// A simple in-memory [`Font`] implementation, useful for tests, for
/// previewing savings before a real parse, and as a reference
/// implementation callers can copy.
#[derive(Clone, Debug)]
pub struct MemoryFont {
    sfnt_version: u32,
    table_names: Vec<FontTag>,
    tables: Vec<(FontTag, Vec<u8>)>,
}

impl MemoryFont {
    /// Starts building a `MemoryFont` with the given `sfntVersion`.
    pub fn builder(sfnt_version: u32) -> MemoryFontBuilder {
        MemoryFontBuilder {
            sfnt_version,
            tables: Vec::new(),
        }
    }
}

impl Font for MemoryFont {
    fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    fn table_names(&self) -> &[FontTag] {
        &self.table_names
    }

    fn table_data(&self, tag: &FontTag) -> &[u8] {
        self.tables
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, data)| data.as_slice())
            .unwrap_or_else(|| panic!("{tag} was not reported by table_names"))
    }
}

/// Builder for [`MemoryFont`], following the insertion order of
/// [`MemoryFontBuilder::with_table`] calls as the font's reported table
/// order.
#[derive(Debug)]
pub struct MemoryFontBuilder {
    sfnt_version: u32,
    tables: Vec<(FontTag, Vec<u8>)>,
}

impl MemoryFontBuilder {
    /// Adds a table. Calling this twice with the same tag replaces the
    /// earlier body but keeps its original position in the table order.
    pub fn with_table(mut self, tag: FontTag, data: Vec<u8>) -> Self {
        if let Some(existing) = self.tables.iter_mut().find(|(t, _)| *t == tag)
        {
            existing.1 = data;
        } else {
            self.tables.push((tag, data));
        }
        self
    }

    /// Builds the immutable [`MemoryFont`].
    pub fn build(self) -> MemoryFont {
        let table_names = self.tables.iter().map(|(tag, _)| *tag).collect();
        MemoryFont {
            sfnt_version: self.sfnt_version,
            table_names,
            tables: self.tables,
        }
    }
}

#[cfg(test)]
#[path = "font_test.rs"]
mod tests;
