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

//! Output container format for a composed collection.

/// The container format that [`crate::compose::compose`] should emit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CollectionFormat {
    /// OpenType font collection, TrueType-flavored member fonts only.
    Ttc,
    /// OpenType font collection, any flavor of member font is accepted.
    Otc,
    /// Apple data-fork resource container.
    Dfont,
}

impl CollectionFormat {
    /// Returns whether this format requires every member font to be
    /// TrueType-flavored (as opposed to CFF-flavored OpenType).
    pub(crate) fn requires_truetype_flavor(&self) -> bool {
        matches!(self, CollectionFormat::Ttc)
    }
}

impl std::fmt::Display for CollectionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CollectionFormat::Ttc => "ttc",
            CollectionFormat::Otc => "otc",
            CollectionFormat::Dfont => "dfont",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
