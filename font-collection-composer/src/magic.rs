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

//! Recognized `sfntVersion` signatures for a member font.

use super::error::ComposeError;

/// 32-bit `sfntVersion` signature a member font may declare.
///
/// The wider OpenType/TrueType ecosystem recognizes more magic numbers than
/// this (WOFF, WOFF2, PostScript Type 1...), but those name a different
/// container format entirely - this crate only composes fonts already
/// unpacked into table maps, so only the three signatures a `Font`
/// implementation may legally report are represented here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Magic {
    /// 'OTTO' - CFF-flavored OpenType.
    OpenType = 0x4f54544f,
    /// FIXED 1.0 - TrueType-flavored OpenType.
    TrueType = 0x00010000,
    /// 'true' - TrueType fonts for OS X / iOS.
    AppleTrue = 0x74727565,
}

impl Magic {
    /// Returns whether this signature denotes a TrueType-flavored font, as
    /// opposed to CFF-flavored OpenType.
    pub(crate) fn is_truetype_flavored(self) -> bool {
        matches!(self, Magic::TrueType | Magic::AppleTrue)
    }
}

/// Used to attempt conversion from u32 to a Magic value.
impl TryFrom<u32> for Magic {
    type Error = ComposeError;

    /// Try to match the given u32 value to a known sfnt version.
    fn try_from(v: u32) -> core::result::Result<Self, Self::Error> {
        match v {
            ot if ot == Magic::OpenType as u32 => Ok(Magic::OpenType),
            tt if tt == Magic::TrueType as u32 => Ok(Magic::TrueType),
            at if at == Magic::AppleTrue as u32 => Ok(Magic::AppleTrue),
            _unknown => Err(ComposeError::UnknownMagic(v)),
        }
    }
}

#[cfg(test)]
#[path = "magic_test.rs"]
mod tests;
