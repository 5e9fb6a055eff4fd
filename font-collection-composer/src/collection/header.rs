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

//! The 12-byte `ttcf` collection header and the offset table that follows
//! it.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{error::ComposeError, FontDataWrite};

/// `ttcf` tag, big-endian.
const TTCF_TAG: u32 = 0x7474_6366;

/// The 12-byte header that opens every TTC/OTC file.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CollectionHeader {
    major_version: u16,
    minor_version: u16,
    num_fonts: u32,
}

impl CollectionHeader {
    /// Size of the header, in bytes.
    pub(crate) const SIZE: usize = 12;

    /// Builds a version-1.0 header for `num_fonts` member fonts. Version
    /// 2.0 differs only by an optional trailing DSIG record, which this
    /// crate never emits.
    pub(crate) fn new(num_fonts: u32) -> Self {
        Self {
            major_version: 1,
            minor_version: 0,
            num_fonts,
        }
    }
}

impl FontDataWrite for CollectionHeader {
    type Error = ComposeError;

    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error> {
        dest.write_u32::<BigEndian>(TTCF_TAG)?;
        dest.write_u16::<BigEndian>(self.major_version)?;
        dest.write_u16::<BigEndian>(self.minor_version)?;
        dest.write_u32::<BigEndian>(self.num_fonts)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
