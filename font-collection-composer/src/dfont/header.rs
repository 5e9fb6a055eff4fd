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

//! The 16-byte data-fork header, and its copy inside the resource map.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{error::ComposeError, FontDataWrite};

/// Conventional offset, from the start of the file, at which the
/// "useful" data begins - Apple tooling expects 256 bytes of leading
/// padding in the data region.
pub(crate) const DATA_OFFSET: u32 = 0x100;

/// The 16-byte fork header. The same bytes are duplicated verbatim at the
/// start of the resource map.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ForkHeader {
    data_offset: u32,
    map_offset: u32,
    data_len: u32,
    map_len: u32,
}

impl ForkHeader {
    /// Size, in bytes, of the fork header.
    pub(crate) const SIZE: usize = 16;

    /// Builds a fork header. `data_len` is the full length of the data
    /// region, including its 240-byte padding prelude; `map_offset` is
    /// `16 + data_len`, and `map_len` the size of the resource map that
    /// follows.
    pub(crate) fn new(data_len: u32, map_len: u32) -> Self {
        Self {
            data_offset: DATA_OFFSET,
            map_offset: Self::SIZE as u32 + data_len,
            data_len,
            map_len,
        }
    }
}

impl FontDataWrite for ForkHeader {
    type Error = ComposeError;

    fn write<TDest: Write + ?Sized>(
        &self,
        dest: &mut TDest,
    ) -> Result<(), Self::Error> {
        dest.write_u32::<BigEndian>(self.data_offset)?;
        dest.write_u32::<BigEndian>(self.map_offset)?;
        dest.write_u32::<BigEndian>(self.data_len)?;
        dest.write_u32::<BigEndian>(self.map_len)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
