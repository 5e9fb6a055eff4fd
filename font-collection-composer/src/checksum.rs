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

//! The OpenType table checksum.

use crate::utils;

/// Computes the OpenType table checksum: the table body, zero-padded on the
/// right to a multiple of four bytes, interpreted as big-endian `u32`
/// words and summed modulo `2^32`.
///
/// Padding bytes only affect the computation, never the stored body length.
pub(crate) struct ChecksumCodec;

impl ChecksumCodec {
    /// Computes the checksum of `body`.
    pub(crate) fn checksum(body: &[u8]) -> u32 {
        utils::checksum(body).0
    }
}

#[cfg(test)]
#[path = "checksum_test.rs"]
mod tests;
