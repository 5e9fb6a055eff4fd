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

//! Options controlling how [`crate::compose::compose`] builds a collection.

/// Tuning knobs for [`crate::compose::compose`].
///
/// Most of these are reserved for future planners/emitters; the defaults
/// are the only behavior this crate currently implements.
#[derive(Clone, Debug)]
pub struct ComposeOptions {
    /// Byte alignment for table bodies and directories. Reserved: only `4`
    /// is currently accepted.
    pub alignment: u32,
    /// If true, the emitter recomputes every written table checksum from
    /// the emitted body region before returning, failing with
    /// [`crate::error::ComposeError::InvariantViolation`] on mismatch.
    pub verify_checksums: bool,
    /// Reserved for a future table-ordering optimization; does not affect
    /// output bytes under the current planner.
    pub optimize_table_order: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            alignment: 4,
            verify_checksums: true,
            optimize_table_order: true,
        }
    }
}
