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

//! Content-addressed identity for table bodies.

use std::collections::HashMap;

use sha2::{Digest as _, Sha256};

/// A SHA-256 content digest of a table body.
///
/// Used solely as a collision-resistant identity key for deduplication;
/// this crate draws no security boundary around it.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Computes the digest of `bytes`.
    pub(crate) fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hasher.finalize().into())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Computes content digests for table bodies.
///
/// Digests are cached within the scope of a single `Fingerprinter`, keyed by
/// the identity (pointer and length) of the byte slice rather than its
/// content - a font that reports the same buffer for two different tags
/// (rare, but observed) is hashed only once. The cache does not outlive the
/// `Fingerprinter` and is never shared across `compose` calls.
#[derive(Default)]
pub(crate) struct Fingerprinter {
    cache: HashMap<(*const u8, usize), Digest>,
}

impl Fingerprinter {
    /// Creates an empty fingerprinter.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the digest of `bytes`, computing and caching it if this is
    /// the first time this exact buffer has been seen.
    pub(crate) fn fingerprint(&mut self, bytes: &[u8]) -> Digest {
        let key = (bytes.as_ptr(), bytes.len());
        *self.cache.entry(key).or_insert_with(|| Digest::of(bytes))
    }
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
