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

//! Tests for digest

use super::*;

#[test]
fn test_same_content_same_digest() {
    let a = Digest::of(b"hello world");
    let b = Digest::of(b"hello world");
    assert_eq!(a, b);
}

#[test]
fn test_different_content_different_digest() {
    let a = Digest::of(b"hello world");
    let b = Digest::of(b"hello there");
    assert_ne!(a, b);
}

#[test]
fn test_debug_is_lowercase_hex() {
    let digest = Digest::of(b"");
    let text = format!("{digest:?}");
    assert!(text.starts_with("Digest("));
    assert!(text.ends_with(')'));
    assert_eq!(text.len(), "Digest(".len() + 64 + 1);
}

#[test]
fn test_fingerprinter_caches_by_buffer_identity() {
    let mut fp = Fingerprinter::new();
    let buf = vec![1u8, 2, 3];
    let first = fp.fingerprint(&buf);
    let second = fp.fingerprint(&buf);
    assert_eq!(first, second);
    assert_eq!(fp.cache.len(), 1);
}

#[test]
fn test_fingerprinter_distinguishes_distinct_buffers_same_content() {
    let mut fp = Fingerprinter::new();
    let buf_a = vec![1u8, 2, 3];
    let buf_b = vec![1u8, 2, 3];
    fp.fingerprint(&buf_a);
    fp.fingerprint(&buf_b);
    assert_eq!(fp.cache.len(), 2);
}

#[test]
fn test_fingerprint_matches_direct_digest() {
    let mut fp = Fingerprinter::new();
    let buf = vec![9u8, 9, 9];
    assert_eq!(fp.fingerprint(&buf), Digest::of(&buf));
}
