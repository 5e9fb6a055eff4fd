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

//! Tests for the collection header.

use super::*;

#[test]
fn test_write_is_twelve_bytes() {
    let header = CollectionHeader::new(3);
    let mut buf = Vec::new();
    header.write(&mut buf).unwrap();
    assert_eq!(buf.len(), CollectionHeader::SIZE);
}

#[test]
fn test_write_starts_with_ttcf_tag() {
    let header = CollectionHeader::new(2);
    let mut buf = Vec::new();
    header.write(&mut buf).unwrap();
    assert_eq!(&buf[0..4], b"ttcf");
}

#[test]
fn test_write_encodes_version_one_and_font_count() {
    let header = CollectionHeader::new(5);
    let mut buf = Vec::new();
    header.write(&mut buf).unwrap();
    assert_eq!(&buf[4..6], &[0x00, 0x01]);
    assert_eq!(&buf[6..8], &[0x00, 0x00]);
    assert_eq!(&buf[8..12], &[0x00, 0x00, 0x00, 0x05]);
}
