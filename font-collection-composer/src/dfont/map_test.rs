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

//! Tests for the dfont resource map.

use super::*;
use crate::dfont::header::ForkHeader;

#[test]
fn test_size_in_bytes_matches_scenario_s4() {
    // map_len = 28 + 2 + 8 + 12*3 = 74, per the three-font dfont scenario.
    assert_eq!(ResourceMap::size_in_bytes(3), 74);
}

#[test]
fn test_write_length_matches_size_in_bytes() {
    let header = ForkHeader::new(1000, ResourceMap::size_in_bytes(3));
    let map = ResourceMap::new(header, vec![4, 2004, 4004]);
    let mut buf = Vec::new();
    map.write(&mut buf).unwrap();
    assert_eq!(buf.len() as u32, ResourceMap::size_in_bytes(3));
}

#[test]
fn test_type_list_has_exactly_one_type_and_tag_sfnt() {
    let header = ForkHeader::new(1000, ResourceMap::size_in_bytes(2));
    let map = ResourceMap::new(header, vec![4, 2004]);
    let mut buf = Vec::new();
    map.write(&mut buf).unwrap();

    // Fork header copy (16) + reserved (8) + type/name list offsets (4) = 28.
    let type_list_start = 28usize;
    assert_eq!(&buf[type_list_start..type_list_start + 2], &[0x00, 0x00]);
    assert_eq!(&buf[type_list_start + 2..type_list_start + 6], b"sfnt");
    // numResources - 1 == 1 for two fonts.
    assert_eq!(
        &buf[type_list_start + 6..type_list_start + 8],
        &[0x00, 0x01]
    );
}

#[test]
fn test_reference_list_resource_ids_start_at_128() {
    let header = ForkHeader::new(1000, ResourceMap::size_in_bytes(3));
    let map = ResourceMap::new(header, vec![4, 2004, 4004]);
    let mut buf = Vec::new();
    map.write(&mut buf).unwrap();

    let reference_list_start = 28 + 10;
    for (i, expected_id) in [128u16, 129, 130].into_iter().enumerate() {
        let entry_start = reference_list_start + i * 12;
        let id = u16::from_be_bytes([
            buf[entry_start],
            buf[entry_start + 1],
        ]);
        assert_eq!(id, expected_id);
    }
}

#[test]
fn test_reference_list_rejects_data_offset_over_24_bits() {
    let header = ForkHeader::new(1000, ResourceMap::size_in_bytes(1));
    let map = ResourceMap::new(header, vec![0x0100_0000]);
    let mut buf = Vec::new();
    assert!(map.write(&mut buf).is_err());
}
