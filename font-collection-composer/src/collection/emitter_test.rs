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

//! Tests for the collection emitter.

use std::io::{Cursor, Read as _};

use byteorder::{BigEndian, ReadBytesExt};

use super::*;
use crate::{dedup::DedupIndex, font::MemoryFont, layout::LayoutPlanner};

fn tag(s: &[u8; 4]) -> FontTag {
    FontTag::new(*s)
}

struct ParsedFont {
    sfnt_version: u32,
    tables: Vec<(FontTag, Vec<u8>)>,
}

/// A minimal, test-only TTC reader: not a public API, only sufficient to
/// verify the parse round-trip property.
fn read_collection(bytes: &[u8]) -> Vec<ParsedFont> {
    assert_eq!(&bytes[0..4], b"ttcf");
    let mut cursor = Cursor::new(bytes);
    cursor.set_position(8);
    let num_fonts = cursor.read_u32::<BigEndian>().unwrap();

    let mut dir_offsets = Vec::new();
    for _ in 0..num_fonts {
        dir_offsets.push(cursor.read_u32::<BigEndian>().unwrap());
    }

    let mut fonts = Vec::new();
    for &dir_offset in &dir_offsets {
        cursor.set_position(dir_offset as u64);
        let sfnt_version = cursor.read_u32::<BigEndian>().unwrap();
        let num_tables = cursor.read_u16::<BigEndian>().unwrap();
        let _search_range = cursor.read_u16::<BigEndian>().unwrap();
        let _entry_selector = cursor.read_u16::<BigEndian>().unwrap();
        let _range_shift = cursor.read_u16::<BigEndian>().unwrap();

        let mut tables = Vec::new();
        for _ in 0..num_tables {
            let mut tag_bytes = [0u8; 4];
            cursor.read_exact(&mut tag_bytes).unwrap();
            let _checksum = cursor.read_u32::<BigEndian>().unwrap();
            let offset = cursor.read_u32::<BigEndian>().unwrap() as usize;
            let length = cursor.read_u32::<BigEndian>().unwrap() as usize;
            tables.push((
                FontTag::new(tag_bytes),
                bytes[offset..offset + length].to_vec(),
            ));
        }
        fonts.push(ParsedFont {
            sfnt_version,
            tables,
        });
    }
    fonts
}

fn two_fonts_sharing_name() -> Vec<MemoryFont> {
    let shared_name = vec![7u8; 40];
    let font_a = MemoryFont::builder(0x0001_0000)
        .with_table(tag(b"head"), vec![1u8; 54])
        .with_table(tag(b"name"), shared_name.clone())
        .with_table(tag(b"glyf"), vec![2u8; 120])
        .build();
    let font_b = MemoryFont::builder(0x0001_0000)
        .with_table(tag(b"head"), vec![3u8; 54])
        .with_table(tag(b"name"), shared_name)
        .with_table(tag(b"glyf"), vec![4u8; 95])
        .build();
    vec![font_a, font_b]
}

#[test]
fn test_parse_round_trip_recovers_every_table_byte_for_byte() {
    let fonts = two_fonts_sharing_name();
    let index = DedupIndex::build(&fonts);
    let plan = LayoutPlanner::plan(&fonts, &index).unwrap();
    let options = ComposeOptions::default();
    let bytes =
        CollectionEmitter::emit(&fonts, &index, &plan, &options).unwrap();

    let parsed = read_collection(&bytes);
    assert_eq!(parsed.len(), fonts.len());
    for (font_index, parsed_font) in parsed.iter().enumerate() {
        let original = &fonts[font_index];
        assert_eq!(parsed_font.sfnt_version, original.sfnt_version());
        assert_eq!(parsed_font.tables.len(), original.table_names().len());
        for (parsed_tag, parsed_body) in &parsed_font.tables {
            assert_eq!(parsed_body, original.table_data(parsed_tag));
        }
    }
}

#[test]
fn test_every_offset_in_output_is_four_byte_aligned() {
    let fonts = two_fonts_sharing_name();
    let index = DedupIndex::build(&fonts);
    let plan = LayoutPlanner::plan(&fonts, &index).unwrap();
    let options = ComposeOptions::default();
    let bytes =
        CollectionEmitter::emit(&fonts, &index, &plan, &options).unwrap();

    for font_directory_offset in &plan.font_directory_offset {
        assert_eq!(font_directory_offset % 4, 0);
    }
    assert_eq!(bytes.len() % 4, 0);
}

#[test]
fn test_shared_table_is_stored_once_in_the_output() {
    let fonts = two_fonts_sharing_name();
    let index = DedupIndex::build(&fonts);
    let plan = LayoutPlanner::plan(&fonts, &index).unwrap();
    let options = ComposeOptions::default();
    let bytes =
        CollectionEmitter::emit(&fonts, &index, &plan, &options).unwrap();
    let parsed = read_collection(&bytes);

    let name_a = parsed[0]
        .tables
        .iter()
        .find(|(t, _)| *t == tag(b"name"))
        .unwrap();
    let name_b = parsed[1]
        .tables
        .iter()
        .find(|(t, _)| *t == tag(b"name"))
        .unwrap();
    assert_eq!(name_a.1, name_b.1);

    let offset_a = index.canonical_for(0, &tag(b"name")).unwrap();
    let offset_b = index.canonical_for(1, &tag(b"name")).unwrap();
    assert_eq!(offset_a.digest(), offset_b.digest());
}

#[test]
fn test_directory_entry_checksum_matches_the_emitted_body() {
    let fonts = two_fonts_sharing_name();
    let index = DedupIndex::build(&fonts);
    let plan = LayoutPlanner::plan(&fonts, &index).unwrap();
    let options = ComposeOptions::default();
    let bytes =
        CollectionEmitter::emit(&fonts, &index, &plan, &options).unwrap();

    for canonical in index.all_canonicals() {
        let offset = plan
            .table_body_offset(canonical.tag(), canonical.digest())
            .unwrap() as usize;
        let body = &bytes[offset..offset + canonical.size()];
        assert_eq!(
            crate::checksum::ChecksumCodec::checksum(body),
            crate::checksum::ChecksumCodec::checksum(canonical.body())
        );
    }
}

#[test]
fn test_verify_checksums_true_still_succeeds_on_well_formed_input() {
    let fonts = two_fonts_sharing_name();
    let index = DedupIndex::build(&fonts);
    let plan = LayoutPlanner::plan(&fonts, &index).unwrap();
    let options = ComposeOptions {
        verify_checksums: true,
        ..ComposeOptions::default()
    };
    let result = CollectionEmitter::emit(&fonts, &index, &plan, &options);
    assert!(result.is_ok());
}
