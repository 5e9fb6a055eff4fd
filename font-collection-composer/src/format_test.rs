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

//! Tests for the collection format enum.

use super::*;

#[test]
fn test_display() {
    assert_eq!(CollectionFormat::Ttc.to_string(), "ttc");
    assert_eq!(CollectionFormat::Otc.to_string(), "otc");
    assert_eq!(CollectionFormat::Dfont.to_string(), "dfont");
}

#[test]
fn test_requires_truetype_flavor() {
    assert!(CollectionFormat::Ttc.requires_truetype_flavor());
    assert!(!CollectionFormat::Otc.requires_truetype_flavor());
    assert!(!CollectionFormat::Dfont.requires_truetype_flavor());
}
