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

//! The composer's entry point: pre-emit validation, then the
//! fingerprint/dedup/analyze/plan/emit pipeline described in the crate
//! docs.

use crate::{
    analyzer::{self, Report},
    collection::CollectionEmitter,
    dedup::DedupIndex,
    dfont::DfontEmitter,
    error::ComposeError,
    font::Font,
    format::CollectionFormat,
    layout::LayoutPlanner,
    magic::Magic,
    options::ComposeOptions,
    tag::FontTag,
};

/// A warning surfaced alongside a successful [`compose`] call. Unlike a
/// [`ComposeError`], a warning never prevents emission - it flags output
/// that is valid but unusual.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComposeWarning {
    /// An `otc` collection mixes TrueType- and CFF-flavored member fonts.
    /// Permitted by the format, but unusual enough to call out.
    MixedFlavorOtc,
}

impl std::fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeWarning::MixedFlavorOtc => write!(
                f,
                "otc collection mixes TrueType- and CFF-flavored member \
                 fonts"
            ),
        }
    }
}

/// The result of a successful [`compose`] call.
#[derive(Clone, Debug)]
pub struct EmitResult {
    /// The composed collection's bytes.
    pub bytes: Vec<u8>,
    /// Bytes saved relative to a hypothetical concatenation of every
    /// font's tables with no sharing.
    pub bytes_saved: u64,
    /// The pre-build sharing report this run computed before emission.
    pub report: Report,
    /// The format that was emitted.
    pub format: CollectionFormat,
    /// Non-fatal observations about the input, e.g. a mixed-flavor `otc`.
    pub warnings: Vec<ComposeWarning>,
}

/// The required tables every member font must carry: `head`, `hhea`,
/// `maxp` (a minimum viable font).
const REQUIRED_TABLES: [FontTag; 3] =
    [FontTag::HEAD, FontTag::HHEA, FontTag::MAXP];

/// Composes a `ttc`/`otc`/`dfont` collection from two or more fonts.
///
/// Validates the input (§6 pre-emit validation), builds the dedup index
/// and pre-build [`Report`], solves the layout (`ttc`/`otc` only), and
/// hands off to the format-appropriate emitter. Every component this
/// function calls is a pure function over its inputs; `compose` itself
/// performs no I/O and never panics on well-typed input.
#[tracing::instrument(skip(fonts, options))]
pub fn compose<F: Font>(
    fonts: &[F],
    format: CollectionFormat,
    options: &ComposeOptions,
) -> Result<EmitResult, ComposeError> {
    validate(fonts, format)?;
    let warnings = mixed_flavor_warnings(fonts, format);

    let index = DedupIndex::build(fonts);
    let report = analyzer::analyze(&index);

    let bytes = match format {
        CollectionFormat::Ttc | CollectionFormat::Otc => {
            let plan = LayoutPlanner::plan(fonts, &index)?;
            CollectionEmitter::emit(fonts, &index, &plan, options)?
        }
        CollectionFormat::Dfont => DfontEmitter::emit(fonts, options)?,
    };

    tracing::debug!(
        fonts = fonts.len(),
        format = %format,
        bytes = bytes.len(),
        bytes_saved = report.bytes_saved,
        "composed collection"
    );

    Ok(EmitResult {
        bytes,
        bytes_saved: report.bytes_saved,
        report,
        format,
        warnings,
    })
}

/// Pre-emit validation (spec §6): at least two fonts, every font carries
/// the minimum viable table set, and the requested format's flavor
/// constraint is satisfied.
fn validate<F: Font>(
    fonts: &[F],
    format: CollectionFormat,
) -> Result<(), ComposeError> {
    if fonts.len() < 2 {
        return Err(ComposeError::TooFewFonts(fonts.len()));
    }

    for (font_index, font) in fonts.iter().enumerate() {
        for &required in &REQUIRED_TABLES {
            if !font.table_names().contains(&required) {
                return Err(ComposeError::MissingRequiredTable {
                    font_index,
                    tag: required,
                });
            }
        }

        if format.requires_truetype_flavor() {
            let magic = Magic::try_from(font.sfnt_version())?;
            if !magic.is_truetype_flavored() {
                return Err(ComposeError::FormatIncompatible {
                    format,
                    font_index,
                    sfnt_version: font.sfnt_version(),
                });
            }
        }
    }

    Ok(())
}

/// Checks whether an `otc` request mixes TrueType- and CFF-flavored
/// fonts. Mixing is permitted by the format, so this is a warning, not a
/// validation failure; `ttc` already rejects CFF flavors outright, and
/// `dfont` draws no flavor distinction at all.
fn mixed_flavor_warnings<F: Font>(
    fonts: &[F],
    format: CollectionFormat,
) -> Vec<ComposeWarning> {
    if format != CollectionFormat::Otc {
        return Vec::new();
    }

    let mut saw_truetype = false;
    let mut saw_cff = false;
    for font in fonts {
        match Magic::try_from(font.sfnt_version()) {
            Ok(magic) if magic.is_truetype_flavored() => saw_truetype = true,
            Ok(_) => saw_cff = true,
            Err(_) => {}
        }
    }

    if saw_truetype && saw_cff {
        vec![ComposeWarning::MixedFlavorOtc]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "compose_test.rs"]
mod tests;
