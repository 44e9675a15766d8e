// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use linebender_resource_handle::Blob;

/// Units per em of every [`TestFace`]. At 16px one font unit is exactly 1/64 px.
pub(crate) const UNITS_PER_EM: u16 = 1024;

/// A TrueType table directory with no tables: a valid font without any glyph coverage or
/// metrics.
pub(crate) fn tableless_font() -> Blob<u8> {
    let data: Vec<u8> = vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    Blob::new(Arc::new(data))
}

/// Builds a minimal TrueType font with a character map and horizontal metrics.
///
/// Glyph 0 is `.notdef`; every added character gets the next glyph id. Only `cmap`, `head`,
/// `hhea`, `hmtx` and `maxp` are written, which is all coverage and advance lookups read.
pub(crate) struct TestFace {
    notdef_advance: u16,
    glyphs: Vec<(char, u16)>,
}

impl TestFace {
    pub(crate) fn new() -> Self {
        Self {
            notdef_advance: 0,
            glyphs: Vec::new(),
        }
    }

    pub(crate) fn notdef_advance(mut self, advance: u16) -> Self {
        self.notdef_advance = advance;
        self
    }

    /// Maps every character of `chars` to its own glyph, `advance` font units wide.
    pub(crate) fn glyphs(mut self, chars: &str, advance: u16) -> Self {
        self.glyphs.extend(chars.chars().map(|ch| (ch, advance)));
        self
    }

    pub(crate) fn build(&self) -> Blob<u8> {
        // Table records are looked up by binary search, so tags must stay sorted.
        let tables = [
            (*b"cmap", self.cmap()),
            (*b"head", head()),
            (*b"hhea", self.hhea()),
            (*b"hmtx", self.hmtx()),
            (*b"maxp", self.maxp()),
        ];

        let mut data = Vec::new();
        push_u32(&mut data, 0x0001_0000);
        push_u16(&mut data, tables.len() as u16);
        // searchRange, entrySelector and rangeShift are not read.
        data.extend_from_slice(&[0; 6]);

        let mut offset = 12 + 16 * tables.len();
        for (tag, table) in &tables {
            data.extend_from_slice(tag);
            push_u32(&mut data, 0);
            push_u32(&mut data, offset as u32);
            push_u32(&mut data, table.len() as u32);
            offset += padded_len(table);
        }
        for (_, table) in &tables {
            data.extend_from_slice(table);
            data.resize(data.len() + padded_len(table) - table.len(), 0);
        }
        Blob::new(Arc::new(data))
    }

    fn glyph_count(&self) -> u16 {
        self.glyphs.len() as u16 + 1
    }

    fn cmap(&self) -> Vec<u8> {
        let mut groups: Vec<(u32, u32)> = self
            .glyphs
            .iter()
            .enumerate()
            .map(|(ix, (ch, _))| (u32::from(*ch), ix as u32 + 1))
            .collect();
        groups.sort_unstable();

        let mut table = Vec::new();
        push_u16(&mut table, 0);
        push_u16(&mut table, 1);
        // Windows, Unicode full repertoire, subtable right after this record.
        push_u16(&mut table, 3);
        push_u16(&mut table, 10);
        push_u32(&mut table, 12);

        push_u16(&mut table, 12);
        push_u16(&mut table, 0);
        push_u32(&mut table, 16 + 12 * groups.len() as u32);
        push_u32(&mut table, 0);
        push_u32(&mut table, groups.len() as u32);
        for (code_point, glyph) in groups {
            push_u32(&mut table, code_point);
            push_u32(&mut table, code_point);
            push_u32(&mut table, glyph);
        }
        table
    }

    fn hhea(&self) -> Vec<u8> {
        let mut table = Vec::new();
        push_u16(&mut table, 1);
        push_u16(&mut table, 0);
        // ascender, descender, lineGap
        push_u16(&mut table, 800);
        push_u16(&mut table, (-200_i16) as u16);
        push_u16(&mut table, 0);
        let advance_max = self
            .glyphs
            .iter()
            .map(|(_, advance)| *advance)
            .fold(self.notdef_advance, u16::max);
        push_u16(&mut table, advance_max);
        // minLeftSideBearing through the reserved fields and metricDataFormat.
        table.extend_from_slice(&[0; 22]);
        push_u16(&mut table, self.glyph_count());
        table
    }

    fn hmtx(&self) -> Vec<u8> {
        let mut table = Vec::new();
        let advances = core::iter::once(self.notdef_advance)
            .chain(self.glyphs.iter().map(|(_, advance)| *advance));
        for advance in advances {
            push_u16(&mut table, advance);
            push_u16(&mut table, 0);
        }
        table
    }

    fn maxp(&self) -> Vec<u8> {
        let mut table = Vec::new();
        push_u32(&mut table, 0x0000_5000);
        push_u16(&mut table, self.glyph_count());
        table
    }
}

fn head() -> Vec<u8> {
    let mut table = Vec::new();
    push_u32(&mut table, 0x0001_0000);
    push_u32(&mut table, 0x0001_0000);
    // checksumAdjustment
    push_u32(&mut table, 0);
    push_u32(&mut table, 0x5F0F_3CF5);
    push_u16(&mut table, 0);
    push_u16(&mut table, UNITS_PER_EM);
    // created, modified, bounding box, macStyle, lowestRecPPEM, fontDirectionHint
    table.extend_from_slice(&[0; 30]);
    // indexToLocFormat, glyphDataFormat
    push_u16(&mut table, 0);
    push_u16(&mut table, 0);
    table
}

fn padded_len(table: &[u8]) -> usize {
    table.len().next_multiple_of(4)
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

#[track_caller]
pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected an advance of {expected}, got {actual}"
    );
}
