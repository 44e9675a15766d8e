// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{
    FontCapability, FontDescriptor, FontFallbackResolver, FontPreferences, FontStyle,
    TextMeasurer,
};

pub(crate) const BASE: &str = "Base";
pub(crate) const SYMBOLS: &str = "Symbols";
pub(crate) const CJK: &str = "Cjk";
pub(crate) const LAST_RESORT: &str = "LastResort";

/// Size reported by the stub resolver, deliberately different from any base size.
pub(crate) const RESOLVED_SIZE: f32 = 1.0;

type Coverage = fn(char) -> bool;

fn base_covers(ch: char) -> bool {
    ch.is_ascii() && ch != 'X'
}

fn symbols_cover(ch: char) -> bool {
    matches!(ch, 'X' | '→' | '…')
}

fn cjk_covers(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

/// A scripted font backend.
///
/// `Base` covers ASCII except `X`, `Symbols` covers a few symbols plus `X`, and `Cjk` covers
/// the CJK unified ideographs block. Every character is one unit wide regardless of font.
pub(crate) struct TestFonts {
    families: Vec<(&'static str, Coverage)>,
    advance: f32,
    resolved: RefCell<Vec<(char, FontStyle)>>,
}

impl TestFonts {
    pub(crate) fn new() -> Self {
        Self {
            families: alloc::vec![
                (BASE, base_covers as Coverage),
                (SYMBOLS, symbols_cover as Coverage),
                (CJK, cjk_covers as Coverage),
            ],
            advance: 1.0,
            resolved: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub(crate) fn preferences(&self) -> FontPreferences {
        FontPreferences::new([BASE, SYMBOLS, CJK], 12.0).unwrap()
    }

    /// Characters handed to the fallback resolver so far, with the requested style.
    pub(crate) fn resolved(&self) -> Vec<(char, FontStyle)> {
        self.resolved.borrow().clone()
    }

    fn covers(&self, family: &str, ch: char) -> bool {
        self.families
            .iter()
            .any(|(name, coverage)| *name == family && coverage(ch))
    }
}

impl FontCapability for TestFonts {
    fn can_display(&self, font: &FontDescriptor, ch: char) -> bool {
        self.covers(font.family(), ch)
    }
}

impl FontFallbackResolver for TestFonts {
    fn resolve(&self, ch: char, style: FontStyle, preferences: &FontPreferences) -> FontDescriptor {
        self.resolved.borrow_mut().push((ch, style));
        let family = preferences
            .families()
            .find(|family| self.covers(family, ch))
            .unwrap_or(LAST_RESORT);
        FontDescriptor::new(family, style, RESOLVED_SIZE)
    }
}

impl TextMeasurer for TestFonts {
    fn measure(&self, run: &str, _font: &FontDescriptor) -> f32 {
        run.chars().count() as f32 * self.advance
    }
}

/// Delegates to [`TestFonts`] but fails every measurement.
pub(crate) struct FailingMeasurer(pub(crate) TestFonts);

impl FontCapability for FailingMeasurer {
    fn can_display(&self, font: &FontDescriptor, ch: char) -> bool {
        self.0.can_display(font, ch)
    }
}

impl FontFallbackResolver for FailingMeasurer {
    fn resolve(&self, ch: char, style: FontStyle, preferences: &FontPreferences) -> FontDescriptor {
        self.0.resolve(ch, style, preferences)
    }
}

impl TextMeasurer for FailingMeasurer {
    fn measure(&self, _run: &str, font: &FontDescriptor) -> f32 {
        panic!("measurer failed for {font}");
    }
}
