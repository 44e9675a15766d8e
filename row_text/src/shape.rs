// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mixed-font shaping: splitting text into single-font runs and measuring them.

use core::ops::Range;

use smallvec::SmallVec;

use crate::{FontCapability, FontDescriptor, FontFallbackResolver, FontPreferences, TextMeasurer};

/// A maximal piece of text rendered uniformly by one font.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRun {
    text_range: Range<usize>,
    font: FontDescriptor,
    advance: f32,
}

impl GlyphRun {
    /// Returns the byte range of the run in the shaped text.
    ///
    /// Both ends lie on `char` boundaries.
    pub fn text_range(&self) -> Range<usize> {
        self.text_range.clone()
    }

    /// Returns the font assigned to the run.
    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    /// Returns the advance width of the run.
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

/// Text partitioned into single-font runs, with measured widths.
///
/// The runs cover the shaped text exactly once, in order, and none of them is empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapedLine {
    runs: SmallVec<[GlyphRun; 1]>,
    advance: f32,
}

impl ShapedLine {
    /// Returns the runs in text order.
    pub fn runs(&self) -> &[GlyphRun] {
        &self.runs
    }

    /// Returns the total advance width, the sum of the run advances.
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Returns true if the line has no runs, which is the case exactly when the shaped text was
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the run containing the given byte index, if any.
    pub fn run_at(&self, index: usize) -> Option<&GlyphRun> {
        let ix = self.runs.partition_point(|run| run.text_range.end <= index);
        self.runs.get(ix)
    }
}

/// Shapes `text` into single-font runs.
///
/// Each character is rendered with `base` if `base` can display it. Otherwise the fallback
/// resolver is asked for a font in the base style, and that font is used at the base font's
/// size so that mixed runs share a baseline. Consecutive characters that need equal fonts are
/// merged into one run, even when each was resolved independently. Finally each run is
/// measured in its font and the advances are summed.
///
/// Empty text produces an empty line with zero advance. Shaping never fails: characters that no
/// font covers keep whatever font the resolver hands back.
pub fn shape<F>(
    text: &str,
    base: &FontDescriptor,
    preferences: &FontPreferences,
    fonts: &F,
) -> ShapedLine
where
    F: FontCapability + FontFallbackResolver + TextMeasurer + ?Sized,
{
    let mut runs = SmallVec::<[GlyphRun; 1]>::new();
    let mut current_font = base.clone();
    let mut run_start = 0;

    for (index, ch) in text.char_indices() {
        let font = required_font(ch, base, preferences, fonts);
        if font != current_font {
            if index > run_start {
                runs.push(measure_run(text, run_start..index, current_font, fonts));
            }
            current_font = font;
            run_start = index;
        }
    }
    if run_start < text.len() {
        runs.push(measure_run(text, run_start..text.len(), current_font, fonts));
    }

    let advance = runs.iter().map(|run| run.advance).sum();
    ShapedLine { runs, advance }
}

fn required_font<F>(
    ch: char,
    base: &FontDescriptor,
    preferences: &FontPreferences,
    fonts: &F,
) -> FontDescriptor
where
    F: FontCapability + FontFallbackResolver + ?Sized,
{
    if fonts.can_display(base, ch) {
        return base.clone();
    }
    let fallback = fonts.resolve(ch, base.style(), preferences);
    log::trace!("falling back from {base} to {fallback} for {ch:?}");
    fallback.with_size(base.size())
}

fn measure_run<M: TextMeasurer + ?Sized>(
    text: &str,
    text_range: Range<usize>,
    font: FontDescriptor,
    measurer: &M,
) -> GlyphRun {
    let advance = measurer.measure(&text[text_range.clone()], &font);
    GlyphRun {
        text_range,
        font,
        advance,
    }
}
