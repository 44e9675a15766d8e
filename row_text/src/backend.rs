// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font collaborators consumed by shaping.
//!
//! Shaping never reaches for a font registry on its own. Everything it knows about fonts comes
//! through these three traits, usually implemented together by a single font backend.

use crate::{FontDescriptor, FontPreferences, FontStyle};

/// Reports glyph coverage of fonts.
pub trait FontCapability {
    /// Returns true if `font` has a glyph for `ch`.
    fn can_display(&self, font: &FontDescriptor, ch: char) -> bool;
}

/// Finds a font able to display a character the base font cannot.
pub trait FontFallbackResolver {
    /// Returns a font able to display `ch` in the given style, trying the families of
    /// `preferences` in order.
    ///
    /// This must always return some font. When nothing covers `ch`, implementations return a
    /// font that renders a missing-glyph box. The returned size is not significant: shaping
    /// normalizes it to the base font's size.
    fn resolve(&self, ch: char, style: FontStyle, preferences: &FontPreferences) -> FontDescriptor;
}

/// Measures the advance width of text rendered in a single font.
pub trait TextMeasurer {
    /// Returns the advance width of `run` rendered in `font`, in device units.
    fn measure(&self, run: &str, font: &FontDescriptor) -> f32;
}

impl<T: FontCapability + ?Sized> FontCapability for &T {
    fn can_display(&self, font: &FontDescriptor, ch: char) -> bool {
        (**self).can_display(font, ch)
    }
}

impl<T: FontFallbackResolver + ?Sized> FontFallbackResolver for &T {
    fn resolve(&self, ch: char, style: FontStyle, preferences: &FontPreferences) -> FontDescriptor {
        (**self).resolve(ch, style, preferences)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, run: &str, font: &FontDescriptor) -> f32 {
        (**self).measure(run, font)
    }
}
