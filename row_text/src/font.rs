// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

/// Style of a font face, as selected by the bold and italic text attributes of a fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Regular upright face. This is the default value.
    #[default]
    Plain,
    /// Bold upright face.
    Bold,
    /// Regular italic face.
    Italic,
    /// Bold italic face.
    BoldItalic,
}

impl FontStyle {
    /// Creates a style from separate bold and italic flags.
    ///
    /// ```
    /// use row_text::FontStyle;
    ///
    /// assert_eq!(FontStyle::from_flags(true, false), FontStyle::Bold);
    /// assert_eq!(FontStyle::from_flags(true, true), FontStyle::BoldItalic);
    /// ```
    pub const fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Self::Plain,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        }
    }

    /// Returns true if the style is bold or bold italic.
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns true if the style is italic or bold italic.
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
        })
    }
}

/// Identifies a font by family name, style and point size.
///
/// Descriptors are compared by value: two descriptors resolved independently for different
/// characters are equal when their family, style and size match. The family name is reference
/// counted so that cloning a descriptor for every run is cheap.
#[derive(Clone, Debug)]
pub struct FontDescriptor {
    family: Arc<str>,
    style: FontStyle,
    size: f32,
}

impl FontDescriptor {
    /// Creates a new font descriptor.
    pub fn new(family: impl Into<Arc<str>>, style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Returns the family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Returns the point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns a variant of this font at the given point size.
    ///
    /// ```
    /// use row_text::{FontDescriptor, FontStyle};
    ///
    /// let font = FontDescriptor::new("Noto Sans", FontStyle::Bold, 10.0);
    /// let larger = font.with_size(14.0);
    /// assert_eq!(larger.family(), "Noto Sans");
    /// assert_eq!(larger.style(), FontStyle::Bold);
    /// assert_eq!(larger.size(), 14.0);
    /// ```
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            style: self.style,
            size,
        }
    }

    /// Returns a variant of this font with the given style.
    #[must_use]
    pub fn with_style(&self, style: FontStyle) -> Self {
        Self {
            family: self.family.clone(),
            style,
            size: self.size,
        }
    }
}

impl PartialEq for FontDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style
            && self.size == other.size
            && (Arc::ptr_eq(&self.family, &other.family) || self.family == other.family)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}pt", self.family, self.style, self.size)
    }
}
