// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered font family preferences used for fallback resolution.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{FontDescriptor, FontStyle};

/// Why a family list or point size was refused by [`FontPreferences`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParsePreferencesErrorKind {
    /// An entry is empty, or a quoted name is followed by something other than a comma.
    InvalidSyntax,
    /// A name opened with `'` or `"` runs to the end of the list without being closed.
    UnterminatedString,
    /// The list names no family at all.
    Empty,
    /// The point size is zero, negative, infinite or NaN.
    InvalidSize,
}

/// A refused [`FontPreferences`] input, with where in the family list the problem was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePreferencesError {
    kind: ParsePreferencesErrorKind,
    at: usize,
    span: Option<(usize, usize)>,
}

impl ParsePreferencesError {
    const fn new(kind: ParsePreferencesErrorKind, at: usize) -> Self {
        Self {
            kind,
            at,
            span: None,
        }
    }

    const fn with_span(mut self, span: (usize, usize)) -> Self {
        self.span = Some(span);
        self
    }

    /// What was wrong with the input.
    pub const fn kind(self) -> ParsePreferencesErrorKind {
        self.kind
    }

    /// Where in the family list the problem starts, in bytes.
    ///
    /// Errors that are not about the list text, such as an invalid size, report 0.
    pub const fn byte_offset(self) -> usize {
        self.at
    }

    /// The bytes `(start, end)` of the offending quoted name.
    ///
    /// Present only for a quoted name that is blank or never closed.
    pub const fn byte_span(self) -> Option<(usize, usize)> {
        self.span
    }
}

impl fmt::Display for ParsePreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParsePreferencesErrorKind::InvalidSyntax => "malformed family list entry",
            ParsePreferencesErrorKind::UnterminatedString => "family name quote is never closed",
            ParsePreferencesErrorKind::Empty => "no font family given",
            ParsePreferencesErrorKind::InvalidSize => "point size must be finite and positive",
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParsePreferencesError {}

/// An ordered list of preferred font families together with the point size they are used at.
///
/// The first family is the primary family that base fonts are built from. The remaining
/// families are consulted in order when the primary family has no glyph for a character.
#[derive(Clone, Debug, PartialEq)]
pub struct FontPreferences {
    families: Vec<Arc<str>>,
    size: f32,
}

impl FontPreferences {
    /// Creates preferences from already separated family names.
    ///
    /// Returns an error when `families` is empty or `size` is not a finite, positive number.
    pub fn new<I>(families: I, size: f32) -> Result<Self, ParsePreferencesError>
    where
        I: IntoIterator,
        I::Item: Into<Arc<str>>,
    {
        let families: Vec<Arc<str>> = families.into_iter().map(Into::into).collect();
        if families.is_empty() {
            return Err(ParsePreferencesError::new(
                ParsePreferencesErrorKind::Empty,
                0,
            ));
        }
        validate_size(size)?;
        Ok(Self { families, size })
    }

    /// Parses a comma separated list of family names.
    ///
    /// Whitespace around names is ignored and a trailing comma is permitted. Names may be
    /// quoted with `'` or `"` to preserve inner whitespace. Empty entries (such as `,,`) are
    /// rejected.
    ///
    /// # Example
    /// ```
    /// use row_text::FontPreferences;
    ///
    /// let list = "JetBrains Mono, 'Noto Sans CJK JP' , DejaVu Sans,";
    /// let preferences = FontPreferences::parse(list, 13.0).unwrap();
    /// let families: Vec<&str> = preferences.families().collect();
    /// assert_eq!(families, ["JetBrains Mono", "Noto Sans CJK JP", "DejaVu Sans"]);
    /// assert_eq!(preferences.primary(), "JetBrains Mono");
    /// ```
    pub fn parse(list: &str, size: f32) -> Result<Self, ParsePreferencesError> {
        let families = FamilyList::new(list)
            .map(|family| family.map(Arc::from))
            .collect::<Result<Vec<Arc<str>>, _>>()?;
        if families.is_empty() {
            return Err(ParsePreferencesError::new(
                ParsePreferencesErrorKind::Empty,
                list.len(),
            ));
        }
        validate_size(size)?;
        Ok(Self { families, size })
    }

    /// Returns the families in preference order.
    pub fn families(&self) -> impl Iterator<Item = &str> + '_ + Clone {
        self.families.iter().map(|family| &**family)
    }

    /// Returns the primary family.
    pub fn primary(&self) -> &str {
        // `new` and `parse` both reject an empty list.
        &self.families[0]
    }

    /// Returns the point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the base font for text in the given style: the primary family at the preferred
    /// size.
    pub fn base_font(&self, style: FontStyle) -> FontDescriptor {
        FontDescriptor::new(self.families[0].clone(), style, self.size)
    }
}

fn validate_size(size: f32) -> Result<(), ParsePreferencesError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ParsePreferencesError::new(
            ParsePreferencesErrorKind::InvalidSize,
            0,
        ))
    }
}

#[derive(Clone, Debug)]
struct FamilyList<'a> {
    source: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> FamilyList<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            done: false,
        }
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        let bytes = self.source.as_bytes();
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        pos
    }

    fn fail(
        &mut self,
        error: ParsePreferencesError,
    ) -> Option<Result<&'a str, ParsePreferencesError>> {
        self.done = true;
        Some(Err(error))
    }
}

// All delimiters are ASCII, so every index used for slicing below lies on a char boundary.
impl<'a> Iterator for FamilyList<'a> {
    type Item = Result<&'a str, ParsePreferencesError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bytes = self.source.as_bytes();
        let len = bytes.len();
        let mut pos = self.skip_whitespace(self.pos);
        if pos >= len {
            self.done = true;
            return None;
        }
        if bytes[pos] == b',' {
            return self.fail(ParsePreferencesError::new(
                ParsePreferencesErrorKind::InvalidSyntax,
                pos,
            ));
        }

        let first = bytes[pos];
        if matches!(first, b'"' | b'\'') {
            let opening_quote = pos;
            let start = pos + 1;
            let Some(close) = bytes[start..].iter().position(|&b| b == first) else {
                return self.fail(
                    ParsePreferencesError::new(
                        ParsePreferencesErrorKind::UnterminatedString,
                        opening_quote,
                    )
                    .with_span((opening_quote, len)),
                );
            };
            let end = start + close;
            let name = &self.source[start..end];
            if name.trim().is_empty() {
                return self.fail(
                    ParsePreferencesError::new(
                        ParsePreferencesErrorKind::InvalidSyntax,
                        opening_quote,
                    )
                    .with_span((opening_quote, end + 1)),
                );
            }
            pos = self.skip_whitespace(end + 1);
            if pos < len {
                if bytes[pos] != b',' {
                    return self.fail(ParsePreferencesError::new(
                        ParsePreferencesErrorKind::InvalidSyntax,
                        pos,
                    ));
                }
                pos += 1;
            }
            self.pos = pos;
            return Some(Ok(name));
        }

        let end = bytes[pos..]
            .iter()
            .position(|&b| b == b',')
            .map_or(len, |offset| pos + offset);
        let name = self.source[pos..end].trim();
        self.pos = if end < len { end + 1 } else { len };
        Some(Ok(name))
    }
}
