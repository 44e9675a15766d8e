// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use skrifa::raw::ReadError;

/// Error returned when registering a font with a [`FontBook`](crate::FontBook).
#[derive(Clone, Debug)]
pub struct LoadError {
    /// The non-exhaustive category describing this error.
    kind: LoadErrorKind,

    /// The family the font was registered under.
    family: String,

    /// The index of the face within the font data.
    index: u32,

    /// The underlying parse failure, for [`LoadErrorKind::InvalidFontData`].
    read_error: Option<ReadError>,
}

impl LoadError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    /// The family name the font was registered under.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The index of the face within the font data.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The error reported while parsing the font data, if that is what failed.
    pub fn read_error(&self) -> Option<&ReadError> {
        self.read_error.as_ref()
    }

    pub(crate) fn invalid_font_data(family: &str, index: u32, error: ReadError) -> Self {
        Self {
            kind: LoadErrorKind::InvalidFontData,
            family: family.into(),
            index,
            read_error: Some(error),
        }
    }

    pub(crate) fn empty_family_name(index: u32) -> Self {
        Self {
            kind: LoadErrorKind::EmptyFamilyName,
            family: String::new(),
            index,
            read_error: None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LoadErrorKind::InvalidFontData => {
                write!(
                    f,
                    "face {} registered for family {:?} could not be parsed",
                    self.index, self.family
                )?;
                if let Some(error) = &self.read_error {
                    write!(f, ": {error}")?;
                }
                Ok(())
            }
            LoadErrorKind::EmptyFamilyName => {
                write!(f, "face {} registered with an empty family name", self.index)
            }
        }
    }
}

impl core::error::Error for LoadError {}

/// The non-exhaustive category of a [`LoadError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadErrorKind {
    /// The font data is not a font, or has no face at the requested index.
    InvalidFontData,

    /// The family name was empty or only whitespace.
    EmptyFamilyName,
}
