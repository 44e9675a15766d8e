// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use linebender_resource_handle::Blob;
use row_text::{
    FontCapability, FontDescriptor, FontFallbackResolver, FontPreferences, FontStyle,
    TextMeasurer,
};
use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::LoadError;

#[derive(Clone, Debug)]
struct Face {
    family: Arc<str>,
    style: FontStyle,
    data: Blob<u8>,
    index: u32,
}

impl Face {
    fn font_ref(&self) -> Option<FontRef<'_>> {
        match FontRef::from_index(self.data.data(), self.index) {
            Ok(font) => Some(font),
            Err(error) => {
                // Data was validated on registration, so this only happens if the blob changed.
                log::warn!(
                    "face {} of family {:?} failed to parse: {error}",
                    self.index,
                    self.family
                );
                None
            }
        }
    }

    fn covers(&self, ch: char) -> bool {
        self.font_ref()
            .is_some_and(|font| font.charmap().map(ch).is_some())
    }
}

/// An in-memory collection of font faces grouped by family name.
///
/// Family names are matched ASCII case-insensitively. Each family may have one face per
/// [`FontStyle`]; a style without its own face is served by the family's plain face, or by
/// whichever face the family registered first.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    faces: Vec<Face>,
}

impl FontBook {
    /// Creates an empty font book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the face at `index` in `data` as the `style` face of `family`.
    ///
    /// A face registered again for the same family and style replaces the earlier one.
    pub fn register(
        &mut self,
        family: &str,
        style: FontStyle,
        data: Blob<u8>,
        index: u32,
    ) -> Result<(), LoadError> {
        let family = family.trim();
        if family.is_empty() {
            return Err(LoadError::empty_family_name(index));
        }
        FontRef::from_index(data.data(), index)
            .map_err(|error| LoadError::invalid_font_data(family, index, error))?;

        let face = Face {
            family: family.into(),
            style,
            data,
            index,
        };
        match self
            .faces
            .iter_mut()
            .find(|existing| existing.style == style && same_family(&existing.family, family))
        {
            Some(existing) => *existing = face,
            None => self.faces.push(face),
        }
        Ok(())
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if no face is registered.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the registered family names in registration order, without duplicates.
    pub fn families(&self) -> impl Iterator<Item = &str> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(ix, face)| {
                !self.faces[..*ix]
                    .iter()
                    .any(|earlier| same_family(&earlier.family, &face.family))
            })
            .map(|(_, face)| &*face.family)
    }

    /// Returns true if the book has a face for `family`, in any style.
    pub fn contains_family(&self, family: &str) -> bool {
        self.faces
            .iter()
            .any(|face| same_family(&face.family, family))
    }

    fn face(&self, family: &str, style: FontStyle) -> Option<&Face> {
        let mut of_family = self
            .faces
            .iter()
            .filter(|face| same_family(&face.family, family));
        let first = of_family.next()?;
        if first.style == style {
            return Some(first);
        }
        let mut plain = None;
        for face in of_family {
            if face.style == style {
                return Some(face);
            }
            if plain.is_none() && face.style == FontStyle::Plain {
                plain = Some(face);
            }
        }
        Some(plain.unwrap_or(first))
    }
}

fn same_family(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl FontCapability for FontBook {
    fn can_display(&self, font: &FontDescriptor, ch: char) -> bool {
        self.face(font.family(), font.style())
            .is_some_and(|face| face.covers(ch))
    }
}

impl FontFallbackResolver for FontBook {
    fn resolve(&self, ch: char, style: FontStyle, preferences: &FontPreferences) -> FontDescriptor {
        let size = preferences.size();
        for family in preferences.families() {
            let font = FontDescriptor::new(family, style, size);
            if self.can_display(&font, ch) {
                return font;
            }
        }
        let in_style = self
            .faces
            .iter()
            .map(|face| FontDescriptor::new(face.family.clone(), style, size))
            .find(|font| self.can_display(font, ch));
        if let Some(font) = in_style {
            log::trace!("no preferred family covers {ch:?}, using {font}");
            return font;
        }
        // Registration keeps one face per family and style, so a face is always found again
        // under its own style.
        if let Some(face) = self.faces.iter().find(|face| face.covers(ch)) {
            log::trace!("no {style} face covers {ch:?}, using {} {}", face.family, face.style);
            return FontDescriptor::new(face.family.clone(), face.style, size);
        }
        log::trace!("no registered face covers {ch:?}");
        FontDescriptor::new(preferences.primary(), style, size)
    }
}

impl TextMeasurer for FontBook {
    fn measure(&self, run: &str, font: &FontDescriptor) -> f32 {
        let Some(font_ref) = self
            .face(font.family(), font.style())
            .and_then(Face::font_ref)
        else {
            return 0.0;
        };
        let charmap = font_ref.charmap();
        let metrics = font_ref.glyph_metrics(Size::new(font.size()), LocationRef::default());
        run.chars()
            .map(|ch| {
                let glyph = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                metrics.advance_width(glyph).unwrap_or_default()
            })
            .sum()
    }
}
