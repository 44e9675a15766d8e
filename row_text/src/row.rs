// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composing a tree row out of styled text fragments and links.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{
    FontCapability, FontFallbackResolver, FontPreferences, FontStyle, LinkPlacement, RowGeometry,
    ShapedLine, TextMeasurer, decide_replacing, overflows, place_link, shape,
};

#[derive(Clone, Debug)]
struct Fragment<T> {
    text: String,
    style: FontStyle,
    tag: Option<T>,
}

/// Collects the fragments of one row before layout.
///
/// A row is made of two segments. The text segment holds ordinary fragments and is clipped
/// when a link is shown. The link segment holds hyperlinks that must always stay on screen; it
/// is drawn on top of the end of the text segment, pulled left into the viewport if needed.
///
/// `T` is an arbitrary tag attached to fragments, typically the action to run when a link is
/// clicked.
#[derive(Clone, Debug)]
pub struct RowBuilder<T> {
    text: Vec<Fragment<T>>,
    pinned: Vec<Fragment<T>>,
    full_value: Option<Fragment<T>>,
}

impl<T> Default for RowBuilder<T> {
    fn default() -> Self {
        Self {
            text: Vec::new(),
            pinned: Vec::new(),
            full_value: None,
        }
    }
}

impl<T> RowBuilder<T> {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment to the text segment.
    pub fn append(
        &mut self,
        text: impl Into<String>,
        style: FontStyle,
        tag: Option<T>,
    ) -> &mut Self {
        self.text.push(Fragment {
            text: text.into(),
            style,
            tag,
        });
        self
    }

    /// Appends a hyperlink that must always stay on screen to the link segment.
    pub fn append_pinned_link(
        &mut self,
        text: impl Into<String>,
        style: FontStyle,
        tag: T,
    ) -> &mut Self {
        self.pinned.push(Fragment {
            text: text.into(),
            style,
            tag: Some(tag),
        });
        self
    }

    /// Declares that this row can offer a link showing its full value, labelled `label`.
    ///
    /// The link is only shown when the row has no pinned links and its text overflows the
    /// viewport. An empty label means the row has no full value to show, and is ignored.
    pub fn full_value(&mut self, label: impl Into<String>, style: FontStyle, tag: T) -> &mut Self {
        let label = label.into();
        if !label.is_empty() {
            self.full_value = Some(Fragment {
                text: label,
                style,
                tag: Some(tag),
            });
        }
        self
    }

    /// Returns true if a pinned link has been appended.
    pub fn has_pinned_link(&self) -> bool {
        !self.pinned.is_empty()
    }

    /// Shapes all fragments and decides where the link segment goes.
    ///
    /// Every fragment is shaped with the preferences' base font in the fragment's style. Pinned
    /// links are always placed. Otherwise the full-value link, if any, is shown only when the
    /// text segment overflows, and its width is that of its shaped label.
    pub fn layout<F>(
        self,
        geometry: RowGeometry,
        preferences: &FontPreferences,
        fonts: &F,
    ) -> RowLayout<T>
    where
        F: FontCapability + FontFallbackResolver + TextMeasurer + ?Sized,
    {
        let RowGeometry {
            row_start_x,
            viewport,
        } = geometry;
        let text: Vec<ShapedFragment<T>> = self
            .text
            .into_iter()
            .map(|fragment| shape_fragment(fragment, preferences, fonts))
            .collect();
        let plain_advance = total_advance(&text);
        let overflowing = overflows(plain_advance, row_start_x, viewport);

        let (link_fragments, link) = if !self.pinned.is_empty() {
            let pinned: Vec<ShapedFragment<T>> = self
                .pinned
                .into_iter()
                .map(|fragment| shape_fragment(fragment, preferences, fonts))
                .collect();
            let link_width = total_advance(&pinned);
            let placement = place_link(plain_advance, row_start_x, viewport, link_width);
            log::debug!(
                "pinned link placed at {} ({} wide) after {plain_advance} of text",
                placement.offset,
                placement.width
            );
            (pinned, Some(placement))
        } else if let Some(label) = self.full_value.filter(|_| overflowing) {
            let label = shape_fragment(label, preferences, fonts);
            match decide_replacing(plain_advance, row_start_x, viewport, &label.line) {
                Some(placement) => {
                    log::debug!(
                        "text overflows by {}, full value link placed at {}",
                        row_start_x + plain_advance - viewport.right(),
                        placement.offset
                    );
                    (vec![label], Some(placement))
                }
                None => (Vec::new(), None),
            }
        } else {
            (Vec::new(), None)
        };

        RowLayout {
            text,
            link_fragments,
            plain_advance,
            overflowing,
            link,
        }
    }
}

fn shape_fragment<T, F>(
    fragment: Fragment<T>,
    preferences: &FontPreferences,
    fonts: &F,
) -> ShapedFragment<T>
where
    F: FontCapability + FontFallbackResolver + TextMeasurer + ?Sized,
{
    let base = preferences.base_font(fragment.style);
    let line = shape(&fragment.text, &base, preferences, fonts);
    ShapedFragment {
        text: fragment.text,
        style: fragment.style,
        tag: fragment.tag,
        line,
    }
}

fn total_advance<T>(fragments: &[ShapedFragment<T>]) -> f32 {
    fragments.iter().map(ShapedFragment::advance).sum()
}

/// A fragment together with its shaped text.
#[derive(Clone, Debug)]
pub struct ShapedFragment<T> {
    text: String,
    style: FontStyle,
    tag: Option<T>,
    line: ShapedLine,
}

impl<T> ShapedFragment<T> {
    /// Returns the fragment's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the fragment's style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Returns the fragment's tag.
    pub fn tag(&self) -> Option<&T> {
        self.tag.as_ref()
    }

    /// Returns the shaped text.
    pub fn line(&self) -> &ShapedLine {
        &self.line
    }

    /// Returns the advance width of the fragment.
    pub fn advance(&self) -> f32 {
        self.line.advance()
    }
}

/// A shaped fragment and the row-relative x coordinate it is drawn at.
#[derive(Debug)]
pub struct PositionedFragment<'a, T> {
    /// Distance from the row start to the fragment's left edge.
    pub x: f32,
    /// The fragment.
    pub fragment: &'a ShapedFragment<T>,
}

impl<T> Clone for PositionedFragment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PositionedFragment<'_, T> {}

/// The result of laying out one row.
///
/// This is all the painting layer needs: draw [`text_fragments`](Self::text_fragments) clipped
/// to [`text_clip`](Self::text_clip), then draw [`link_fragments`](Self::link_fragments).
#[derive(Clone, Debug)]
pub struct RowLayout<T> {
    text: Vec<ShapedFragment<T>>,
    link_fragments: Vec<ShapedFragment<T>>,
    plain_advance: f32,
    overflowing: bool,
    link: Option<LinkPlacement>,
}

impl<T> RowLayout<T> {
    /// Returns the advance width of the text segment.
    pub fn plain_advance(&self) -> f32 {
        self.plain_advance
    }

    /// Returns true if the text segment extends past the right edge of the viewport.
    pub fn overflows(&self) -> bool {
        self.overflowing
    }

    /// Returns the placement of the link segment, if a link is shown.
    pub fn link(&self) -> Option<LinkPlacement> {
        self.link
    }

    /// Returns the width the row asks for: the text segment plus the link, if any.
    pub fn preferred_width(&self) -> f32 {
        self.plain_advance + self.link.map_or(0.0, |link| link.width)
    }

    /// Returns the width text fragments must be clipped to, if they are clipped at all.
    pub fn text_clip(&self) -> Option<f32> {
        self.link.map(|link| link.offset)
    }

    /// Returns true if the row shows a link.
    ///
    /// Hosts that pop up the full row content when hovering over a truncated row should not
    /// do so for such rows, since the link already offers the full content.
    pub fn suppresses_expansion(&self) -> bool {
        self.link.is_some()
    }

    /// Returns the text segment's fragments, positioned from the row start.
    pub fn text_fragments(&self) -> impl Iterator<Item = PositionedFragment<'_, T>> + '_ {
        positioned(&self.text, 0.0)
    }

    /// Returns the link segment's fragments, positioned from the row start.
    ///
    /// This is empty when no link is shown.
    pub fn link_fragments(&self) -> impl Iterator<Item = PositionedFragment<'_, T>> + '_ {
        let offset = self.link.map_or(0.0, |link| link.offset);
        positioned(&self.link_fragments, offset)
    }

    /// Returns the tag of the link fragment at row-relative `x`.
    ///
    /// Only the link segment is hit tested. Returns `None` when no link is shown, when `x`
    /// misses every link fragment, or when the fragment under `x` has no tag.
    pub fn fragment_at(&self, x: f32) -> Option<&T> {
        self.link?;
        self.link_fragments()
            .find(|positioned| {
                x >= positioned.x && x < positioned.x + positioned.fragment.advance()
            })
            .and_then(|positioned| positioned.fragment.tag())
    }
}

fn positioned<T>(
    fragments: &[ShapedFragment<T>],
    start: f32,
) -> impl Iterator<Item = PositionedFragment<'_, T>> + '_ {
    fragments.iter().scan(start, |x, fragment| {
        let positioned = PositionedFragment { x: *x, fragment };
        *x += fragment.advance();
        Some(positioned)
    })
}
