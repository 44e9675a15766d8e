// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deciding when a row overflows the viewport and where its link goes.

use crate::ShapedLine;

/// The horizontally visible window of the area rows are drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// The x coordinate of the left edge of the visible window.
    pub left: f32,
    /// The width of the visible window.
    pub width: f32,
}

impl Viewport {
    /// Creates a new viewport.
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Returns the x coordinate of the right edge of the visible window.
    pub fn right(self) -> f32 {
        self.left + self.width
    }
}

/// Where a row starts and what part of the row area is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowGeometry {
    /// The x coordinate at which the row's content starts, after indentation and icons.
    pub row_start_x: f32,
    /// The visible window.
    pub viewport: Viewport,
}

impl RowGeometry {
    /// Creates a new row geometry.
    pub const fn new(row_start_x: f32, viewport: Viewport) -> Self {
        Self {
            row_start_x,
            viewport,
        }
    }
}

/// Placement of a link within a row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinkPlacement {
    /// Distance from the row start to the link's left edge.
    ///
    /// This is negative when the viewport is too narrow to show the link entirely; the link is
    /// then drawn partially clipped.
    pub offset: f32,
    /// Width of the link.
    pub width: f32,
}

/// Returns true if text of width `plain_width` starting at `row_start_x` extends past the right
/// edge of `viewport`.
pub fn overflows(plain_width: f32, row_start_x: f32, viewport: Viewport) -> bool {
    row_start_x + plain_width > viewport.right()
}

/// Places a link of width `link_width` at the end of the row's plain text, pulled left just
/// enough to end at the viewport's right edge.
///
/// The link never starts past the end of the plain text. The offset is not clamped at zero.
///
/// ```
/// use row_text::{Viewport, place_link};
///
/// let link = place_link(40.0, 0.0, Viewport::new(0.0, 100.0), 20.0);
/// assert_eq!(link.offset, 40.0);
/// ```
pub fn place_link(
    plain_width: f32,
    row_start_x: f32,
    viewport: Viewport,
    link_width: f32,
) -> LinkPlacement {
    LinkPlacement {
        offset: plain_width.min(viewport.right() - link_width - row_start_x),
        width: link_width,
    }
}

/// Decides whether the row's plain text overflows the viewport and, if so, where a link of the
/// preferred width is placed.
///
/// Returns `None` when the text fits. Otherwise a link is always placed, even when the link
/// itself does not fit; its placement is clamped rather than refused.
///
/// ```
/// use row_text::{LinkPlacement, Viewport, decide};
///
/// let viewport = Viewport::new(0.0, 100.0);
/// assert_eq!(decide(50.0, 0.0, viewport, 20.0), None);
/// assert_eq!(
///     decide(200.0, 0.0, viewport, 20.0),
///     Some(LinkPlacement { offset: 80.0, width: 20.0 })
/// );
/// ```
pub fn decide(
    plain_width: f32,
    row_start_x: f32,
    viewport: Viewport,
    link_preferred_width: f32,
) -> Option<LinkPlacement> {
    overflows(plain_width, row_start_x, viewport)
        .then(|| place_link(plain_width, row_start_x, viewport, link_preferred_width))
}

/// Like [`decide`], for a link whose label replaces the row's trailing content.
///
/// The link width is the advance of `link_line`, the link label shaped with
/// [`shape`](crate::shape), rather than a caller estimate.
pub fn decide_replacing(
    plain_width: f32,
    row_start_x: f32,
    viewport: Viewport,
    link_line: &ShapedLine,
) -> Option<LinkPlacement> {
    decide(plain_width, row_start_x, viewport, link_line.advance())
}
