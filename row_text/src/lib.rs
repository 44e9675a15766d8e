// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mixed-font shaping and overflow-link placement for tree rows.
//!
//! This crate holds the toolkit-independent half of a debugger variable-tree row renderer.
//! Two pure operations make up its core:
//!
//! - [`shape`] splits a string into maximal runs that a single font can render, falling back
//!   per character to another font when the base font lacks a glyph, and measures each run.
//! - [`decide`] determines whether a row's plain text overflows the visible viewport and, if
//!   so, where a "show full value" link is placed so that it stays on screen.
//!
//! Fonts are never looked up through global state. Callers provide a font backend implementing
//! [`FontCapability`], [`FontFallbackResolver`] and [`TextMeasurer`].
//!
//! [`RowBuilder`] composes both operations into a complete row: plain fragments, pinned
//! hyperlinks, and the optional full-value link, producing a [`RowLayout`] the painting layer
//! consumes directly.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward
//!   compatibility.
//!
//! ## Example
//!
//! ```
//! use row_text::{
//!     FontCapability, FontDescriptor, FontFallbackResolver, FontPreferences, FontStyle,
//!     TextMeasurer, shape,
//! };
//!
//! struct Ascii;
//!
//! impl FontCapability for Ascii {
//!     fn can_display(&self, font: &FontDescriptor, ch: char) -> bool {
//!         font.family() != "Mono" || ch.is_ascii()
//!     }
//! }
//!
//! impl FontFallbackResolver for Ascii {
//!     fn resolve(&self, _: char, style: FontStyle, _: &FontPreferences) -> FontDescriptor {
//!         FontDescriptor::new("Symbols", style, 10.0)
//!     }
//! }
//!
//! impl TextMeasurer for Ascii {
//!     fn measure(&self, run: &str, font: &FontDescriptor) -> f32 {
//!         run.chars().count() as f32 * font.size() / 2.0
//!     }
//! }
//!
//! let preferences = FontPreferences::new(["Mono"], 12.0).unwrap();
//! let base = preferences.base_font(FontStyle::Plain);
//! let line = shape("a→b", &base, &preferences, &Ascii);
//!
//! assert_eq!(line.runs().len(), 3);
//! // The fallback run is normalized to the base font's size.
//! assert_eq!(line.runs()[1].font().size(), 12.0);
//! assert_eq!(line.advance(), 18.0);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod backend;
mod font;
mod overflow;
mod preferences;
mod row;
mod shape;

#[cfg(test)]
mod tests;

pub use backend::{FontCapability, FontFallbackResolver, TextMeasurer};
pub use font::{FontDescriptor, FontStyle};
pub use overflow::{
    LinkPlacement, RowGeometry, Viewport, decide, decide_replacing, overflows, place_link,
};
pub use preferences::{FontPreferences, ParsePreferencesError, ParsePreferencesErrorKind};
pub use row::{PositionedFragment, RowBuilder, RowLayout, ShapedFragment};
pub use shape::{GlyphRun, ShapedLine, shape};
