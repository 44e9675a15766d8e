// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A font backend for `row_text` built on [`skrifa`].
//!
//! [`FontBook`] holds font files registered under family names and implements the three font
//! collaborators `row_text` shapes with: glyph coverage comes from each face's character map,
//! fallback walks the preference list and then every registered family, and measurement sums
//! horizontal glyph advances at the requested size.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in [`skrifa`].
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use linebender_resource_handle::Blob;
//! use row_text::{FontCapability, FontPreferences, FontStyle, TextMeasurer, shape};
//! use row_text_skrifa::FontBook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut book = FontBook::new();
//! for (family, path) in [
//!     ("JetBrains Mono", "JetBrainsMono-Regular.ttf"),
//!     ("Noto Sans CJK JP", "NotoSansCJKjp-Regular.otf"),
//! ] {
//!     let data = Blob::new(Arc::new(std::fs::read(path)?));
//!     book.register(family, FontStyle::Plain, data, 0)?;
//! }
//!
//! let preferences = FontPreferences::parse("JetBrains Mono, 'Noto Sans CJK JP'", 13.0)?;
//! let base = preferences.base_font(FontStyle::Plain);
//! assert!(book.can_display(&base, 'x'));
//!
//! // The ideographs are not in the monospace font and fall back to the CJK family.
//! let line = shape("key: 東京", &base, &preferences, &book);
//! assert_eq!(line.runs().len(), 2);
//! assert_eq!(line.runs()[1].font().family(), "Noto Sans CJK JP");
//! assert_eq!(line.runs()[0].advance(), book.measure("key: ", &base));
//! # Ok(())
//! # }
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

mod error;
mod font_book;

#[cfg(test)]
mod tests;

pub use error::{LoadError, LoadErrorKind};
pub use font_book::FontBook;
