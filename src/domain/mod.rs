// SPDX-License-Identifier: MPL-2.0
//! Domain types for the slideshow overlay.
//!
//! These are plain data types with no dependency on any rendering surface
//! or platform capability.

pub mod entry;
pub mod media;

pub use entry::{Entry, GroupId};
pub use media::{detect_media_kind, MediaKind};
