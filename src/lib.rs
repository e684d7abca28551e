// SPDX-License-Identifier: MPL-2.0
//! `foldershow` is a slideshow overlay engine for folder galleries.
//!
//! It turns a directory of mixed image/video/audio entries, grouped by
//! folder, into a navigable full-screen sequence: step forward and
//! backward across folder boundaries, keep the navigable address history
//! in lockstep with the visible entry, and auto-hide the control toolbar
//! during inactivity. Rendering, playback and the real history stack stay
//! behind ports so the engine embeds in any shell.

#![doc(html_root_url = "https://docs.rs/foldershow/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod input;
pub mod listing;
pub mod presenter;
pub mod router;
pub mod session;
pub mod test_support;
