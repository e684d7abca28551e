// SPDX-License-Identifier: MPL-2.0
//! Capability traits for everything the engine does not own.
//!
//! Shells implement these against their platform (a browser page, a GUI
//! toolkit, a terminal); tests inject recording fakes. The engine never
//! reaches past a port.

pub mod history;
pub mod player;
pub mod surface;
pub mod timer;

pub use history::{HistoryPort, HistoryState};
pub use player::PlayerTransport;
pub use surface::MediaSurface;
pub use timer::{TimerHandle, TimerHost, TimerPurpose};
