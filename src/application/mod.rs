// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports to external collaborators and the history
//! synchronization service built on top of them.
//!
//! The rendering surface, the media player widgets and the navigable
//! history stack are owned by the embedding shell; the engine talks to
//! them exclusively through the traits in [`port`].

pub mod history;
pub mod port;

pub use history::{HistorySync, MemoryHistory};
pub use port::{
    HistoryPort, HistoryState, MediaSurface, PlayerTransport, TimerHandle, TimerHost, TimerPurpose,
};
