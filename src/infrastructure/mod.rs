// SPDX-License-Identifier: MPL-2.0
//! Concrete implementations of the engine's ports.

pub mod timers;

pub use timers::TokioTimerHost;
