/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Mouse state with edge detection, built from two consecutive snapshots.
//!
//! The windowing layer fills a [`SnapshotPoller`] with raw input. Once per tick
//! its snapshot goes through a [`MouseTracker`], which pairs it with the one
//! from the tick before and hands back a [`MouseStateExtended`] to query.

#[macro_use]
extern crate derive_builder;

pub mod button;
pub mod error;
pub mod poller;
pub mod snapshot;
pub mod state;
pub mod tracker;

#[cfg(feature = "winit")]
mod window_events;

pub use button::{ButtonState, MouseButton};
pub use poller::{PollerConfig, PollerConfigBuilder, SnapshotPoller};
pub use snapshot::MouseSnapshot;
pub use state::MouseStateExtended;
pub use tracker::MouseTracker;

/// Alias for convenience
pub type Vector2i = nalgebra::Vector2<i32>;
