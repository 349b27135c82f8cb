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

use log::trace;

use crate::{MouseSnapshot, MouseStateExtended};

/// Remembers the last snapshot so each tick can be compared with the one before it.
#[derive(Debug, Clone, Default)]
pub struct MouseTracker {
    previous: MouseSnapshot,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking from a known snapshot, so the first frame has no spurious delta.
    pub fn starting_at(snapshot: MouseSnapshot) -> Self {
        MouseTracker { previous: snapshot }
    }

    /// The snapshot the next frame will be compared against.
    pub fn previous(&self) -> &MouseSnapshot {
        &self.previous
    }

    /// Pair this tick's snapshot with the last one, and remember it for next tick.
    pub fn handle_frame(&mut self, current: MouseSnapshot) -> MouseStateExtended {
        let state = MouseStateExtended::new(current, self.previous);
        self.previous = current;

        trace!(
            "mouse frame at {:?}, delta {:?}, scroll delta {}",
            (state.x(), state.y()),
            (state.delta_x(), state.delta_y()),
            state.delta_scroll_wheel_value()
        );

        state
    }
}
