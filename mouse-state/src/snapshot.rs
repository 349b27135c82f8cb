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

//! A read of the whole mouse at one polling tick.
//!
//! Fields are public so snapshots can be built directly. Nothing here mutates a
//! snapshot in place: the `with_*` methods take it by value and return a changed
//! copy, so a snapshot handed to a [`MouseStateExtended`](crate::MouseStateExtended)
//! never changes behind its back.

use crate::button::{button_accessor, ButtonState, MouseButton};
use crate::Vector2i;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MouseSnapshot {
    /// Cursor x, in window pixels.
    pub x: i32,
    /// Cursor y, in window pixels.
    pub y: i32,

    /// Cumulative wheel position since polling started.
    /// One notch of a line-based wheel is worth `PollerConfig::wheel_line_step`.
    pub scroll_wheel_value: i32,

    pub left_button: ButtonState,
    pub middle_button: ButtonState,
    pub right_button: ButtonState,
    pub x_button1: ButtonState,
    pub x_button2: ButtonState,
}

impl MouseSnapshot {
    /// Snapshot at the given position with nothing pressed and no scroll.
    pub fn at(x: i32, y: i32) -> Self {
        MouseSnapshot {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn position(&self) -> Vector2i {
        Vector2i::new(self.x, self.y)
    }

    /// The state of the given button, or `Released` if it has no field here.
    pub fn button(&self, button: MouseButton) -> ButtonState {
        button_accessor(button)
            .map(|accessor| accessor(self))
            .unwrap_or_default()
    }

    /// Copy of this snapshot with one button changed.
    pub fn with_button(mut self, button: MouseButton, state: ButtonState) -> Self {
        match button {
            MouseButton::Left => self.left_button = state,
            MouseButton::Middle => self.middle_button = state,
            MouseButton::Right => self.right_button = state,
            MouseButton::XButton1 => self.x_button1 = state,
            MouseButton::XButton2 => self.x_button2 = state,
        }
        self
    }

    /// Copy of this snapshot with a different wheel value.
    pub fn with_scroll_wheel_value(mut self, value: i32) -> Self {
        self.scroll_wheel_value = value;
        self
    }
}
