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

use std::fmt;

use crate::MouseSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Whether a single button was held at the moment a snapshot was taken.
pub enum ButtonState {
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
    pub fn is_released(self) -> bool {
        self == ButtonState::Released
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        ButtonState::Released
    }
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A physical mouse button.
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// First side button, usually "back".
    XButton1,
    /// Second side button, usually "forward".
    XButton2,
}

impl MouseButton {
    /// Every button, in declaration order.
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::XButton1,
        MouseButton::XButton2,
    ];
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::XButton1 => "x1",
            MouseButton::XButton2 => "x2",
        };
        f.write_str(name)
    }
}

/// Reads one button's state out of a snapshot.
pub(crate) type ButtonAccessor = fn(&MouseSnapshot) -> ButtonState;

fn left_button_state(m: &MouseSnapshot) -> ButtonState {
    m.left_button
}
fn middle_button_state(m: &MouseSnapshot) -> ButtonState {
    m.middle_button
}
fn right_button_state(m: &MouseSnapshot) -> ButtonState {
    m.right_button
}
fn x_button1_state(m: &MouseSnapshot) -> ButtonState {
    m.x_button1
}
fn x_button2_state(m: &MouseSnapshot) -> ButtonState {
    m.x_button2
}

const BUTTON_ACCESSORS: [(MouseButton, ButtonAccessor); 5] = [
    (MouseButton::Left, left_button_state),
    (MouseButton::Middle, middle_button_state),
    (MouseButton::Right, right_button_state),
    (MouseButton::XButton1, x_button1_state),
    (MouseButton::XButton2, x_button2_state),
];

/// Look up the field accessor for a button.
/// Returns None if the button has no entry in the table.
pub(crate) fn button_accessor(button: MouseButton) -> Option<ButtonAccessor> {
    BUTTON_ACCESSORS
        .iter()
        .find(|(b, _)| *b == button)
        .map(|(_, accessor)| *accessor)
}
