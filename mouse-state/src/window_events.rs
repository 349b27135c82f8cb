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

//! Feeding winit window events into a [`SnapshotPoller`].

use std::convert::TryFrom;

use log::debug;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use crate::error::UnknownButton;
use crate::{ButtonState, MouseButton, SnapshotPoller};

impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = UnknownButton;

    /// Side buttons arrive as `Other`, numbered differently per platform:
    /// Windows uses 1 and 2, X11 uses 8 and 9.
    fn try_from(button: winit::event::MouseButton) -> Result<Self, Self::Error> {
        use winit::event::MouseButton as W;

        match button {
            W::Left => Ok(MouseButton::Left),
            W::Middle => Ok(MouseButton::Middle),
            W::Right => Ok(MouseButton::Right),
            W::Other(1) | W::Other(8) => Ok(MouseButton::XButton1),
            W::Other(2) | W::Other(9) => Ok(MouseButton::XButton2),
            W::Other(code) => Err(UnknownButton(code.into())),
        }
    }
}

impl From<ElementState> for ButtonState {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => ButtonState::Pressed,
            ElementState::Released => ButtonState::Released,
        }
    }
}

impl SnapshotPoller {
    /// Record a window event.
    /// Returns false if it wasn't a mouse event.
    pub fn handle_event(&mut self, event: &WindowEvent<'_>) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, lines) => self.wheel_lines(*lines),
                MouseScrollDelta::PixelDelta(pixels) => self.wheel_pixels(pixels.y),
            },
            WindowEvent::MouseInput { state, button, .. } => {
                match MouseButton::try_from(*button) {
                    Ok(button) => self.button_changed(button, (*state).into()),
                    Err(e) => debug!("Ignoring input from mouse button: {}", e),
                }
            }
            _ => return false,
        }

        true
    }
}
