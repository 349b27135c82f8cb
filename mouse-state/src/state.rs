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

use crate::button::{button_accessor, ButtonAccessor, ButtonState, MouseButton};
use crate::{MouseSnapshot, Vector2i};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The mouse this tick, compared against the mouse last tick.
///
/// `previous` is expected to be the snapshot taken immediately before `current`.
/// Nothing checks this, you just get meaningless deltas if it doesn't hold.
/// Use a [`MouseTracker`](crate::MouseTracker) to keep them in order.
///
/// All deltas are `previous - current`, so moving the cursor right gives a
/// negative `delta_x`.
pub struct MouseStateExtended {
    current: MouseSnapshot,
    previous: MouseSnapshot,
}

impl MouseStateExtended {
    pub fn new(current: MouseSnapshot, previous: MouseSnapshot) -> Self {
        MouseStateExtended { current, previous }
    }

    pub fn current(&self) -> &MouseSnapshot {
        &self.current
    }
    pub fn previous(&self) -> &MouseSnapshot {
        &self.previous
    }

    pub fn x(&self) -> i32 {
        self.current.x
    }
    pub fn y(&self) -> i32 {
        self.current.y
    }
    pub fn position(&self) -> Vector2i {
        self.current.position()
    }
    pub fn position_changed(&self) -> bool {
        self.current.position() != self.previous.position()
    }

    pub fn delta_x(&self) -> i32 {
        self.previous.x.wrapping_sub(self.current.x)
    }
    pub fn delta_y(&self) -> i32 {
        self.previous.y.wrapping_sub(self.current.y)
    }
    pub fn delta_position(&self) -> Vector2i {
        Vector2i::new(self.delta_x(), self.delta_y())
    }

    pub fn scroll_wheel_value(&self) -> i32 {
        self.current.scroll_wheel_value
    }
    pub fn delta_scroll_wheel_value(&self) -> i32 {
        self.previous
            .scroll_wheel_value
            .wrapping_sub(self.current.scroll_wheel_value)
    }

    pub fn left_button(&self) -> ButtonState {
        self.current.left_button
    }
    pub fn middle_button(&self) -> ButtonState {
        self.current.middle_button
    }
    pub fn right_button(&self) -> ButtonState {
        self.current.right_button
    }
    pub fn x_button1(&self) -> ButtonState {
        self.current.x_button1
    }
    pub fn x_button2(&self) -> ButtonState {
        self.current.x_button2
    }

    /// True if the button is held this tick.
    ///
    /// This and the other button queries return false for a button with no
    /// accessor, rather than failing.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.query(button, Self::is_pressed)
    }

    /// True if the button is not held this tick.
    pub fn is_button_up(&self, button: MouseButton) -> bool {
        self.query(button, Self::is_released)
    }

    /// True only on the tick the button went from released to pressed.
    pub fn was_button_just_down(&self, button: MouseButton) -> bool {
        self.query(button, Self::was_just_pressed)
    }

    /// True only on the tick the button went from pressed to released.
    pub fn was_button_just_up(&self, button: MouseButton) -> bool {
        self.query(button, Self::was_just_released)
    }

    fn query(&self, button: MouseButton, check: fn(&Self, ButtonAccessor) -> bool) -> bool {
        self.query_with(button_accessor(button), check)
    }

    fn query_with(
        &self,
        accessor: Option<ButtonAccessor>,
        check: fn(&Self, ButtonAccessor) -> bool,
    ) -> bool {
        match accessor {
            Some(accessor) => check(self, accessor),
            None => false,
        }
    }

    fn is_pressed(&self, button: ButtonAccessor) -> bool {
        button(&self.current) == ButtonState::Pressed
    }
    fn is_released(&self, button: ButtonAccessor) -> bool {
        button(&self.current) == ButtonState::Released
    }
    fn was_just_pressed(&self, button: ButtonAccessor) -> bool {
        button(&self.previous) == ButtonState::Released
            && button(&self.current) == ButtonState::Pressed
    }
    fn was_just_released(&self, button: ButtonAccessor) -> bool {
        button(&self.previous) == ButtonState::Pressed
            && button(&self.current) == ButtonState::Released
    }
}
