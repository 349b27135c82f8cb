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

//! Collects raw input from the windowing layer between ticks.

use crate::{ButtonState, MouseButton, MouseSnapshot};

/// The wheel value one notch of a line-based wheel is worth by default.
pub const WHEEL_DELTA: i32 = 120;

#[derive(Builder, Debug, Clone, Copy, PartialEq)]
#[builder(public, default)]
pub struct PollerConfig {
    /// How much `scroll_wheel_value` moves for one line (notch) of wheel input.
    pub wheel_line_step: i32,

    /// Flip the sign of all wheel input.
    pub invert_wheel: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        PollerConfig {
            wheel_line_step: WHEEL_DELTA,
            invert_wheel: false,
        }
    }
}

/// Accumulates cursor, wheel and button input.
///
/// State is level-triggered: taking a snapshot doesn't reset anything, and the
/// wheel value keeps growing for as long as the poller lives.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPoller {
    config: PollerConfig,
    state: MouseSnapshot,
}

impl SnapshotPoller {
    pub fn new(config: PollerConfig) -> Self {
        SnapshotPoller {
            config,
            state: MouseSnapshot::default(),
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Record a new cursor position. Fractional pixels are floored, and
    /// anything outside the range of an i32 saturates.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.state.x = x.floor() as i32;
        self.state.y = y.floor() as i32;
    }

    /// Record wheel movement reported in lines.
    pub fn wheel_lines(&mut self, lines: f32) {
        let step = self.config.wheel_line_step as f32;
        self.add_scroll((lines * step).round() as i32);
    }

    /// Record wheel movement reported in pixels.
    pub fn wheel_pixels(&mut self, pixels: f64) {
        self.add_scroll(pixels.round() as i32);
    }

    pub fn button_changed(&mut self, button: MouseButton, state: ButtonState) {
        self.state = self.state.with_button(button, state);
    }

    /// Everything recorded so far.
    pub fn snapshot(&self) -> MouseSnapshot {
        self.state
    }

    fn add_scroll(&mut self, amount: i32) {
        let amount = if self.config.invert_wheel {
            amount.wrapping_neg()
        } else {
            amount
        };
        self.state.scroll_wheel_value = self.state.scroll_wheel_value.wrapping_add(amount);
    }
}
