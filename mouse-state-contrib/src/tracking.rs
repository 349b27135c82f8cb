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

use legion::{system, Resources};
use mouse_state::{MouseStateExtended, MouseTracker, PollerConfig, SnapshotPoller};

/// Add the resources `update_mouse_state` needs.
///
/// Whatever owns the event loop should write to the `SnapshotPoller` resource
/// between schedule runs.
pub fn insert_mouse_resources(resources: &mut Resources, config: PollerConfig) {
    resources.insert(SnapshotPoller::new(config));
    resources.insert(MouseTracker::new());
    resources.insert(MouseStateExtended::default());
}

#[system]
/// Take this tick's snapshot and publish it, compared with last tick's, as the `MouseStateExtended` resource.
pub fn update_mouse_state(
    #[resource] poller: &SnapshotPoller,
    #[resource] tracker: &mut MouseTracker,
    #[resource] state: &mut MouseStateExtended,
) {
    *state = tracker.handle_frame(poller.snapshot());
}
