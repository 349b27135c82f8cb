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

//! Opens a window and logs what the mouse does inside it.

use anyhow::{Context, Result};
use legion::{system, Resources, Schedule, World};
use log::{debug, info};
use mouse_state::{MouseButton, MouseStateExtended, PollerConfigBuilder, SnapshotPoller};
use mouse_state_contrib::tracking::{insert_mouse_resources, update_mouse_state_system};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

#[system]
fn log_mouse(#[resource] state: &MouseStateExtended) {
    for button in MouseButton::ALL.iter() {
        if state.was_button_just_down(*button) {
            info!("{} down at ({}, {})", button, state.x(), state.y());
        }
        if state.was_button_just_up(*button) {
            info!("{} up at ({}, {})", button, state.x(), state.y());
        }
    }

    // Deltas are previous - current, so flip them to get the direction of travel.
    if state.delta_scroll_wheel_value() != 0 {
        info!("Scrolled {}", -state.delta_scroll_wheel_value());
    }
    if state.position_changed() {
        debug!("Moved by {:?}", -state.delta_position());
    }
}

fn main() {
    // anyhow's Debug output includes the whole cause chain.
    if let Err(err) = try_main() {
        eprintln!("Error: {:?}", err);
    }
}

fn try_main() -> Result<()> {
    simplelog::TermLogger::init(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initialising logger")?;

    // Make a window
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("mouse-log")
        .build(&event_loop)
        .context("Error creating window")?;

    let config = PollerConfigBuilder::default()
        .build()
        .context("Error building poller config")?;

    let mut world = World::default();
    let mut resources = Resources::default();
    insert_mouse_resources(&mut resources, config);

    let mut schedule = Schedule::builder()
        .add_system(update_mouse_state_system())
        .flush()
        .add_system(log_mouse_system())
        .build();

    info!("Click, scroll or move inside the window. Close it to quit.");

    // Events fill in the poller, and each batch of them is one tick.
    event_loop.run(move |event, _, flow| {
        *flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                if let WindowEvent::CloseRequested = event {
                    *flow = ControlFlow::Exit;
                    return;
                }

                if let Some(mut poller) = resources.get_mut::<SnapshotPoller>() {
                    poller.handle_event(&event);
                }
            }
            Event::MainEventsCleared => {
                schedule.execute(&mut world, &mut resources);
            }
            _ => {}
        }
    });
}
