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
#![cfg(feature = "winit")]

use std::convert::TryFrom;

use mouse_state::error::UnknownButton;
use mouse_state::{ButtonState, MouseButton};
use winit::event::{ElementState, MouseButton as WinitButton};

#[test]
fn main_buttons_map_directly() {
    assert_eq!(MouseButton::try_from(WinitButton::Left), Ok(MouseButton::Left));
    assert_eq!(MouseButton::try_from(WinitButton::Middle), Ok(MouseButton::Middle));
    assert_eq!(MouseButton::try_from(WinitButton::Right), Ok(MouseButton::Right));
}

#[test]
fn side_buttons_on_each_platform() {
    assert_eq!(MouseButton::try_from(WinitButton::Other(1)), Ok(MouseButton::XButton1));
    assert_eq!(MouseButton::try_from(WinitButton::Other(2)), Ok(MouseButton::XButton2));
    assert_eq!(MouseButton::try_from(WinitButton::Other(8)), Ok(MouseButton::XButton1));
    assert_eq!(MouseButton::try_from(WinitButton::Other(9)), Ok(MouseButton::XButton2));
}

#[test]
fn other_codes_are_unknown() {
    assert_eq!(MouseButton::try_from(WinitButton::Other(12)), Err(UnknownButton(12)));
    assert_eq!(
        UnknownButton(12).to_string(),
        "Unknown mouse button code 12"
    );
}

#[test]
fn element_state() {
    assert_eq!(ButtonState::from(ElementState::Pressed), ButtonState::Pressed);
    assert_eq!(ButtonState::from(ElementState::Released), ButtonState::Released);
}

#[allow(deprecated)]
mod handle_event {
    use mouse_state::{ButtonState, MouseButton, MouseSnapshot, PollerConfigBuilder, SnapshotPoller};
    use winit::dpi::PhysicalPosition;
    use winit::event::{
        DeviceId, ElementState, ModifiersState, MouseButton as WinitButton, MouseScrollDelta,
        TouchPhase, WindowEvent,
    };

    fn device() -> DeviceId {
        unsafe { DeviceId::dummy() }
    }

    fn press(button: WinitButton) -> WindowEvent<'static> {
        WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button,
            modifiers: ModifiersState::empty(),
        }
    }

    #[test]
    fn non_mouse_events_are_ignored() {
        let mut poller = SnapshotPoller::default();
        assert!(!poller.handle_event(&WindowEvent::Focused(true)));
        assert_eq!(poller.snapshot(), MouseSnapshot::default());
    }

    #[test]
    fn cursor_position_is_floored() {
        let mut poller = SnapshotPoller::default();
        let moved = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(3.7, -1.2),
            modifiers: ModifiersState::empty(),
        };

        assert!(poller.handle_event(&moved));
        assert_eq!((poller.snapshot().x, poller.snapshot().y), (3, -2));
    }

    #[test]
    fn line_delta_scales_by_step() {
        let config = PollerConfigBuilder::default()
            .wheel_line_step(40)
            .build()
            .unwrap();
        let mut poller = SnapshotPoller::new(config);
        let wheel = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, 3.0),
            phase: TouchPhase::Moved,
            modifiers: ModifiersState::empty(),
        };

        assert!(poller.handle_event(&wheel));
        assert_eq!(poller.snapshot().scroll_wheel_value, 120);
    }

    #[test]
    fn side_button_press_is_recorded() {
        let mut poller = SnapshotPoller::default();

        assert!(poller.handle_event(&press(WinitButton::Other(8))));
        assert_eq!(
            poller.snapshot().button(MouseButton::XButton1),
            ButtonState::Pressed
        );
        assert_eq!(
            poller.snapshot().button(MouseButton::XButton2),
            ButtonState::Released
        );
    }

    #[test]
    fn unknown_button_is_consumed_without_changes() {
        let mut poller = SnapshotPoller::default();
        poller.handle_event(&press(WinitButton::Left));
        let before = poller.snapshot();

        assert!(poller.handle_event(&press(WinitButton::Other(42))));
        assert_eq!(poller.snapshot(), before);
    }
}
