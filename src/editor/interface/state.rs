//! The editor interface is scheduled to be drawn periodically by the host DAW. Some state must be
//! kept to maintain a consistent appearance across frames. This module contains the
//! `InterfaceState` struct along with logic to update it in response to window events like clicks,
//! drags, etc. as well as from external parameter changes.

use vst_window::{MouseButton, WindowEvent};

use super::{
    layout::{KNOB_RADIUS, KNOB_X, KNOB_Y},
    SIZE_X, SIZE_Y,
};
use crate::editor::{attachment::GainAttachment, EditorRemoteState};
use crate::parameter::GainParameter;

/// All the possible ways a click+drag operation on the interface window might be interpreted.
enum DragBehavior {
    TurnGainKnob { click_y: isize, original_value: f32 },
}

/// Holds any state required to render and update the editor interface.
pub(in crate::editor) struct InterfaceState {
    /// Represents the position of the knob, from 0 to 1.
    pub knob_value: f32,
    /// (X, Y) pixel coordinate of the cursor, from the top-left corner.
    /// Coordinates could be negative if the cursor is dragged outside of the window!
    cursor_pos: (isize, isize),
    drag_behavior: Option<DragBehavior>,
}

/// Fraction of the knob's range covered by dragging across the full window height.
const KNOB_CHANGE_SPEED: f32 = 0.5;

impl InterfaceState {
    pub fn new(knob_value: f32) -> Self {
        Self {
            knob_value,
            cursor_pos: Default::default(),
            drag_behavior: None,
        }
    }

    /// Plain gain value currently shown by the knob.
    pub fn gain(&self) -> f32 {
        GainParameter::denormalize(self.knob_value)
    }

    /// Follow a change to the gain that did not come from this editor.
    pub fn react_to_parameter_change(&mut self, knob_value: f32) {
        self.knob_value = knob_value;
    }

    /// Update the editor state and remote state store as necessary in response to an interaction
    /// with the editor window.
    pub fn react_to_window_event<S: EditorRemoteState>(
        &mut self,
        event: WindowEvent,
        attachment: &mut GainAttachment,
        remote_state: &S,
    ) {
        match event {
            WindowEvent::CursorMovement(x, y) => {
                self.cursor_pos = ((x * SIZE_X as f32) as isize, (y * SIZE_Y as f32) as isize);
                if let Some(DragBehavior::TurnGainKnob {
                    click_y,
                    original_value,
                }) = self.drag_behavior
                {
                    let diff_y = click_y - self.cursor_pos.1;
                    self.knob_value = (original_value
                        + diff_y as f32 / SIZE_Y as f32 * KNOB_CHANGE_SPEED)
                        .max(0.)
                        .min(1.);
                    attachment.control_changed(remote_state, self.knob_value);
                }
            }
            WindowEvent::MouseClick(button) if self.cursor_over_knob() => {
                if button == MouseButton::Left {
                    self.drag_behavior = Some(DragBehavior::TurnGainKnob {
                        click_y: self.cursor_pos.1,
                        original_value: self.knob_value,
                    });
                } else if button == MouseButton::Right {
                    self.knob_value = GainParameter::normalize(GainParameter::DEFAULT);
                    attachment.control_changed(remote_state, self.knob_value);
                }
            }
            WindowEvent::MouseRelease(MouseButton::Left) => {
                self.drag_behavior = None;
            }
            _ => (),
        }
    }

    fn cursor_over_knob(&self) -> bool {
        let (x, y) = self.cursor_pos;
        let dx = x - KNOB_X as isize;
        let dy = y - KNOB_Y as isize;
        dx * dx + dy * dy < (KNOB_RADIUS * KNOB_RADIUS) as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::attachment::tests::LocalState;

    /// Window-relative cursor position of a pixel coordinate.
    fn cursor_at(x: usize, y: usize) -> WindowEvent {
        WindowEvent::CursorMovement(x as f32 / SIZE_X as f32, y as f32 / SIZE_Y as f32)
    }

    fn setup() -> (InterfaceState, GainAttachment, LocalState) {
        let remote = LocalState::new();
        let (attachment, knob_value) = GainAttachment::new(&remote);
        (InterfaceState::new(knob_value), attachment, remote)
    }

    #[test]
    fn dragging_up_raises_the_gain() {
        let (mut state, mut attachment, remote) = setup();

        state.react_to_window_event(cursor_at(KNOB_X, KNOB_Y), &mut attachment, &remote);
        state.react_to_window_event(
            WindowEvent::MouseClick(MouseButton::Left),
            &mut attachment,
            &remote,
        );
        state.react_to_window_event(cursor_at(KNOB_X, KNOB_Y - 60), &mut attachment, &remote);

        assert!(state.knob_value > 0.5);
        assert_eq!(remote.gain.get_normalized(), state.knob_value);
        assert_eq!(attachment.poll(&remote), None);
    }

    #[test]
    fn releasing_ends_the_drag() {
        let (mut state, mut attachment, remote) = setup();

        state.react_to_window_event(cursor_at(KNOB_X, KNOB_Y), &mut attachment, &remote);
        state.react_to_window_event(
            WindowEvent::MouseClick(MouseButton::Left),
            &mut attachment,
            &remote,
        );
        state.react_to_window_event(
            WindowEvent::MouseRelease(MouseButton::Left),
            &mut attachment,
            &remote,
        );
        state.react_to_window_event(cursor_at(KNOB_X, 0), &mut attachment, &remote);

        assert_eq!(state.knob_value, 0.5);
        assert_eq!(remote.gain.get(), GainParameter::DEFAULT);
    }

    #[test]
    fn dragging_is_clamped_to_the_knob_range() {
        let (mut state, mut attachment, remote) = setup();

        state.react_to_window_event(cursor_at(KNOB_X, KNOB_Y), &mut attachment, &remote);
        state.react_to_window_event(
            WindowEvent::MouseClick(MouseButton::Left),
            &mut attachment,
            &remote,
        );
        state.react_to_window_event(
            WindowEvent::CursorMovement(0.5, 4.),
            &mut attachment,
            &remote,
        );

        assert_eq!(state.knob_value, 0.);
        assert_eq!(remote.gain.get(), GainParameter::MIN);
    }

    #[test]
    fn right_click_resets_to_unity() {
        let (mut state, mut attachment, remote) = setup();
        remote.gain.set(1.8);
        state.react_to_parameter_change(attachment.poll(&remote).unwrap_or_default());

        state.react_to_window_event(cursor_at(KNOB_X + 10, KNOB_Y), &mut attachment, &remote);
        state.react_to_window_event(
            WindowEvent::MouseClick(MouseButton::Right),
            &mut attachment,
            &remote,
        );

        assert_eq!(state.gain(), 1.);
        assert_eq!(remote.gain.get(), 1.);
    }

    #[test]
    fn clicks_outside_the_knob_are_ignored() {
        let (mut state, mut attachment, remote) = setup();

        state.react_to_window_event(cursor_at(5, 5), &mut attachment, &remote);
        state.react_to_window_event(
            WindowEvent::MouseClick(MouseButton::Right),
            &mut attachment,
            &remote,
        );
        remote.gain.set(0.2);
        state.react_to_window_event(
            WindowEvent::MouseClick(MouseButton::Right),
            &mut attachment,
            &remote,
        );

        assert_eq!(remote.gain.get(), 0.2);
    }
}
