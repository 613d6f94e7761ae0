//! All the logic behind the editor UI is contained within this module.
//!
//! Fundamentally, the UI is split into graphics rendering and state management in response to
//! input events, both of which are managed within the `EditorInterface` type.

use vst_window::{EditorWindow, EventSource};

mod graphics;
mod state;

use super::attachment::GainAttachment;
use super::EditorRemoteState;
use graphics::RendererError;
use state::InterfaceState;

/// Placement of the controls on the editor window, in pixels from the top-left corner.
mod layout {
    /// Empty margin kept around the controls.
    pub const BORDER: usize = 20;

    /// Center x-coordinate of the gain knob.
    pub const KNOB_X: usize = 200;
    /// Center y-coordinate of the gain knob.
    pub const KNOB_Y: usize = 130;
    pub const KNOB_RADIUS: usize = 100;

    /// Top edge of the level bar shown below the knob.
    pub const BAR_Y: usize = 255;
    pub const BAR_HEIGHT: usize = 20;
}

/// Actual pixel width of the editor window.
pub(super) const SIZE_X: usize = 400;
/// Actual pixel height of the editor window.
pub(super) const SIZE_Y: usize = 300;

/// Represents a window containing an editor interface. A new one is used each time the parent
/// window provided by the host DAW is opened or closed.
pub(super) struct EditorInterface {
    renderer: graphics::Renderer,
    event_source: EventSource,
    state: InterfaceState,
    attachment: GainAttachment,
}

impl EditorInterface {
    /// Setup the `EditorInterface` within the provided parent `EditorWindow` to respond to events
    /// from the corresponding `EventSource`, starting from the current remote state.
    pub fn new<S: EditorRemoteState>(
        window: EditorWindow,
        event_source: EventSource,
        remote_state: &S,
    ) -> Result<Self, RendererError> {
        let renderer = graphics::Renderer::new(window)?;
        let (attachment, knob_value) = GainAttachment::new(remote_state);

        Ok(Self {
            renderer,
            event_source,
            state: InterfaceState::new(knob_value),
            attachment,
        })
    }

    /// Run as much as possible of the editor interface without blocking. This means following any
    /// change to the remote gain, responding to any new window input events, and then rendering
    /// the new state of the UI.
    pub fn run_tasks<S: EditorRemoteState>(&mut self, remote_state: &S) {
        if let Some(value) = self.attachment.poll(remote_state) {
            self.state.react_to_parameter_change(value);
        }

        while let Some(event) = self.event_source.poll_event() {
            self.state
                .react_to_window_event(event, &mut self.attachment, remote_state);
        }

        self.renderer.draw_frame(&self.state);
    }
}
