//! Binds one on-screen control to the gain parameter, in both directions.
//!
//! Writes made through the control are pushed to the remote state immediately. Changes coming from
//! anywhere else (host automation, a restored preset) are noticed by comparing the store's change
//! counter with the last one this attachment saw, and handed back to the control. Since the
//! attachment records the counter of its own writes, those never bounce back into the control.

use super::EditorRemoteState;

pub(in crate::editor) struct GainAttachment {
    last_version: u32,
}

impl GainAttachment {
    /// Attaches to the remote state and returns the control's initial normalized position.
    pub fn new<S: EditorRemoteState>(remote_state: &S) -> (Self, f32) {
        let snapshot = remote_state.gain_snapshot();
        (
            Self {
                last_version: snapshot.version,
            },
            snapshot.normalized(),
        )
    }

    /// Called when the user moves the control to a new normalized position.
    pub fn control_changed<S: EditorRemoteState>(&mut self, remote_state: &S, normalized: f32) {
        self.last_version = remote_state.set_gain_control(normalized);
    }

    /// Returns the control's new normalized position if the stored value was changed by someone
    /// else since the last call.
    pub fn poll<S: EditorRemoteState>(&mut self, remote_state: &S) -> Option<f32> {
        let snapshot = remote_state.gain_snapshot();
        if snapshot.version == self.last_version {
            return None;
        }
        self.last_version = snapshot.version;
        Some(snapshot.normalized())
    }
}

#[cfg(test)]
pub(in crate::editor) mod tests {
    use super::*;
    use crate::parameter::{GainParameter, GainSnapshot};

    /// Remote state backed by a bare parameter cell, standing in for the plugin during tests.
    pub struct LocalState {
        pub gain: GainParameter,
    }

    impl LocalState {
        pub fn new() -> Self {
            Self {
                gain: GainParameter::new(),
            }
        }
    }

    impl EditorRemoteState for LocalState {
        fn gain_snapshot(&self) -> GainSnapshot {
            self.gain.snapshot()
        }

        fn set_gain_control(&self, normalized: f32) -> u32 {
            self.gain.set_normalized(normalized)
        }
    }

    #[test]
    fn starts_at_the_stored_value() {
        let state = LocalState::new();
        state.gain.set(1.5);
        let (mut attachment, position) = GainAttachment::new(&state);
        assert_eq!(position, 0.75);
        assert_eq!(attachment.poll(&state), None);
    }

    #[test]
    fn control_writes_reach_the_store_without_echo() {
        let state = LocalState::new();
        let (mut attachment, _) = GainAttachment::new(&state);

        attachment.control_changed(&state, 0.25);
        assert_eq!(state.gain.get(), 0.5);
        assert_eq!(attachment.poll(&state), None);
    }

    #[test]
    fn automation_reaches_the_control_once() {
        let state = LocalState::new();
        let (mut attachment, _) = GainAttachment::new(&state);

        state.gain.set(2.);
        assert_eq!(attachment.poll(&state), Some(1.));
        assert_eq!(attachment.poll(&state), None);
    }

    #[test]
    fn automation_after_a_control_write_still_arrives() {
        let state = LocalState::new();
        let (mut attachment, _) = GainAttachment::new(&state);

        attachment.control_changed(&state, 0.9);
        state.gain.set(0.);
        assert_eq!(attachment.poll(&state), Some(0.));
    }

    /// Lets one automation write land inside the editor's next write to the cell.
    struct RacingState {
        gain: GainParameter,
        automation: std::cell::Cell<Option<f32>>,
    }

    impl EditorRemoteState for RacingState {
        fn gain_snapshot(&self) -> GainSnapshot {
            self.gain.snapshot()
        }

        fn set_gain_control(&self, normalized: f32) -> u32 {
            self.gain
                .set_interleaved(GainParameter::denormalize(normalized), || {
                    if let Some(value) = self.automation.take() {
                        self.gain.set(value);
                    }
                })
        }
    }

    #[test]
    fn automation_racing_a_control_write_leaves_them_in_agreement() {
        let state = RacingState {
            gain: GainParameter::new(),
            automation: std::cell::Cell::new(None),
        };
        let (mut attachment, _) = GainAttachment::new(&state);

        state.automation.set(Some(1.5));
        attachment.control_changed(&state, 0.1);

        let shown = attachment.poll(&state).unwrap_or(0.1);
        assert_eq!(shown, state.gain.get_normalized());
        assert_eq!(attachment.poll(&state), None);

        state.gain.set(1.5);
        assert_eq!(attachment.poll(&state), Some(0.75));
    }
}
