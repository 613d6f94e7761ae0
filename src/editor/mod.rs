//! In VST terminology, the editor is a graphical window that can be used to display and interact
//! with a plugin using a custom visual appearance.
//!
//! The editor interface runs fully on the UI thread. It manages an OS window through a
//! cross-platform API exposed by the `vst_window` crate, turns mouse input into gain changes, and
//! follows changes made by host automation on every idle tick.

use std::sync::Arc;

use log::{debug, error};
use vst::editor::Editor;
use vst_window::setup;

use crate::parameter::GainSnapshot;
use crate::plugin_state::PluginState;

mod attachment;
mod interface;
use interface::{EditorInterface, SIZE_X, SIZE_Y};

/// Persistent VST-compatible wrapper that opens and closes an `EditorInterface`.
pub(super) struct PluginEditor {
    opened_interface: Option<EditorInterface>,
    remote_state: Arc<PluginState>,
}

impl PluginEditor {
    pub fn new(remote_state: Arc<PluginState>) -> Self {
        Self {
            opened_interface: None,
            remote_state,
        }
    }
}

/// `PluginEditor` responds directly to VST API calls specific to the UI thread.
impl Editor for PluginEditor {
    fn size(&self) -> (i32, i32) {
        (SIZE_X as i32, SIZE_Y as i32)
    }

    fn position(&self) -> (i32, i32) {
        (0, 0)
    }

    fn open(&mut self, parent: *mut core::ffi::c_void) -> bool {
        if self.opened_interface.is_some() {
            return false;
        }

        let (window, event_source) = setup(parent, (SIZE_X as i32, SIZE_Y as i32));
        match EditorInterface::new(window, event_source, &*self.remote_state) {
            Ok(interface) => {
                debug!("Editor opened");
                self.opened_interface = Some(interface);
                true
            }
            Err(err) => {
                error!("Could not open editor: {}", err);
                false
            }
        }
    }

    fn close(&mut self) {
        if self.opened_interface.take().is_some() {
            debug!("Editor closed");
        }
    }

    fn is_open(&mut self) -> bool {
        self.opened_interface.is_some()
    }

    fn idle(&mut self) {
        if let Some(opened_interface) = &mut self.opened_interface {
            opened_interface.run_tasks(&*self.remote_state);
        }
    }
}

/// The editor interface holds a handle directly to the remote VST plugin state, which should
/// implement this trait.
pub(super) trait EditorRemoteState {
    /// Current gain along with its change counter.
    fn gain_snapshot(&self) -> GainSnapshot;
    /// Sets the gain from a normalized control position between 0 and 1, notifies the host, and
    /// returns the store's change counter after the write.
    fn set_gain_control(&self, normalized: f32) -> u32;
}
