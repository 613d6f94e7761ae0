//! Parameters are kept as the single "source of truth" for the long-term state of the plugin. As
//! used by the VST API, the parameter bank is accessible by the audio processing thread, the host's
//! automation thread and the UI thread at once.
//!
//! The only long-term state is the gain, which lives in a lock-free `GainParameter` cell shared by
//! `Arc`. The DSP reads it directly, and the editor watches its change counter, so no messages need
//! to be passed around when it changes.

use std::sync::Arc;

use log::{debug, warn};
use vst::{
    host::Host,
    plugin::{HostCallback, PluginParameters},
};

use crate::capabilities::{Overdrive, ProcessorCapabilities};
use crate::parameter::{GainParameter, GainSnapshot};
use crate::persistence;

/// VST2 parameter index of the gain control.
pub const GAIN_INDEX: i32 = 0;

pub struct PluginState {
    host: Option<HostCallback>,
    gain: Arc<GainParameter>,
}

/// VST-accessible long-term plugin state storage.
impl PluginState {
    pub fn new(host: Option<HostCallback>) -> Self {
        Self {
            host,
            gain: Arc::new(GainParameter::new()),
        }
    }

    /// Handle to the gain cell, for consumers that read it directly.
    pub fn gain(&self) -> Arc<GainParameter> {
        Arc::clone(&self.gain)
    }

    fn restore(&self, data: &[u8]) {
        match persistence::decode(data) {
            Ok(gain) => {
                self.gain.set(gain);
                debug!(
                    "Restored {} = {:.2} from state chunk",
                    GainParameter::ID,
                    self.gain.get()
                );
            }
            Err(err) => warn!("Ignoring state chunk: {}", err),
        }
    }
}

/// The DAW directly accesses the plugin state through the VST API to get reports on knob states.
impl PluginParameters for PluginState {
    fn set_parameter(&self, index: i32, value: f32) {
        match index {
            GAIN_INDEX => {
                self.gain.set_normalized(value);
            }
            _ => warn!("Host set unknown parameter {}", index),
        }
    }

    fn get_parameter(&self, index: i32) -> f32 {
        match index {
            GAIN_INDEX => self.gain.get_normalized(),
            _ => 0.,
        }
    }

    fn get_parameter_label(&self, index: i32) -> String {
        match index {
            GAIN_INDEX => GainParameter::LABEL.to_string(),
            _ => String::new(),
        }
    }

    fn get_parameter_text(&self, index: i32) -> String {
        match index {
            GAIN_INDEX => self.gain.display_text(),
            _ => String::new(),
        }
    }

    fn get_parameter_name(&self, index: i32) -> String {
        match index {
            GAIN_INDEX => GainParameter::NAME.to_string(),
            _ => String::new(),
        }
    }

    fn can_be_automated(&self, index: i32) -> bool {
        index == GAIN_INDEX
    }

    /// Typed values are clamped into range rather than refused; only unreadable text fails.
    fn string_to_parameter(&self, index: i32, text: String) -> bool {
        match (index, GainParameter::parse_text(&text)) {
            (GAIN_INDEX, Some(value)) => {
                self.gain.set(value);
                true
            }
            _ => false,
        }
    }

    // There is exactly one program, and it can be neither switched nor renamed.

    fn change_preset(&self, _preset: i32) {}

    fn get_preset_num(&self) -> i32 {
        Overdrive::current_program()
    }

    fn set_preset_name(&self, _name: String) {}

    fn get_preset_name(&self, preset: i32) -> String {
        Overdrive::program_name(preset)
    }

    fn get_preset_data(&self) -> Vec<u8> {
        persistence::encode(self.gain.get())
    }

    fn get_bank_data(&self) -> Vec<u8> {
        persistence::encode(self.gain.get())
    }

    fn load_preset_data(&self, data: &[u8]) {
        self.restore(data);
    }

    fn load_bank_data(&self, data: &[u8]) {
        self.restore(data);
    }
}

/// The editor interface also directly accesses the plugin state through its own API.
impl crate::editor::EditorRemoteState for PluginState {
    fn gain_snapshot(&self) -> GainSnapshot {
        self.gain.snapshot()
    }

    fn set_gain_control(&self, normalized: f32) -> u32 {
        let version = self.gain.set_normalized(normalized);
        if let Some(host) = &self.host {
            host.automate(GAIN_INDEX, self.gain.get_normalized());
        }
        version
    }
}
