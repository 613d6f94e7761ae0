//! Overdrive is a minimal VST2 effect with a single gain control.
//!
//! Audio is scaled by the gain on the host's real-time thread, the gain itself lives in a
//! lock-free cell shared with the host's automation and the editor, and an optional editor window
//! shows the gain as a knob that stays in sync with automation.

use std::sync::Arc;

use log::{debug, info};
use vst::{
    api::{Events, Supported},
    buffer::AudioBuffer,
    editor::Editor,
    plugin::{CanDo, Category, HostCallback, Info, Plugin, PluginParameters},
};

mod capabilities;
use capabilities::{Overdrive, ProcessorCapabilities};

mod dsp;
use dsp::PluginDsp;

mod editor;
use editor::PluginEditor;

mod layout;
use layout::BusesLayout;

mod logging;
mod parameter;
mod persistence;

mod plugin_state;
use plugin_state::PluginState;

/// Top level wrapper that exposes a full `vst::Plugin` implementation.
struct OverdriveVst {
    /// The `PluginDsp` handles all of the plugin's audio processing, and is only accessed from the
    /// audio processing thread.
    dsp: PluginDsp,

    /// The `PluginState` holds the long-term state of the plugin. It is shared on the audio
    /// processing thread, the automation thread and the UI thread through lock-free atomics.
    state_handle: Arc<PluginState>,

    /// The `PluginEditor` implements the plugin's custom editor interface. It's temporarily stored
    /// here until being moved to the UI thread by the first `get_editor` method call.
    editor_placeholder: Option<PluginEditor>,

    sample_rate: f32,
}

impl OverdriveVst {
    /// Initializes the VST plugin, along with an optional `HostCallback` handle.
    fn new_maybe_host(maybe_host: Option<HostCallback>) -> Self {
        let state_handle = Arc::new(PluginState::new(maybe_host));

        let editor_placeholder = if Overdrive::HAS_EDITOR {
            Some(PluginEditor::new(Arc::clone(&state_handle)))
        } else {
            None
        };

        let dsp = PluginDsp::new(state_handle.gain());

        Self {
            dsp,
            state_handle,
            editor_placeholder,
            sample_rate: 44_100.,
        }
    }
}

/// `vst::plugin_main` requires a `Default` implementation.
impl Default for OverdriveVst {
    fn default() -> Self {
        Self::new_maybe_host(None)
    }
}

/// Main `vst` plugin implementation.
impl Plugin for OverdriveVst {
    fn new(host: HostCallback) -> Self {
        Self::new_maybe_host(Some(host))
    }

    fn get_info(&self) -> Info {
        /// Use a hash of a string describing this plugin to avoid unique ID conflicts.
        const UNIQUE_ID_SEED: &str = "Overdrive Gain Effect VST2 Plugin";
        static UNIQUE_ID: once_cell::sync::Lazy<i32> = once_cell::sync::Lazy::new(|| {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::{Hash, Hasher};

            let mut s = DefaultHasher::new();
            UNIQUE_ID_SEED.hash(&mut s);
            s.finish() as i32
        });

        Info {
            name: Overdrive::NAME.to_string(),
            vendor: Overdrive::VENDOR.to_string(),
            unique_id: *UNIQUE_ID,
            category: Category::Effect,
            inputs: Overdrive::DEFAULT_LAYOUT.input.channel_count() as i32,
            outputs: Overdrive::DEFAULT_LAYOUT.output.channel_count() as i32,
            midi_inputs: 0,
            midi_outputs: 0,
            parameters: 1,
            presets: Overdrive::NUM_PROGRAMS,
            initial_delay: 0,
            preset_chunks: true,
            ..Info::default()
        }
    }

    fn init(&mut self) {
        logging::init();
        info!(
            "{} initialized with gain {:.2}",
            Overdrive::NAME,
            self.state_handle.gain().get()
        );
    }

    fn set_sample_rate(&mut self, rate: f32) {
        debug!("Sample rate set to {}", rate);
        self.sample_rate = rate;
    }

    fn set_block_size(&mut self, size: i64) {
        debug!("Block size set to {}", size);
    }

    fn process(&mut self, buffer: &mut AudioBuffer<f32>) {
        self.dsp.process(buffer);
    }

    /// MIDI and other events are neither needed nor requested, so anything a host sends anyway
    /// is dropped.
    fn process_events(&mut self, _events: &Events) {}

    fn get_tail_size(&self) -> isize {
        Overdrive::tail_length_samples(self.sample_rate)
    }

    fn can_do(&self, can_do: CanDo) -> Supported {
        let supported = |yes: bool| if yes { Supported::Yes } else { Supported::No };

        match can_do {
            CanDo::ReceiveEvents | CanDo::ReceiveMidiEvent => supported(Overdrive::ACCEPTS_MIDI),
            CanDo::SendEvents | CanDo::SendMidiEvent => supported(Overdrive::PRODUCES_MIDI),
            CanDo::Other(query) => match BusesLayout::from_can_do(&query) {
                Some(layout) => supported(Overdrive::is_buses_layout_supported(&layout)),
                None => Supported::Maybe,
            },
            _ => Supported::Maybe,
        }
    }

    fn get_parameter_object(&mut self) -> Arc<dyn PluginParameters> {
        Arc::clone(&self.state_handle) as Arc<dyn PluginParameters>
    }

    fn get_editor(&mut self) -> Option<Box<dyn Editor>> {
        self.editor_placeholder
            .take()
            .map(|editor| Box::new(editor) as Box<dyn Editor>)
    }
}

vst::plugin_main!(OverdriveVst);
