//! Hosts ask a plugin a fixed set of questions about itself before and during processing. None of
//! the answers change at runtime, so they are collected here as constants on a trait, and the
//! `vst` glue in the crate root forwards host queries to them.

use crate::layout::{is_layout_supported, BusesLayout, ChannelSet, PluginKind};

pub trait ProcessorCapabilities {
    const NAME: &'static str;
    const VENDOR: &'static str;

    const ACCEPTS_MIDI: bool;
    const PRODUCES_MIDI: bool;
    const IS_MIDI_EFFECT: bool;
    const IS_SYNTH: bool;

    const TAIL_LENGTH_SECONDS: f64;
    const NUM_PROGRAMS: i32;
    const HAS_EDITOR: bool;

    /// Bus layout offered to hosts that do not negotiate.
    const DEFAULT_LAYOUT: BusesLayout;

    fn plugin_kind() -> PluginKind {
        if Self::IS_MIDI_EFFECT {
            PluginKind::MidiEffect
        } else if Self::IS_SYNTH {
            PluginKind::Synth
        } else {
            PluginKind::Effect
        }
    }

    fn is_buses_layout_supported(layout: &BusesLayout) -> bool {
        is_layout_supported(layout, Self::plugin_kind())
    }

    fn tail_length_samples(sample_rate: f32) -> isize {
        (Self::TAIL_LENGTH_SECONDS * sample_rate as f64).ceil() as isize
    }

    fn current_program() -> i32 {
        0
    }

    fn program_name(_index: i32) -> String {
        String::new()
    }
}

/// Capabilities of the Overdrive gain effect.
pub struct Overdrive;

impl ProcessorCapabilities for Overdrive {
    const NAME: &'static str = "Overdrive";
    const VENDOR: &'static str = "Overdrive Audio";

    const ACCEPTS_MIDI: bool = false;
    const PRODUCES_MIDI: bool = false;
    const IS_MIDI_EFFECT: bool = false;
    const IS_SYNTH: bool = false;

    const TAIL_LENGTH_SECONDS: f64 = 0.;
    // Some hosts misbehave when told there are no programs at all.
    const NUM_PROGRAMS: i32 = 1;
    const HAS_EDITOR: bool = true;

    const DEFAULT_LAYOUT: BusesLayout = BusesLayout {
        input: ChannelSet::Stereo,
        output: ChannelSet::Stereo,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdrive_is_a_plain_audio_effect() {
        assert_eq!(Overdrive::plugin_kind(), PluginKind::Effect);
        assert!(!Overdrive::ACCEPTS_MIDI);
        assert!(!Overdrive::PRODUCES_MIDI);
        assert!(Overdrive::HAS_EDITOR);
    }

    #[test]
    fn has_no_tail_and_a_single_unnamed_program() {
        assert_eq!(Overdrive::tail_length_samples(48_000.), 0);
        assert_eq!(Overdrive::NUM_PROGRAMS, 1);
        assert_eq!(Overdrive::current_program(), 0);
        assert_eq!(Overdrive::program_name(0), "");
    }

    #[test]
    fn default_layout_is_negotiable() {
        assert!(Overdrive::is_buses_layout_supported(&Overdrive::DEFAULT_LAYOUT));
    }
}
