//! Channel bus layouts and the rules deciding which of them the plugin can run with.
//!
//! VST2 hosts ask about channel configurations through `canDo` strings such as `"2in2out"`, so
//! this module also knows how to read a layout out of one of those.

/// The channel configuration of a single bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelSet {
    Disabled,
    Mono,
    Stereo,
    Discrete(u16),
}

impl ChannelSet {
    pub fn from_channel_count(count: usize) -> Self {
        match count {
            0 => ChannelSet::Disabled,
            1 => ChannelSet::Mono,
            2 => ChannelSet::Stereo,
            n => ChannelSet::Discrete(n.min(u16::MAX as usize) as u16),
        }
    }

    pub fn channel_count(self) -> usize {
        match self {
            ChannelSet::Disabled => 0,
            ChannelSet::Mono => 1,
            ChannelSet::Stereo => 2,
            ChannelSet::Discrete(n) => n as usize,
        }
    }
}

/// The main input and output buses requested by a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusesLayout {
    pub input: ChannelSet,
    pub output: ChannelSet,
}

impl BusesLayout {
    pub fn new(input: ChannelSet, output: ChannelSet) -> Self {
        Self { input, output }
    }

    /// Parses a VST2 channel configuration query of the form `"<inputs>in<outputs>out"`.
    pub fn from_can_do(query: &str) -> Option<Self> {
        let rest = query.strip_suffix("out")?;
        let split = rest.find("in")?;
        let inputs = rest[..split].parse::<usize>().ok()?;
        let outputs = rest[split + 2..].parse::<usize>().ok()?;
        Some(Self::new(
            ChannelSet::from_channel_count(inputs),
            ChannelSet::from_channel_count(outputs),
        ))
    }
}

/// What kind of processor is asking for a layout, which changes the rules that apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginKind {
    Effect,
    Synth,
    MidiEffect,
}

/// Accepts only mono or stereo outputs, and for effects only when the input matches the output.
/// MIDI effects carry no audio and accept anything.
pub fn is_layout_supported(layout: &BusesLayout, kind: PluginKind) -> bool {
    if kind == PluginKind::MidiEffect {
        return true;
    }

    if layout.output != ChannelSet::Mono && layout.output != ChannelSet::Stereo {
        return false;
    }

    kind == PluginKind::Synth || layout.input == layout.output
}
