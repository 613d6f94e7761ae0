//! The plugin's digital signal processing is fully implemented within this module.
//!
//! Processing runs on the host's real-time audio thread, so it never locks, allocates, or logs.
//! The gain is picked up with a single atomic load at the start of every block and applied
//! uniformly to the whole block.

use std::sync::Arc;

use vst::buffer::AudioBuffer;

use crate::parameter::GainParameter;

mod gain;

/// Handles all audio processing algorithms for the plugin.
pub(super) struct PluginDsp {
    gain: Arc<GainParameter>,
}

impl PluginDsp {
    pub fn new(gain: Arc<GainParameter>) -> Self {
        Self { gain }
    }

    /// Writes every input channel, scaled by the current gain, into the matching output channel.
    /// Outputs beyond the last input are cleared.
    pub fn process(&mut self, buffer: &mut AudioBuffer<f32>) {
        let gain = self.gain.get();

        let num_inputs = buffer.input_count();
        let num_outputs = buffer.output_count();

        let (inputs, mut outputs) = buffer.split();
        for channel in 0..num_outputs {
            if channel < num_inputs {
                gain::scale_into(&inputs[channel], &mut outputs[channel], gain);
            } else {
                gain::silence(&mut outputs[channel]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vst::host::HostBuffer;

    fn run(dsp: &mut PluginDsp, inputs: &[Vec<f32>], outputs: &mut [Vec<f32>]) {
        let mut host_buffer: HostBuffer<f32> = HostBuffer::new(inputs.len(), outputs.len());
        let mut buffer = host_buffer.bind(inputs, outputs);
        dsp.process(&mut buffer);
    }

    #[test]
    fn applies_the_stored_gain_to_every_channel() {
        let gain = Arc::new(GainParameter::new());
        gain.set(1.5);
        let mut dsp = PluginDsp::new(Arc::clone(&gain));

        let inputs = vec![vec![1., 0.5], vec![-1., 0.25]];
        let mut outputs = vec![vec![0.; 2]; 2];
        run(&mut dsp, &inputs, &mut outputs);

        assert_eq!(outputs, vec![vec![1.5, 0.75], vec![-1.5, 0.375]]);
    }

    #[test]
    fn picks_up_new_values_on_the_next_block() {
        let gain = Arc::new(GainParameter::new());
        let mut dsp = PluginDsp::new(Arc::clone(&gain));

        let inputs = vec![vec![1.; 4]];
        let mut outputs = vec![vec![0.; 4]];
        run(&mut dsp, &inputs, &mut outputs);
        assert_eq!(outputs[0], vec![1.; 4]);

        gain.set(0.);
        run(&mut dsp, &inputs, &mut outputs);
        assert_eq!(outputs[0], vec![0.; 4]);
    }

    #[test]
    fn clears_outputs_without_an_input() {
        let gain = Arc::new(GainParameter::new());
        gain.set(2.);
        let mut dsp = PluginDsp::new(gain);

        let inputs = vec![vec![0.5; 3]];
        let mut outputs = vec![vec![7.; 3], vec![7.; 3], vec![-7.; 3]];
        run(&mut dsp, &inputs, &mut outputs);

        assert_eq!(outputs[0], vec![1.; 3]);
        assert_eq!(outputs[1], vec![0.; 3]);
        assert_eq!(outputs[2], vec![0.; 3]);
    }
}
