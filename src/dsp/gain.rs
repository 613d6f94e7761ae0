/// Writes `input * gain` into `output`. Only the overlapping length of the two slices is touched.
pub(super) fn scale_into(input: &[f32], output: &mut [f32], gain: f32) {
    output
        .iter_mut()
        .zip(input)
        .for_each(|(out, sample)| *out = *sample * gain);
}

/// Output channels without a matching input may hold garbage from the host.
pub(super) fn silence(output: &mut [f32]) {
    output.iter_mut().for_each(|sample| *sample = 0.);
}
