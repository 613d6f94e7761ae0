//! The plugin's only automatable control is kept here as a single lock-free cell.
//!
//! The audio thread reads the gain once per processing block with a plain atomic load, while the
//! host's automation thread and the editor's UI thread write to it. Every write also bumps a change
//! counter, which lets the editor notice values that arrived from somewhere else without any
//! message passing.
//!
//! The value's bits and the counter share one 64-bit word, so a writer's counter always belongs
//! to the value it stored.

use std::sync::atomic::{AtomicU64, Ordering};

/// A snapshot of the gain cell, as seen by a reader that cares about changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GainSnapshot {
    pub value: f32,
    pub version: u32,
}

impl GainSnapshot {
    pub fn normalized(&self) -> f32 {
        GainParameter::normalize(self.value)
    }

    /// Counter in the high half, `f32` bits in the low half.
    fn pack(&self) -> u64 {
        ((self.version as u64) << 32) | self.value.to_bits() as u64
    }

    fn unpack(word: u64) -> Self {
        Self {
            value: f32::from_bits(word as u32),
            version: (word >> 32) as u32,
        }
    }
}

/// Linear gain applied to every sample, stored as its plain value in `MIN..=MAX`.
pub struct GainParameter {
    word: AtomicU64,
}

impl GainParameter {
    /// Stable identifier used for host automation and UI binding.
    pub const ID: &'static str = "gain";
    pub const NAME: &'static str = "Gain";
    pub const LABEL: &'static str = "x";

    pub const MIN: f32 = 0.;
    pub const MAX: f32 = 2.;
    pub const DEFAULT: f32 = 1.;

    pub fn new() -> Self {
        let initial = GainSnapshot {
            value: Self::DEFAULT,
            version: 0,
        };
        Self {
            word: AtomicU64::new(initial.pack()),
        }
    }

    /// Current plain value. Safe to call from the audio thread.
    pub fn get(&self) -> f32 {
        self.snapshot().value
    }

    /// Stores `value` clamped into range and returns the change counter of that write. NaN is
    /// dropped without touching the stored value.
    pub fn set(&self, value: f32) -> u32 {
        self.write(value, || {})
    }

    /// Same as `set`, but runs `interleave` after reading the current word and before trying to
    /// replace it, so tests can land a competing write in that window.
    #[cfg(test)]
    pub(crate) fn set_interleaved(&self, value: f32, interleave: impl FnMut()) -> u32 {
        self.write(value, interleave)
    }

    fn write(&self, value: f32, mut before_exchange: impl FnMut()) -> u32 {
        let mut current = self.word.load(Ordering::Acquire);
        if value.is_nan() {
            return GainSnapshot::unpack(current).version;
        }
        let clamped = value.max(Self::MIN).min(Self::MAX);
        loop {
            before_exchange();
            let next = GainSnapshot {
                value: clamped,
                version: GainSnapshot::unpack(current).version.wrapping_add(1),
            };
            match self.word.compare_exchange_weak(
                current,
                next.pack(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next.version,
                Err(actual) => current = actual,
            }
        }
    }

    /// Current value mapped into the host's normalized `0..=1` range.
    pub fn get_normalized(&self) -> f32 {
        Self::normalize(self.get())
    }

    pub fn set_normalized(&self, normalized: f32) -> u32 {
        self.set(Self::denormalize(normalized))
    }

    /// Value and counter from the same write.
    pub fn snapshot(&self) -> GainSnapshot {
        GainSnapshot::unpack(self.word.load(Ordering::Acquire))
    }

    pub fn normalize(value: f32) -> f32 {
        (value - Self::MIN) / (Self::MAX - Self::MIN)
    }

    pub fn denormalize(normalized: f32) -> f32 {
        Self::MIN + normalized * (Self::MAX - Self::MIN)
    }

    /// Human-readable value shown by hosts below their generic parameter controls.
    pub fn display_text(&self) -> String {
        Self::format_value(self.get())
    }

    /// Text shown for a plain gain value, both to the host and on the editor's readout.
    pub fn format_value(value: f32) -> String {
        format!("{:.2}", value)
    }

    /// Parses text typed into a host's parameter field as a plain gain value.
    pub fn parse_text(text: &str) -> Option<f32> {
        text.trim()
            .trim_end_matches(Self::LABEL)
            .trim_end()
            .parse::<f32>()
            .ok()
            .filter(|value| !value.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_unity() {
        let gain = GainParameter::new();
        assert_eq!(gain.get(), 1.);
        assert_eq!(gain.get_normalized(), 0.5);
    }

    #[test]
    fn out_of_range_writes_are_clamped() {
        let gain = GainParameter::new();

        gain.set(3.5);
        assert_eq!(gain.get(), GainParameter::MAX);

        gain.set(-0.1);
        assert_eq!(gain.get(), GainParameter::MIN);

        gain.set(f32::INFINITY);
        assert_eq!(gain.get(), GainParameter::MAX);

        gain.set_normalized(1.7);
        assert_eq!(gain.get(), GainParameter::MAX);

        gain.set_normalized(-2.);
        assert_eq!(gain.get(), GainParameter::MIN);
    }

    #[test]
    fn nan_is_ignored() {
        let gain = GainParameter::new();
        gain.set(0.75);
        let before = gain.snapshot();

        assert_eq!(gain.set(f32::NAN), before.version);
        assert_eq!(gain.snapshot(), before);
    }

    #[test]
    fn every_write_bumps_the_version() {
        let gain = GainParameter::new();
        let first = gain.set(0.5);
        let second = gain.set(0.5);
        assert_eq!(second, first + 1);
        assert_eq!(gain.snapshot().version, second);
    }

    #[test]
    fn normalized_mapping_covers_the_plain_range() {
        let gain = GainParameter::new();
        gain.set_normalized(0.25);
        assert_eq!(gain.get(), 0.5);
        assert_eq!(GainParameter::normalize(2.), 1.);
        assert_eq!(GainParameter::denormalize(0.), 0.);
    }

    #[test]
    fn text_round_trips_through_the_host_field() {
        let gain = GainParameter::new();
        gain.set(1.234);
        assert_eq!(gain.display_text(), "1.23");

        assert_eq!(GainParameter::parse_text(" 0.5 x"), Some(0.5));
        assert_eq!(GainParameter::parse_text("1.5"), Some(1.5));
        assert_eq!(GainParameter::parse_text("loud"), None);
        assert_eq!(GainParameter::parse_text("NaN"), None);
    }

    #[test]
    fn writes_from_another_thread_become_visible() {
        let gain = std::sync::Arc::new(GainParameter::new());
        let writer = {
            let gain = std::sync::Arc::clone(&gain);
            std::thread::spawn(move || {
                gain.set(0.25);
            })
        };
        writer.join().unwrap();
        assert_eq!(gain.get(), 0.25);
    }

    #[test]
    fn write_racing_another_keeps_its_own_counter() {
        let gain = GainParameter::new();
        let mut automation_pending = true;

        // Automation lands after the editor's write has read the cell but before it commits.
        let ours = gain.set_interleaved(0.2, || {
            if std::mem::replace(&mut automation_pending, false) {
                gain.set(1.5);
            }
        });

        assert_eq!(ours, 2);
        assert_eq!(
            gain.snapshot(),
            GainSnapshot {
                value: 0.2,
                version: ours
            }
        );
    }

    #[test]
    fn concurrent_writers_get_distinct_counters_for_their_own_values() {
        use std::sync::{Arc, Barrier};

        const WRITES: u32 = 2_000;
        let gain = Arc::new(GainParameter::new());
        let barrier = Arc::new(Barrier::new(2));

        let writers: Vec<_> = [0.5f32, 1.5]
            .iter()
            .map(|&value| {
                let gain = Arc::clone(&gain);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    (0..WRITES)
                        .map(|_| (gain.set(value), value))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut writes: Vec<(u32, f32)> = writers
            .into_iter()
            .flat_map(|writer| writer.join().unwrap())
            .collect();
        writes.sort_by_key(|&(version, _)| version);

        let versions: Vec<u32> = writes.iter().map(|&(version, _)| version).collect();
        assert_eq!(versions, (1..=2 * WRITES).collect::<Vec<_>>());

        let &(last_version, last_value) = writes.last().unwrap();
        assert_eq!(
            gain.snapshot(),
            GainSnapshot {
                value: last_value,
                version: last_version
            }
        );
    }

    #[test]
    fn counter_wraps_without_disturbing_the_value() {
        let gain = GainParameter {
            word: AtomicU64::new(
                GainSnapshot {
                    value: 1.,
                    version: u32::MAX,
                }
                .pack(),
            ),
        };
        assert_eq!(gain.set(0.5), 0);
        assert_eq!(
            gain.snapshot(),
            GainSnapshot {
                value: 0.5,
                version: 0
            }
        );
    }
}
