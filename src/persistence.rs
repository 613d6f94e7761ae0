//! Saving and restoring the plugin's long-term state through VST2 preset chunks.
//!
//! The chunk is a fixed 12-byte record: a magic tag, a format version, and the plain gain value,
//! all in native byte order.

use std::fmt;

use zerocopy::{AsBytes, FromBytes};

const MAGIC: [u8; 4] = *b"OVDG";
const VERSION: u32 = 1;

#[repr(C)]
#[derive(Clone, Copy, AsBytes, FromBytes)]
struct StateChunk {
    magic: [u8; 4],
    version: u32,
    gain: f32,
}

const CHUNK_LEN: usize = std::mem::size_of::<StateChunk>();

/// Reasons a chunk handed back by the host could not be restored.
#[derive(Debug, PartialEq)]
pub enum StateError {
    Truncated { len: usize },
    BadMagic,
    UnsupportedVersion(u32),
    NonFiniteGain,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Truncated { len } => {
                write!(f, "state chunk is {} bytes, expected {}", len, CHUNK_LEN)
            }
            StateError::BadMagic => write!(f, "state chunk does not belong to this plugin"),
            StateError::UnsupportedVersion(version) => {
                write!(f, "state chunk version {} is not supported", version)
            }
            StateError::NonFiniteGain => write!(f, "state chunk holds a non-finite gain"),
        }
    }
}

impl std::error::Error for StateError {}

pub fn encode(gain: f32) -> Vec<u8> {
    StateChunk {
        magic: MAGIC,
        version: VERSION,
        gain,
    }
    .as_bytes()
    .to_vec()
}

/// Returns the stored plain gain. Range clamping is left to the parameter store.
pub fn decode(data: &[u8]) -> Result<f32, StateError> {
    if data.len() < CHUNK_LEN {
        return Err(StateError::Truncated { len: data.len() });
    }

    // Host-owned chunks carry no alignment guarantee, so copy into an aligned record first.
    let mut chunk = StateChunk {
        magic: [0; 4],
        version: 0,
        gain: 0.,
    };
    chunk.as_bytes_mut().copy_from_slice(&data[..CHUNK_LEN]);

    if chunk.magic != MAGIC {
        return Err(StateError::BadMagic);
    }
    if chunk.version != VERSION {
        return Err(StateError::UnsupportedVersion(chunk.version));
    }
    if !chunk.gain.is_finite() {
        return Err(StateError::NonFiniteGain);
    }

    Ok(chunk.gain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_restores_the_saved_gain() {
        let data = encode(0.75);
        assert_eq!(data.len(), CHUNK_LEN);
        assert_eq!(&data[..4], b"OVDG");
        assert_eq!(decode(&data), Ok(0.75));
    }

    #[test]
    fn short_chunks_are_rejected() {
        assert_eq!(decode(&[]), Err(StateError::Truncated { len: 0 }));
        assert_eq!(
            decode(&encode(1.)[..8]),
            Err(StateError::Truncated { len: 8 })
        );
    }

    #[test]
    fn foreign_chunks_are_rejected() {
        let mut data = encode(1.);
        data[0] = b'X';
        assert_eq!(decode(&data), Err(StateError::BadMagic));
    }

    #[test]
    fn future_versions_are_rejected() {
        let mut data = encode(1.);
        data[4..8].copy_from_slice(&2u32.to_ne_bytes());
        assert_eq!(decode(&data), Err(StateError::UnsupportedVersion(2)));
    }

    #[test]
    fn non_finite_gain_is_rejected() {
        assert_eq!(decode(&encode(f32::NAN)), Err(StateError::NonFiniteGain));
        assert_eq!(decode(&encode(f32::INFINITY)), Err(StateError::NonFiniteGain));
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(
            StateError::Truncated { len: 3 }.to_string(),
            "state chunk is 3 bytes, expected 12"
        );
    }
}
