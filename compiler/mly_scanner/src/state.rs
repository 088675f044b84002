//! Scanner state persisted across scan calls.
//!
//! The host engine snapshots the state after every call and restores it
//! before the next one when it reparses incrementally. The encoding is
//! `[in_string flag, tag bytes...]`; the buffer length delimits the tag.
//! An empty buffer is the default state.
//!
//! Any change to this encoding is breaking: hosts that get a
//! [`StateError`] must drop the snapshot and reparse from scratch.

use smallvec::SmallVec;
use thiserror::Error;

use crate::classify::is_tag_byte;

/// Capacity of the host engine's per-scanner serialization buffer.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Tag of the quoted string being scanned (`abc` in `{abc|...|abc}`).
pub type QuotedTag = SmallVec<[u8; 16]>;

/// Failure to encode or decode a [`ScannerState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("scanner state needs {needed} bytes but the buffer holds {available}")]
    BufferTooSmall { needed: usize, available: usize },
    #[error("invalid in-string flag byte {0:#04x}")]
    InvalidFlag(u8),
    #[error("invalid quoted-string tag byte {byte:#04x} at offset {offset}")]
    InvalidTagByte { byte: u8, offset: usize },
}

/// The only state that outlives a single scan call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannerState {
    /// Inside a grammar-level string opened by a `"` delimiter token.
    pub in_string: bool,
    /// Tag chosen at the latest quoted-string opening. Only meaningful
    /// between an opening match and its close or abandonment; empty otherwise.
    pub quoted_tag: QuotedTag,
}

impl ScannerState {
    /// Number of bytes [`serialize_into`](Self::serialize_into) writes.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        1 + self.quoted_tag.len()
    }

    /// Write the encoding into `buf`, returning the number of bytes written.
    pub fn serialize_into(&self, buf: &mut [u8]) -> Result<usize, StateError> {
        let needed = self.encoded_len();
        let Some(out) = buf.get_mut(..needed) else {
            return Err(StateError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        };
        out[0] = u8::from(self.in_string);
        out[1..].copy_from_slice(&self.quoted_tag);
        Ok(needed)
    }

    /// The encoding as an owned byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.push(u8::from(self.in_string));
        bytes.extend_from_slice(&self.quoted_tag);
        bytes
    }

    /// Decode a state. Empty input is the default state.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let Some((&flag, tag)) = bytes.split_first() else {
            return Ok(Self::default());
        };
        let in_string = match flag {
            0 => false,
            1 => true,
            other => return Err(StateError::InvalidFlag(other)),
        };
        if let Some(offset) = tag.iter().position(|&b| !is_tag_byte(b)) {
            return Err(StateError::InvalidTagByte {
                byte: tag[offset],
                offset: offset + 1,
            });
        }
        Ok(Self {
            in_string,
            quoted_tag: QuotedTag::from_slice(tag),
        })
    }
}
