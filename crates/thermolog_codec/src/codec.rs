//! JSON encoding and decoding of readings.

use crate::error::{CodecError, CodecResult};
use crate::reading::Reading;

/// Encodes a single reading as a JSON object.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if serialization fails.
pub fn encode_one(reading: &Reading) -> CodecResult<Vec<u8>> {
    serde_json::to_vec(reading).map_err(|err| CodecError::encoding_failed(err.to_string()))
}

/// Decodes a single reading from a JSON object.
///
/// # Errors
///
/// Returns [`CodecError::MalformedRecord`] if the bytes do not parse.
pub fn decode_one(bytes: &[u8]) -> CodecResult<Reading> {
    serde_json::from_slice(bytes).map_err(|err| CodecError::malformed(err.to_string()))
}

/// Encodes an ordered sequence of readings as a JSON array.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if serialization fails.
pub fn encode_many(readings: &[Reading]) -> CodecResult<Vec<u8>> {
    serde_json::to_vec(readings).map_err(|err| CodecError::encoding_failed(err.to_string()))
}

/// Decodes an ordered sequence of readings from a JSON array.
///
/// On failure the whole blob is unreadable; there is no partial recovery.
///
/// # Errors
///
/// Returns [`CodecError::MalformedRecord`] if the bytes do not parse.
pub fn decode_many(bytes: &[u8]) -> CodecResult<Vec<Reading>> {
    serde_json::from_slice(bytes).map_err(|err| CodecError::malformed(err.to_string()))
}
