//! # Thermolog Codec
//!
//! Reading model and JSON record codec for thermolog.
//!
//! This crate owns the [`Reading`] value object and its byte encoding.
//! Persisted blobs and published payloads are plain JSON: a single object
//! per reading, an array of objects per sequence.
//!
//! ## Decode Failure Policy
//!
//! A sequence blob that fails to decode is unreadable as a whole - there is
//! no partial recovery. Callers discard the blob and start a fresh sequence.
//!
//! ## Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use thermolog_codec::{decode_many, encode_many, Reading};
//!
//! let readings = vec![Reading::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap(), 21.5)];
//! let bytes = encode_many(&readings).unwrap();
//! let decoded = decode_many(&bytes).unwrap();
//! assert_eq!(readings, decoded);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod error;
mod reading;

pub use codec::{decode_many, decode_one, encode_many, encode_one};
pub use error::{CodecError, CodecResult};
pub use reading::{Reading, UNKNOWN_DEVICE};
