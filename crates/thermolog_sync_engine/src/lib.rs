//! # Thermolog Sync Engine
//!
//! Store-and-forward delivery engine for thermolog.
//!
//! This crate provides:
//! - The [`Publisher`] capability trait over the broker transport
//! - [`SyncEngine`] - drains the pending queue with at-least-once semantics
//! - [`MockPublisher`] and [`LoopbackBroker`] test doubles
//!
//! ## Delivery Model
//!
//! One sync pass gives every pending reading exactly one publish attempt,
//! oldest first. Delivered readings move to the delivery log; failures are
//! collected in order and committed back as the new pending queue in a
//! single terminal write. Entries that repeatedly fail stay pending
//! forever until the separate retention policy trims them.
//!
//! ## Key Invariants
//!
//! - At-least-once: a crash before the terminal commit re-delivers, never
//!   loses
//! - No loss on partial failure: the post-pass queue is exactly the failed
//!   subset, in original relative order
//! - An empty pass performs no store writes
//! - Transport faults never propagate out of a pass

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod loopback;
mod publisher;

pub use config::{SyncConfig, DEFAULT_TOPIC_PREFIX};
pub use engine::{SyncEngine, SyncReport, SyncStats};
pub use error::{SyncError, SyncResult};
pub use loopback::LoopbackBroker;
pub use publisher::{MockPublisher, Publisher};
