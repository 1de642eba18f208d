//! In-memory adapters for the computation client and object storage.
//!
//! These adapters back tests and local wiring; they keep everything in
//! process and never touch the network.

mod client;
mod storage;

pub use client::RecordingComputationClient;
pub use storage::StaticUrlProvider;
