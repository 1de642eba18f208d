//! Inbound task events delivered by the task orchestrator.
//!
//! The orchestrator publishes a snapshot of a task every time its state
//! changes. This module models that snapshot (status, input files and run
//! history) as read-only domain values; the adapter never mutates or stores
//! them.
//!
//! - Domain types in [`domain`]

pub mod domain;
