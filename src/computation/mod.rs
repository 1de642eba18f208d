//! Outbound computation requests and the collaborators that serve them.
//!
//! A computation request bundles the seven input files of a capacity
//! validation run, each exposed through a presigned URL, together with the
//! run that triggered it. The module follows the same hexagonal layout as
//! the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
