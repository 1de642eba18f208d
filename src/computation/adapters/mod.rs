//! Adapter implementations for computation ports.

pub mod memory;
