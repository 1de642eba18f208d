//! Task event handling: readiness filter, request mapping and dispatch.
//!
//! [`TaskEventAdapter`] turns a ready task event into a
//! [`ComputationRequest`](crate::computation::domain::ComputationRequest)
//! and submits it. [`TaskEventListener`] sits in front of it and routes raw
//! payloads from the manual and automatic event bus subscriptions.

mod adapter;
mod channel;
mod error;

pub use adapter::{TaskEventAdapter, TaskHandling, current_run_id};
pub use channel::TaskEventListener;
pub use error::{HandlingFailure, ListenerError, MappingError, TaskAdapterError};
