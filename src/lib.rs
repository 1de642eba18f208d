//! Core valid intraday adapter: bridges task events to the computation service.
//!
//! The task orchestrator publishes a snapshot of a task whenever it changes.
//! Once a task is ready (or finished and re-requested), this crate shares its
//! input files through presigned URLs and submits a run request to the core
//! valid intraday computation service.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`event`]: Task events delivered by the orchestrator
//! - [`computation`]: Computation requests, client and storage ports
//! - [`listener`]: Readiness filter, request mapping and dispatch
//! - [`config`]: Adapter configuration

pub mod computation;
pub mod config;
pub mod event;
pub mod listener;
