//! # casahub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **outbound port** adapters must implement:
//!   - `Reporter` — receives section headers, status events and device statuses
//! - Define the **driving** use-case struct:
//!   - `HouseService` — register devices, switch them, detect motion, describe, run the scene
//! - Provide **in-process infrastructure** (memory reporter) that doesn't need IO
//! - Provide the fixed demonstration script (`demo`)
//!
//! ## Dependency rule
//! Depends on `casahub-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod demo;
pub mod memory_reporter;
pub mod ports;
pub mod services;
