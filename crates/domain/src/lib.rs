//! # casahub-domain
//!
//! Pure domain model for the casahub smart-house.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions, timestamps
//! - Define the **device capability set** ([`device::Controllable`]) and its
//!   variants: lights, security cameras, motion sensors
//! - Define **Events** (status records emitted by every state change)
//! - Define the **House** registry and its motion scene
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod event;
pub mod house;
