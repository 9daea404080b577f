//! # rolodex-domain
//!
//! Pure domain model for the rolodex address-book service.
//!
//! ## Responsibilities
//! - Foundational types: the typed person identifier and error conventions
//! - Define the **Person** entity (the single record kind the service stores)
//! - Own the wire conventions: JSON field names, CSV column order, the
//!   partial-update merge rule
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod person;
