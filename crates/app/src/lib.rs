//! # rolodex-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound):
//!   - `PersonRepository` — persistence for address-book entries
//! - Define **use-cases** as service structs:
//!   - `PersonService` — create, read, list, replace, delete, and identifier
//!     allocation for persons
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `rolodex-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
