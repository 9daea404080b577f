//! # rolodex-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the address-book REST API (`/people`, `/person`, `/person/{id}`)
//!   and the CSV bulk endpoints (`/import`, `/export`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into status codes with
//!   human-readable plain-text bodies
//!
//! ## Status-code conventions
//! The API is plain-text-first and keeps a few long-standing conventions
//! that clients rely on:
//! - An unparseable JSON body is `500`, not `400`.
//! - A numeric path identifier above the 64-bit range is `409`; a
//!   non-numeric one behaves like an unknown route (`404`, empty body).
//! - Listing or exporting an empty address book is `500`.
//! - A matched path with a disallowed method is `405` with the fixed body
//!   `Method Not Allowed.`.
//!
//! ## Dependency rule
//! Depends on `rolodex-app` (for the port trait and service) and
//! `rolodex-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
