//! # campus-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for students and professors
//!   (`/api/students`, `/api/professors`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: validation failures become
//!   `400` with the reason string, missing records become `404`
//!
//! ## Dependency rule
//! Depends on `campus-app` (for port traits and services) and `campus-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
