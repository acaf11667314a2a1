//! # campus-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port):
//!   - `RecordRepository<T>` — add, get, list, update, delete for one record kind
//! - Define **driving/inbound ports** as use-case structs:
//!   - `StudentService` — create, get, list, update, delete students
//!   - `ProfessorService` — the same for professors
//! - Validate and normalize caller input before anything reaches storage
//!
//! ## Dependency rule
//! Depends on `campus-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
