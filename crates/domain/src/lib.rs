//! # campus-domain
//!
//! Pure domain model for the campus registry.
//!
//! ## Responsibilities
//! - Foundational types: typed record identifiers, error conventions
//! - Describe each record kind's fields as data (**field schemas**)
//! - Define **Students** (`name`, `course`)
//! - Define **Professors** (`name`, `department`, `email`, optional `title`)
//! - Turn raw caller input (**drafts**) into validated, trimmed records
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;
pub mod schema;

pub mod professor;
pub mod student;
