//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod professor_service;
pub mod record_service;
pub mod student_service;

#[cfg(test)]
mod testing;
