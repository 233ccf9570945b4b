//! Domain types shared across the vetclinic services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts them to and
//! from storage rows.

pub mod id;
pub mod usuario;
