//! Test utilities for vetclinic services.
//!
//! Provides a migrated in-memory database and request body fixtures.
//! Dev-dependency only.

pub mod db;
pub mod fixture;
