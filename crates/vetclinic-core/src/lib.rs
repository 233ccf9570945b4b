//! HTTP plumbing shared by the vetclinic services.

pub mod alert;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
