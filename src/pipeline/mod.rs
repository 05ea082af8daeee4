//! Pipeline execution context consumed by filters.

pub mod request;

pub use request::UpdateRequest;
