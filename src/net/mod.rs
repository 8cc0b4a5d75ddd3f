//! Network layer: the REST envelope contract and typed wire structures.

pub mod api;
pub mod types;
