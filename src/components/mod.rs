//! Small shared view components.

pub mod agency_badge;
pub mod spinner;
