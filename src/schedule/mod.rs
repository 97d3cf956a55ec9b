/// Alignment hold placement and count degradation.
pub mod scheduler;
