//! Foundation layer: types, time arithmetic, estimator contract.

pub mod estimator;
pub mod time;
pub mod types;
