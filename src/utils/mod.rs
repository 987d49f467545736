//! Small numeric helpers shared by the view and the statistics engine

pub mod comparison;

pub use comparison::{safe_float_cmp, mean, percentage};
