//! Utilities used for testing and benchmarking.

pub mod perft;
pub mod playout;

pub use perft::run_perft;
pub use playout::{random_playout, Playout};
