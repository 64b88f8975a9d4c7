#![forbid(unsafe_code)]

pub mod model;
pub mod numerals;
pub mod rng;

pub use rng::{Lcg, UnitSource, make_generator};
