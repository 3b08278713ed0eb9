//! Various math utilities.

mod rand;

pub use rand::Mulberry32;
