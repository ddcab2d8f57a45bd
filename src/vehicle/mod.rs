//! Vehicle footprint models used for collision checking

pub mod disc_vehicle;

pub use disc_vehicle::*;
