//! Common types, traits, and error definitions for ackermann_local_planner
//!
//! This module provides the foundational building blocks shared by the
//! planner, the vehicle model and the utilities.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
