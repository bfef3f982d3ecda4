//! `swissslip-core`: building blocks shared by the slip crates.
//!
//! This crate contains **pure** primitives (no IO).

pub mod error;
pub mod field;
pub mod value_object;

pub use error::{SlipError, SlipResult};
pub use field::Field;
pub use value_object::ValueObject;
