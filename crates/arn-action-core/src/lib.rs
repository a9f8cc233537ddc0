//! Core types for the Auto Release Note step: errors, inputs and the
//! subprocess environment.

pub mod env;
pub mod error;
pub mod inputs;

pub use env::Environment;
pub use error::{ActionError, Result};
pub use inputs::{RawInputs, RunInputs, ToRef};
