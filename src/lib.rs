mod core;
pub mod protocols;
mod sampler;

pub use crate::core::{errors, Gate, Qubit, Register};
pub use crate::sampler::Sampler;
