//! Quantum cryptography protocols.
//!
//! Currently holds the QKD (Quantum Key Distribution) family.

pub mod qkd;
pub use qkd::bb84;
