//! Quantum Key Distribution (QKD) protocols.
//!
//! - **BB84**: prepare-and-measure key distribution over single qubits.

pub mod bb84;
