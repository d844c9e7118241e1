use crate::core::errors::RegisterError;
use crate::Register;
use rand::Rng;

/// BB84 results
#[derive(Debug)]
pub struct BB84Result {
    pub raw_length: usize,
    pub sifted_length: usize,
    pub sifted_key: Vec<bool>,
    pub alice_bits: Vec<bool>,
    pub alice_bases: Vec<bool>,
    pub bob_bases: Vec<bool>,
    pub bob_results: Vec<bool>,
}

/// Runs the BB84 protocol over `num_qubits` qubits using the process RNG.
pub fn run(num_qubits: usize) -> Result<BB84Result, RegisterError> {
    run_with_rng(num_qubits, &mut rand::rng())
}

/// Runs the BB84 protocol with an explicit randomness source.
///
/// Alice draws `num_qubits` bits and bases, Bob draws his bases
/// independently, then the parties exchange and sift. Seed `rng` for a
/// reproducible run.
pub fn run_with_rng<R: Rng + ?Sized>(
    num_qubits: usize,
    rng: &mut R,
) -> Result<BB84Result, RegisterError> {
    let alice_bits = random_bits(num_qubits, rng);
    let alice_bases = random_bits(num_qubits, rng);
    let bob_bases = random_bits(num_qubits, rng);

    exchange(&alice_bits, &alice_bases, &bob_bases, rng)
}

/// Runs the quantum half of BB84 with caller-supplied classical choices.
///
/// Alice encodes her bits in her bases, the qubits travel to Bob
/// (transmission is a no-op in simulation), Bob measures in his bases, and
/// the sifted key is Alice's bits at the basis-agreement positions.
pub fn exchange<R: Rng + ?Sized>(
    alice_bits: &[bool],
    alice_bases: &[bool],
    bob_bases: &[bool],
    rng: &mut R,
) -> Result<BB84Result, RegisterError> {
    let mut register = Register::new(alice_bits.len())?;

    register.encode(alice_bits, alice_bases)?;
    let bob_results = register.measure(bob_bases, rng)?;

    let sifted_key = sift(alice_bits, alice_bases, bob_bases);

    Ok(BB84Result {
        raw_length: alice_bits.len(),
        sifted_length: sifted_key.len(),
        sifted_key,
        alice_bits: alice_bits.to_vec(),
        alice_bases: alice_bases.to_vec(),
        bob_bases: bob_bases.to_vec(),
        bob_results,
    })
}

/// Keeps Alice's bits at the positions where both parties chose the same
/// basis, preserving index order.
pub fn sift(alice_bits: &[bool], alice_bases: &[bool], bob_bases: &[bool]) -> Vec<bool> {
    alice_bits
        .iter()
        .zip(alice_bases.iter().zip(bob_bases))
        .filter(|(_, (a, b))| a == b)
        .map(|(&bit, _)| bit)
        .collect()
}

fn random_bits<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}
