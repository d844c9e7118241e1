use crate::core::errors::StateError;
use crate::{Gate, Qubit};
use rand::Rng;
use std::collections::HashMap;

/// A repeated-shot sampler for single-qubit measurements.
///
/// The `Sampler` re-runs the same prepare-and-measure experiment many times
/// on clones of a qubit, returning a distribution of outcomes. Each shot
/// owns its clone, so the input state is never mutated and independent
/// sampling runs never share register state.
#[derive(Debug, Clone)]
pub struct Sampler {
    /// Number of measurement repetitions per run.
    pub num_shots: usize,
}

impl Sampler {
    /// Creates a `Sampler` performing `num_shots` repetitions.
    pub fn new(num_shots: usize) -> Self {
        Self { num_shots }
    }

    /// Samples a qubit `num_shots` times.
    ///
    /// Each shot clones `qubit`, optionally rotates it into the Hadamard
    /// basis, and collapses it in the computational basis.
    ///
    /// # Arguments
    ///
    /// * `qubit` - The state to sample; left untouched.
    /// * `hadamard_basis` - Whether to apply the basis-change gate before
    ///   measuring.
    /// * `rng` - Randomness source for the measurement outcomes.
    ///
    /// # Returns
    ///
    /// A map from outcome label (`"0"` or `"1"`) to the number of shots that
    /// produced it. Labels with zero counts are absent.
    pub fn run<R: Rng + ?Sized>(
        &self,
        qubit: &Qubit,
        hadamard_basis: bool,
        rng: &mut R,
    ) -> Result<HashMap<String, usize>, StateError> {
        let h = Gate::h();
        let mut counts = HashMap::new();

        for _ in 0..self.num_shots {
            let mut shot = qubit.clone();

            if hadamard_basis {
                shot.apply(&h)?;
            }

            let label = if shot.measure(rng) { "1" } else { "0" };
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn counts_sum_to_num_shots() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut q = Qubit::new();
        q.apply(&Gate::h()).unwrap();

        let counts = Sampler::new(500).run(&q, false, &mut rng).unwrap();
        assert_eq!(counts.values().sum::<usize>(), 500);
    }

    #[test]
    fn basis_states_sample_deterministically() {
        let mut rng = StdRng::seed_from_u64(23);
        let sampler = Sampler::new(1000);

        let zero = Qubit::new();
        let counts = sampler.run(&zero, false, &mut rng).unwrap();
        assert_eq!(counts.get("0"), Some(&1000));
        assert_eq!(counts.get("1"), None);

        let mut one = Qubit::new();
        one.apply(&Gate::x()).unwrap();
        let counts = sampler.run(&one, false, &mut rng).unwrap();
        assert_eq!(counts.get("1"), Some(&1000));
    }

    #[test]
    fn same_basis_preparation_and_readout_always_agree() {
        let mut rng = StdRng::seed_from_u64(31);
        let sampler = Sampler::new(1000);

        // Prepare |1> in the Hadamard basis, read it back in the same basis.
        let mut q = Qubit::new();
        q.apply(&Gate::x()).unwrap();
        q.apply(&Gate::h()).unwrap();

        let counts = sampler.run(&q, true, &mut rng).unwrap();
        assert_eq!(counts.get("1"), Some(&1000));
    }

    #[test]
    fn mismatched_bases_sample_uniformly() {
        let mut rng = StdRng::seed_from_u64(47);
        let sampler = Sampler::new(10_000);

        // Prepared in the computational basis, measured in the Hadamard
        // basis: each outcome should land near 50%.
        for bit in [false, true] {
            let mut q = Qubit::new();
            if bit {
                q.apply(&Gate::x()).unwrap();
            }

            let counts = sampler.run(&q, true, &mut rng).unwrap();
            let ones = *counts.get("1").unwrap_or(&0) as f64;
            let frequency = ones / 10_000.0;
            assert!(
                (0.45..=0.55).contains(&frequency),
                "frequency of 1 was {frequency}"
            );
        }
    }
}
