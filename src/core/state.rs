use crate::core::errors::StateError;
use crate::core::Gate;
use ndarray::{array, Array1};
use num_complex::Complex64;
use rand::Rng;

/// Tolerance for the |α|² + |β|² = 1 invariant after gate arithmetic.
const NORM_TOLERANCE: f64 = 1e-9;

/// A single two-level quantum system.
///
/// Holds a normalized pair of complex amplitudes (α, β) over {|0>, |1>}.
/// Once measured, the qubit stays collapsed: gates are rejected and further
/// measurements return the recorded outcome.
#[derive(Clone, Debug)]
pub struct Qubit {
    amplitudes: Array1<Complex64>,
    outcome: Option<bool>,
}

impl Qubit {
    /// Creates a qubit in the |0> state (α=1, β=0).
    pub fn new() -> Self {
        Self {
            amplitudes: array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            outcome: None,
        }
    }

    /// Creates a qubit from explicit amplitudes.
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotNormalized` if |α|² + |β|² is not 1 within
    /// tolerance.
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Result<Self, StateError> {
        let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(StateError::NotNormalized(norm_sqr));
        }

        Ok(Self {
            amplitudes: array![alpha, beta],
            outcome: None,
        })
    }

    /// Amplitude of |0>.
    pub fn alpha(&self) -> Complex64 {
        self.amplitudes[0]
    }

    /// Amplitude of |1>.
    pub fn beta(&self) -> Complex64 {
        self.amplitudes[1]
    }

    /// Probability of measuring 0 in the computational basis.
    pub fn prob_zero(&self) -> f64 {
        self.amplitudes[0].norm_sqr()
    }

    /// Probability of measuring 1 in the computational basis.
    pub fn prob_one(&self) -> f64 {
        self.amplitudes[1].norm_sqr()
    }

    /// Whether this qubit has already collapsed to a classical value.
    pub fn is_collapsed(&self) -> bool {
        self.outcome.is_some()
    }

    /// Checks that the normalization invariant survived gate arithmetic.
    fn check_normalized(&self) -> Result<(), StateError> {
        let norm_sqr = self.prob_zero() + self.prob_one();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(StateError::NotNormalized(norm_sqr));
        }
        Ok(())
    }

    /// Applies a single-qubit gate to this qubit.
    ///
    /// # Errors
    ///
    /// Returns `StateError::AlreadyCollapsed` if the qubit was measured, or
    /// `StateError::NotNormalized` if the amplitudes drifted off the unit
    /// sphere (an internal arithmetic error, not recoverable).
    pub fn apply(&mut self, gate: &Gate) -> Result<(), StateError> {
        if self.outcome.is_some() {
            return Err(StateError::AlreadyCollapsed);
        }

        self.amplitudes = gate.matrix.dot(&self.amplitudes);
        self.check_normalized()
    }

    /// Measures the qubit in the computational basis, collapsing it.
    ///
    /// Draws `false` with probability |α|² and `true` with probability |β|²
    /// using one uniform [0, 1) sample from `rng`. After the first call the
    /// amplitudes are exactly |0> or |1> and every later call returns the
    /// same outcome without touching `rng`.
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let roll: f64 = rng.random();
        let outcome = roll >= self.prob_zero();

        self.amplitudes = if outcome {
            array![Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
        } else {
            array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
        };
        self.outcome = Some(outcome);

        outcome
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::new()
    }
}
