use crate::core::errors::GateError;
use ndarray::{arr2, Array2};
use num_complex::Complex64;

/// Represents a single-qubit quantum gate.
///
/// A gate is defined by its 2x2 unitary matrix. BB84 only ever prepares and
/// measures independent qubits, so no multi-qubit gates exist here.
#[derive(Clone, Debug)]
pub struct Gate {
    /// The unitary matrix of the gate.
    pub matrix: Array2<Complex64>,
}

impl Gate {
    /// Creates a new `Gate` from a unitary matrix.
    ///
    /// # Arguments
    ///
    /// * `matrix` - A 2x2, unitary `Array2<Complex64>`.
    ///
    /// # Errors
    ///
    /// Returns a `GateError` if:
    /// - The matrix is not square.
    /// - The matrix is not 2x2.
    /// - The matrix is not unitary.
    pub fn new(matrix: Array2<Complex64>) -> Result<Self, GateError> {
        let (rows, cols) = matrix.dim();

        if rows != cols {
            return Err(GateError::NotSquareMatrix);
        }

        if rows != 2 {
            return Err(GateError::InvalidDimensions);
        }

        if !Self::check_unitary(&matrix) {
            return Err(GateError::NonUnitary);
        }

        Ok(Self { matrix })
    }

    /// Checks if a given matrix is unitary
    fn check_unitary(matrix: &Array2<Complex64>) -> bool {
        let (rows, _) = matrix.dim();
        let eye = Array2::<Complex64>::eye(rows);

        let u_dagger = matrix.t().mapv(|x| x.conj());
        let product = matrix.dot(&u_dagger);

        product
            .iter()
            .zip(eye.iter())
            .all(|(a, b)| (*a - *b).norm() < 1e-6)
    }

    // --- BB84 gates ---

    /// Creates the bit-flip (Pauli-X) gate: |0> <-> |1>.
    pub fn x() -> Gate {
        Gate::new(arr2(&[
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        ]))
        .unwrap()
    }

    /// Creates the basis-change (Hadamard) gate.
    ///
    /// Maps (α, β) to ((α+β)/√2, (α−β)/√2). Applying it once rotates between
    /// the computational and Hadamard bases; applying it twice is the
    /// identity, which is what makes same-basis BB84 rounds deterministic.
    pub fn h() -> Gate {
        let factor = 1.0 / 2.0_f64.sqrt();
        Gate::new(arr2(&[
            [Complex64::new(factor, 0.0), Complex64::new(factor, 0.0)],
            [Complex64::new(factor, 0.0), Complex64::new(-factor, 0.0)],
        ]))
        .unwrap()
    }
}
