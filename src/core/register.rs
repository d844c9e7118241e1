use crate::core::errors::RegisterError;
use crate::core::{Gate, Qubit};
use rand::Rng;

/// An ordered, fixed-length sequence of independent qubits.
///
/// Index i in the register stays aligned with index i of every classical
/// bit/basis sequence for the whole protocol run. A register is measured at
/// most once; a second measurement pass is rejected rather than silently
/// re-reading collapsed states.
#[derive(Clone, Debug)]
pub struct Register {
    qubits: Vec<Qubit>,
    measured: bool,
}

impl Register {
    /// Creates a register of `len` qubits, all in |0>.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError::EmptyRegister` if `len` is zero.
    pub fn new(len: usize) -> Result<Self, RegisterError> {
        if len == 0 {
            return Err(RegisterError::EmptyRegister);
        }

        Ok(Self {
            qubits: vec![Qubit::new(); len],
            measured: false,
        })
    }

    /// Number of qubits in the register.
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Read-only view of qubit `index`, if it exists.
    pub fn qubit(&self, index: usize) -> Option<&Qubit> {
        self.qubits.get(index)
    }

    fn check_len(&self, got: usize) -> Result<(), RegisterError> {
        if got != self.qubits.len() {
            return Err(RegisterError::LengthMismatch {
                expected: self.qubits.len(),
                got,
            });
        }
        Ok(())
    }

    /// Encodes classical bits into the register.
    ///
    /// For each index: the qubit is reset to |0>, bit-flipped if `bits[i]`
    /// is set, then rotated into the Hadamard basis if `bases[i]` is set.
    ///
    /// # Errors
    ///
    /// Fails before touching any qubit if either sequence length differs
    /// from the register length, or if the register was already measured.
    pub fn encode(&mut self, bits: &[bool], bases: &[bool]) -> Result<(), RegisterError> {
        self.check_len(bits.len())?;
        self.check_len(bases.len())?;

        if self.measured {
            return Err(RegisterError::AlreadyMeasured);
        }

        let x = Gate::x();
        let h = Gate::h();

        for (i, qubit) in self.qubits.iter_mut().enumerate() {
            *qubit = Qubit::new();
            if bits[i] {
                qubit.apply(&x)?;
            }
            if bases[i] {
                qubit.apply(&h)?;
            }
        }

        Ok(())
    }

    /// Measures every qubit, consuming the register's one measurement pass.
    ///
    /// For each index: the qubit is rotated out of the Hadamard basis if
    /// `bases[i]` is set, then collapsed in the computational basis. The
    /// returned outcomes are index-aligned with the encode input.
    ///
    /// # Errors
    ///
    /// Fails before touching any qubit on a length mismatch, and rejects a
    /// second measurement pass with `RegisterError::AlreadyMeasured`.
    pub fn measure<R: Rng + ?Sized>(
        &mut self,
        bases: &[bool],
        rng: &mut R,
    ) -> Result<Vec<bool>, RegisterError> {
        self.check_len(bases.len())?;

        if self.measured {
            return Err(RegisterError::AlreadyMeasured);
        }

        let h = Gate::h();
        let mut outcomes = Vec::with_capacity(self.qubits.len());

        for (qubit, &basis) in self.qubits.iter_mut().zip(bases) {
            if basis {
                qubit.apply(&h)?;
            }
            outcomes.push(qubit.measure(rng));
        }

        self.measured = true;
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_length_register_is_rejected() {
        assert_eq!(Register::new(0).unwrap_err(), RegisterError::EmptyRegister);
    }

    #[test]
    fn encode_rejects_mismatched_lengths() {
        let mut reg = Register::new(3).unwrap();

        let err = reg.encode(&[true, false], &[false, false, false]).unwrap_err();
        assert_eq!(err, RegisterError::LengthMismatch { expected: 3, got: 2 });

        let err = reg.encode(&[true, false, true], &[false]).unwrap_err();
        assert_eq!(err, RegisterError::LengthMismatch { expected: 3, got: 1 });

        // Nothing was mutated by the failed calls.
        for i in 0..3 {
            assert!((reg.qubit(i).unwrap().prob_zero() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn measure_rejects_mismatched_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut reg = Register::new(2).unwrap();
        reg.encode(&[false, true], &[false, false]).unwrap();

        let err = reg.measure(&[false], &mut rng).unwrap_err();
        assert_eq!(err, RegisterError::LengthMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn second_measurement_pass_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut reg = Register::new(2).unwrap();
        reg.encode(&[true, false], &[false, true]).unwrap();

        reg.measure(&[false, true], &mut rng).unwrap();
        let err = reg.measure(&[false, true], &mut rng).unwrap_err();
        assert_eq!(err, RegisterError::AlreadyMeasured);
    }

    #[test]
    fn encode_after_measurement_is_rejected() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut reg = Register::new(1).unwrap();
        reg.encode(&[true], &[false]).unwrap();
        reg.measure(&[false], &mut rng).unwrap();

        let err = reg.encode(&[false], &[false]).unwrap_err();
        assert_eq!(err, RegisterError::AlreadyMeasured);
    }

    #[test]
    fn matching_bases_recover_the_encoded_bits() {
        let mut rng = StdRng::seed_from_u64(1234);

        // Every (bit, basis) combination, repeated: same-basis measurement
        // must always return the encoded bit.
        for _ in 0..200 {
            let bits = [false, true, false, true];
            let bases = [false, false, true, true];

            let mut reg = Register::new(4).unwrap();
            reg.encode(&bits, &bases).unwrap();
            let outcomes = reg.measure(&bases, &mut rng).unwrap();

            assert_eq!(outcomes, bits.to_vec());
        }
    }
}
