use crate::prelude::*;

use std::fmt;

/// Precomputed effect of a move sequence: position `i` of the result takes
/// the facelet at `diff[i]`. Applying it costs one lookup per facelet,
/// whatever the length of the sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Diff([u8; FACELETS]);

impl Diff {
    pub fn identity() -> Diff {
        Diff(core::array::from_fn(|i| i as u8))
    }

    /// Composes the move permutations of `moves`. The result is where each
    /// facelet came from, the same as tracing the moves over a cube whose
    /// facelets all carry distinct symbols.
    pub fn compile(moves: &[Move]) -> Diff {
        let diff = moves
            .iter()
            .fold(Diff::identity(), |diff, &m| diff.then(permutation(m)));
        log::debug!("Compiled diff: {}", diff);
        diff
    }

    fn then(&self, perm: &[u8; FACELETS]) -> Diff {
        Diff(core::array::from_fn(|i| self.0[perm[i] as usize]))
    }

    pub fn apply(&self, cube: &Facelets) -> Facelets {
        cube.permuted(&self.0)
    }
}

/// Renders as the reference symbols after the moves, e.g. the identity is
/// `ABCD...01`.
impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reference = Facelets::reference();
        self.0
            .iter()
            .try_for_each(|&i| write!(f, "{}", reference[i as usize]))
    }
}

impl fmt::Debug for Diff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Diff({})", self)
    }
}
