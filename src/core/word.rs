//! # Braid Words
//!
//! A braid word is an ordered sequence of signed Artin generators: the
//! entry `g > 0` denotes the generator σ_g (a positive crossing of strands
//! `g` and `g + 1`), `g < 0` denotes its inverse. Zero is never a valid
//! entry.
//!
//! The strand count `n` is derived from the sequence at construction
//! (`max |g| + 1`, or 1 for the empty word) and maintained across every
//! transformation: stabilization increments it, destabilization decrements
//! it, free reduction re-derives it, everything else leaves it alone.
//!
//! Every transformation comes in a predicate/mutator pair: the predicate
//! (`is_*_performable`) is a pure query, the mutator refuses to run when
//! the predicate is false and leaves the word untouched. Window-based
//! transformations additionally expose a `*_performable_indices` scan so a
//! search driver can enumerate every applicable site in one pass.

use crate::core::error::{BraidError, BraidResult};

/// A signed Artin generator: `g > 0` is σ_g, `g < 0` is σ_|g|⁻¹.
pub type Generator = i32;

/// Strand count implied by a generator sequence: one more than the largest
/// magnitude used, or 1 for the empty word.
fn derived_strand_count(generators: &[Generator]) -> usize {
    generators
        .iter()
        .map(|g| g.unsigned_abs() as usize)
        .max()
        .map_or(1, |top| top + 1)
}

/// A word in the braid group over signed Artin generators.
///
/// Owns the generator sequence and the strand count, and exposes the
/// elementary equivalence-preserving transformations: the two Markov moves
/// (stabilization/destabilization and conjugation), both Artin relations,
/// cyclic shifts, and free reduction of adjacent inverse pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraidWord {
    /// Number of strands
    strands: usize,

    /// The generator sequence. Invariant: no entry is zero.
    generators: Vec<Generator>,
}

impl BraidWord {
    /// Create a braid word from an explicit generator sequence.
    ///
    /// Rejects any sequence containing a zero entry, naming the first
    /// offending position. The empty sequence is the trivial one-strand
    /// braid.
    pub fn new(generators: Vec<Generator>) -> BraidResult<Self> {
        if let Some(position) = generators.iter().position(|&g| g == 0) {
            return Err(BraidError::ZeroGenerator { position });
        }

        let strands = derived_strand_count(&generators);
        Ok(Self {
            strands,
            generators,
        })
    }

    /// The trivial braid word on one strand
    pub fn trivial() -> Self {
        Self {
            strands: 1,
            generators: Vec::new(),
        }
    }

    /// Strand count and generator sequence as a read-only snapshot
    pub fn values(&self) -> (usize, &[Generator]) {
        (self.strands, &self.generators)
    }

    /// Number of strands
    pub fn strand_count(&self) -> usize {
        self.strands
    }

    /// The generator sequence
    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    /// Number of generators in the word
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if the word is empty
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    // ========================================================================
    // MARKOV MOVES: STABILIZATION / DESTABILIZATION
    // ========================================================================

    /// Append a new top-strand generator and grow the braid by one strand.
    ///
    /// The appended generator has magnitude equal to the strand count before
    /// the move, negated when `inverse` is true. Always performable.
    pub fn stabilization(&mut self, inverse: bool) {
        let top = self.strands as Generator;
        self.generators.push(if inverse { -top } else { top });
        self.strands += 1;
    }

    /// Check whether destabilization applies: the trailing generator must be
    /// the sole occurrence of the top index `n - 1` in the whole word.
    pub fn is_destabilization_performable(&self) -> bool {
        let top = match self.strands.checked_sub(1) {
            Some(top) if top > 0 => top,
            _ => return false,
        };

        match self.generators.last() {
            Some(&last) if last.unsigned_abs() as usize == top => self
                .generators
                .iter()
                .filter(|g| g.unsigned_abs() as usize == top)
                .count()
                == 1,
            _ => false,
        }
    }

    /// Remove the trailing top-strand generator and shrink by one strand.
    pub fn destabilization(&mut self) -> BraidResult<()> {
        if !self.is_destabilization_performable() {
            return Err(BraidError::IllegalTransformation {
                op: "destabilization",
            });
        }

        self.generators.pop();
        self.strands -= 1;
        Ok(())
    }

    // ========================================================================
    // MARKOV MOVES: CONJUGATION
    // ========================================================================

    /// Check whether conjugation by `index` applies: the word is nonempty
    /// and `index` is a valid signed generator for the current strand count.
    pub fn is_conjugation_performable(&self, index: Generator) -> bool {
        !self.generators.is_empty()
            && index != 0
            && (index.unsigned_abs() as usize) < self.strands
    }

    /// Surround the word with `index` and its inverse.
    ///
    /// Prepends `index` and appends `-index`. The strand count is unchanged:
    /// the precondition keeps `|index|` within the existing generator range.
    pub fn conjugation(&mut self, index: Generator) -> BraidResult<()> {
        if !self.is_conjugation_performable(index) {
            return Err(BraidError::IllegalTransformation { op: "conjugation" });
        }

        self.generators.insert(0, index);
        self.generators.push(-index);
        Ok(())
    }

    // ========================================================================
    // BRAID RELATION 1: ADJACENT GENERATOR INDICES
    // ========================================================================

    /// Check whether the Artin relation applies at `index`: a three-letter
    /// window whose outer magnitudes match and whose middle magnitude
    /// differs from them by exactly one. Signs are unconstrained.
    pub fn is_braid_relation1_performable(&self, index: usize) -> bool {
        if self.generators.len() < 3 || index > self.generators.len() - 3 {
            return false;
        }

        let a = self.generators[index].unsigned_abs();
        let b = self.generators[index + 1].unsigned_abs();
        let c = self.generators[index + 2].unsigned_abs();
        a == c && b.abs_diff(a) == 1
    }

    /// All indices where the Artin relation applies, in ascending order
    pub fn braid_relation1_performable_indices(&self) -> Vec<usize> {
        (0..self.generators.len().saturating_sub(2))
            .filter(|&index| self.is_braid_relation1_performable(index))
            .collect()
    }

    /// Rewrite the three-letter window at `index` by the Artin relation.
    ///
    /// The outer and middle magnitudes are exchanged and the sign sequence
    /// is reversed: `(a, b, c)` becomes
    /// `(sign(c)·|b|, sign(b)·|a|, sign(a)·|b|)`. For uniform signs this is
    /// σ_j σ_i σ_j = σ_i σ_j σ_i; each mixed-sign window maps to the
    /// rewrite obtained by conjugating that identity. Length and strand
    /// count are unchanged.
    pub fn braid_relation1(&mut self, index: usize) -> BraidResult<()> {
        if !self.is_braid_relation1_performable(index) {
            return Err(BraidError::IllegalTransformation {
                op: "braid_relation1",
            });
        }

        let a = self.generators[index];
        let b = self.generators[index + 1];
        let c = self.generators[index + 2];
        let outer = a.abs();
        let inner = b.abs();

        self.generators[index] = c.signum() * inner;
        self.generators[index + 1] = b.signum() * outer;
        self.generators[index + 2] = a.signum() * inner;
        Ok(())
    }

    // ========================================================================
    // BRAID RELATION 2: FAR COMMUTATION
    // ========================================================================

    /// Check whether far commutation applies at `index`: two adjacent
    /// letters whose magnitudes differ by at least two act on disjoint
    /// strand pairs and commute.
    pub fn is_braid_relation2_performable(&self, index: usize) -> bool {
        if self.generators.len() < 2 || index > self.generators.len() - 2 {
            return false;
        }

        let a = self.generators[index].unsigned_abs();
        let b = self.generators[index + 1].unsigned_abs();
        a.abs_diff(b) >= 2
    }

    /// All indices where far commutation applies, in ascending order
    pub fn braid_relation2_performable_indices(&self) -> Vec<usize> {
        (0..self.generators.len().saturating_sub(1))
            .filter(|&index| self.is_braid_relation2_performable(index))
            .collect()
    }

    /// Swap the two commuting letters at `index` and `index + 1`.
    pub fn braid_relation2(&mut self, index: usize) -> BraidResult<()> {
        if !self.is_braid_relation2_performable(index) {
            return Err(BraidError::IllegalTransformation {
                op: "braid_relation2",
            });
        }

        self.generators.swap(index, index + 1);
        Ok(())
    }

    // ========================================================================
    // CYCLIC SHIFTS
    // ========================================================================

    /// Rotate the word one position left (first letter moves to the end).
    /// No-op on the empty word.
    pub fn shift_left(&mut self) {
        if !self.generators.is_empty() {
            self.generators.rotate_left(1);
        }
    }

    /// Rotate the word one position right (last letter moves to the front).
    /// No-op on the empty word.
    pub fn shift_right(&mut self) {
        if !self.generators.is_empty() {
            self.generators.rotate_right(1);
        }
    }

    /// Rotate the word `amount` positions left. Amounts are reduced modulo
    /// the word length; no-op on the empty word.
    pub fn shift_left_with_amount(&mut self, amount: usize) {
        if self.generators.is_empty() {
            return;
        }
        let len = self.generators.len();
        self.generators.rotate_left(amount % len);
    }

    /// Rotate the word `amount` positions right. Amounts are reduced modulo
    /// the word length; no-op on the empty word.
    pub fn shift_right_with_amount(&mut self, amount: usize) {
        if self.generators.is_empty() {
            return;
        }
        let len = self.generators.len();
        self.generators.rotate_right(amount % len);
    }

    // ========================================================================
    // FREE REDUCTION
    // ========================================================================

    /// Check whether free reduction applies at `index`: the letter there is
    /// immediately followed by its own inverse.
    pub fn is_remove_sigma_inverse_pair_performable(&self, index: usize) -> bool {
        if self.generators.len() < 2 || index > self.generators.len() - 2 {
            return false;
        }

        self.generators[index] == -self.generators[index + 1]
    }

    /// All indices where free reduction applies, in ascending order
    pub fn remove_sigma_inverse_pair_performable_indices(&self) -> Vec<usize> {
        (0..self.generators.len().saturating_sub(1))
            .filter(|&index| self.is_remove_sigma_inverse_pair_performable(index))
            .collect()
    }

    /// Delete the inverse pair at `index` and `index + 1`.
    ///
    /// The word shrinks by two letters. The strand count is re-derived from
    /// the remainder: the removed pair may have held the only occurrences
    /// of the top index.
    pub fn remove_sigma_inverse_pair(&mut self, index: usize) -> BraidResult<()> {
        if !self.is_remove_sigma_inverse_pair_performable(index) {
            return Err(BraidError::IllegalTransformation {
                op: "remove_sigma_inverse_pair",
            });
        }

        self.generators.drain(index..index + 2);
        self.strands = derived_strand_count(&self.generators);
        Ok(())
    }
}
