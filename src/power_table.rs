//! Forward pass: repeated squaring of the root modulo `m`.
//!
//! The chain `w, w^2, w^4, ...` closes the first time it hits 1; for a
//! root whose multiplicative order is `2^k` that happens at index `k`.
//! Nothing here checks that the caller's root actually has such an
//! order. A root that never cycles within the cap simply leaves the
//! order unset.

use num_bigint::BigUint;
use num_traits::One;

use crate::inverse::InversePowers;

// ------------------------------------------------------------
// lazy squaring chain
// ------------------------------------------------------------

/// Iterator over `(i, root^(2^i) mod m)` pairs.
///
/// Yields at most `max_calculations` pairs and ends right after the
/// first pair whose value is 1. The terminal 1 is part of the sequence.
pub struct SquaringChain {
    modulo: BigUint,
    w: BigUint,
    i: usize,
    cap: usize,
    done: bool,
}

impl SquaringChain {
    /// Start the chain at `root mod modulo`.
    ///
    /// # Panics
    /// A zero `modulo` panics in the remainder, as any modular
    /// arithmetic on it would.
    #[must_use]
    pub fn new(root: &BigUint, modulo: &BigUint, max_calculations: usize) -> Self {
        Self {
            w: root % modulo,
            modulo: modulo.clone(),
            i: 0,
            cap: max_calculations,
            done: false,
        }
    }
}

impl Iterator for SquaringChain {
    type Item = (usize, BigUint);

    fn next(&mut self) -> Option<(usize, BigUint)> {
        if self.done || self.i == self.cap {
            return None;
        }
        let w = self.w.clone();
        if w.is_one() {
            self.done = true;
        } else {
            self.w = &w * &w % &self.modulo;
        }
        let i = self.i;
        self.i += 1;
        Some((i, w))
    }
}

// ------------------------------------------------------------
// collected result
// ------------------------------------------------------------

/// Everything one forward scan produced.
pub struct PowerTable {
    /// Modulus the chain was squared under.
    pub modulo: BigUint,
    /// `powers[i] = root^(2^i) mod modulo`, for `i` strictly below the
    /// order. The terminal 1 is not stored.
    pub powers: Vec<BigUint>,
    /// First index whose power is 1, if one was seen within the cap.
    pub order_pow2: Option<usize>,
}

impl PowerTable {
    /// Empty table, ready to absorb a chain.
    #[must_use]
    pub fn new(modulo: BigUint) -> Self {
        Self {
            modulo,
            powers: Vec::new(),
            order_pow2: None,
        }
    }

    /// Fold one chain pair into the table.
    pub fn record(&mut self, i: usize, w: &BigUint) {
        if w.is_one() {
            if self.order_pow2.is_none() {
                self.order_pow2 = Some(i);
            }
        } else {
            debug_assert_eq!(i, self.powers.len());
            self.powers.push(w.clone());
        }
    }

    /// Run the whole forward pass in one go.
    #[must_use]
    pub fn scan(root: &BigUint, modulo: &BigUint, max_calculations: usize) -> Self {
        let mut table = Self::new(modulo.clone());
        for (i, w) in SquaringChain::new(root, modulo, max_calculations) {
            table.record(i, &w);
        }
        table
    }

    /// Walk the recorded powers backwards, yielding the negative powers
    /// `root^(-2^i) mod modulo`. Empty when no order was found.
    #[must_use]
    pub fn inverse_powers(&self) -> InversePowers<'_> {
        InversePowers::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    // 23068673 = 2^21 * 11 + 1, root 38 has order 2^21
    const NTT_MODULUS: u64 = 23_068_673;
    const NTT_ROOT: u64 = 38;

    #[test]
    fn test_forward_powers_match_modpow() {
        let table = PowerTable::scan(&big(NTT_ROOT), &big(NTT_MODULUS), 100);
        assert_eq!(table.order_pow2, Some(21));
        assert_eq!(table.powers.len(), 21);
        for (i, p) in table.powers.iter().enumerate() {
            let exp = BigUint::one() << i;
            let expected = big(NTT_ROOT).modpow(&exp, &big(NTT_MODULUS));
            assert_eq!(*p, expected, "power mismatch at 2^{}", i);
        }
        // spot values from the generated root table
        assert_eq!(table.powers[0], big(38));
        assert_eq!(table.powers[1], big(1444));
        assert_eq!(table.powers[2], big(2_085_136));
        assert_eq!(table.powers[20], big(23_068_672));
    }

    #[test]
    fn test_chain_yields_terminal_one() {
        let pairs: Vec<_> =
            SquaringChain::new(&big(NTT_ROOT), &big(NTT_MODULUS), 100).collect();
        assert_eq!(pairs.len(), 22);
        assert_eq!(pairs[21], (21, BigUint::one()));
    }

    #[test]
    fn test_root_congruent_to_one() {
        let table = PowerTable::scan(&big(1), &big(5), 100);
        assert_eq!(table.order_pow2, Some(0));
        assert!(table.powers.is_empty());
        assert_eq!(table.inverse_powers().count(), 0);
    }

    #[test]
    fn test_no_cycle_within_cap() {
        // 3 has order 6 mod 7, so 3^(2^i) runs 3, 2, 4, 2, 4, ... and
        // never reaches 1
        let table = PowerTable::scan(&big(3), &big(7), 10);
        assert_eq!(table.order_pow2, None);
        assert_eq!(table.powers.len(), 10);
        assert_eq!(table.powers[..3], [big(3), big(2), big(4)]);
    }

    #[test]
    fn test_cap_of_one() {
        let pairs: Vec<_> = SquaringChain::new(&big(3), &big(7), 1).collect();
        assert_eq!(pairs, vec![(0, big(3))]);
        let table = PowerTable::scan(&big(3), &big(7), 1);
        assert_eq!(table.order_pow2, None);
        assert_eq!(table.powers, vec![big(3)]);
    }

    #[test]
    fn test_root_is_reduced_first() {
        let pairs: Vec<_> = SquaringChain::new(&big(10), &big(7), 1).collect();
        assert_eq!(pairs, vec![(0, big(3))]);
    }
}
