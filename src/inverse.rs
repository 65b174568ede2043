//! Backward pass: negative powers from the recorded forward powers.
//!
//! With `root^(2^k) ≡ 1 (mod m)` the product of the forward powers
//! below `k`, taken from the top down, accumulates the inverse of each
//! `root^(2^i)` in turn:
//!
//! `root^(2^(k-1)) · ... · root^(2^i) = root^(2^k - 2^i) ≡ root^(-2^i)`
//!
//! so no extended-gcd step is needed, only one multiplication per
//! exponent.

use num_bigint::BigUint;
use num_traits::One;

use crate::power_table::PowerTable;

/// Iterator over `(i, root^(-2^i) mod m)` for `i` descending from
/// `order_pow2 - 1` to 0. Empty when the table has no order.
pub struct InversePowers<'a> {
    table: &'a PowerTable,
    acc: BigUint,
    remaining: usize,
}

impl<'a> InversePowers<'a> {
    pub(crate) fn new(table: &'a PowerTable) -> Self {
        Self {
            table,
            acc: BigUint::one(),
            remaining: table.order_pow2.unwrap_or(0),
        }
    }
}

impl Iterator for InversePowers<'_> {
    type Item = (usize, BigUint);

    fn next(&mut self) -> Option<(usize, BigUint)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let i = self.remaining;
        self.acc = &self.acc * &self.table.powers[i] % &self.table.modulo;
        Some((i, self.acc.clone()))
    }
}
