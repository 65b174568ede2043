//! Output strategies for the computed power pairs.
//!
//! The original tool existed twice, once printing `exp: 2^i: value`
//! lines and once printing array-literal lines ready to paste into a
//! source file. Both variants share the computation here and differ
//! only in how a single `(exponent, value)` pair is rendered and in
//! which order the inverse pairs come out.

use std::io::{self, Write};

use num_bigint::BigUint;

use crate::power_table::{PowerTable, SquaringChain};

/// Renders one header and one line per computed pair.
pub trait Render {
    /// Leading line naming the root and the modulus (decimal and hex).
    fn header(&self, out: &mut dyn Write, root: &BigUint, modulo: &BigUint) -> io::Result<()>;
    /// One forward pair `root^(2^exp) mod m`.
    fn forward(&self, out: &mut dyn Write, exp: usize, value: &BigUint) -> io::Result<()>;
    /// One inverse pair `root^(-2^exp) mod m`.
    fn inverse(&self, out: &mut dyn Write, exp: usize, value: &BigUint) -> io::Result<()>;
    /// Whether inverse pairs are buffered and re-emitted by ascending
    /// exponent instead of the descending order they are computed in.
    fn ascending_inverse(&self) -> bool {
        false
    }
}

/// `exp: 2^i: value` lines, inverse pass emitted as computed.
pub struct PlainRender;

impl Render for PlainRender {
    fn header(&self, out: &mut dyn Write, root: &BigUint, modulo: &BigUint) -> io::Result<()> {
        writeln!(out, "w: {root}, modulo: {modulo} ({modulo:x})")
    }

    fn forward(&self, out: &mut dyn Write, exp: usize, value: &BigUint) -> io::Result<()> {
        writeln!(out, "exp: 2^{exp}: {value}")
    }

    fn inverse(&self, out: &mut dyn Write, exp: usize, value: &BigUint) -> io::Result<()> {
        writeln!(out, "exp: -2^{exp}: {value}")
    }
}

/// Array-literal lines (`    value, // 2^i`) for embedding a generated
/// root table into source, inverse pass re-sorted ascending to match
/// the forward table's layout.
pub struct TableRender;

impl Render for TableRender {
    fn header(&self, out: &mut dyn Write, root: &BigUint, modulo: &BigUint) -> io::Result<()> {
        writeln!(out, "// w: {root}, modulo: {modulo} ({modulo:x})")
    }

    fn forward(&self, out: &mut dyn Write, exp: usize, value: &BigUint) -> io::Result<()> {
        writeln!(out, "    {value}, // 2^{exp}")
    }

    fn inverse(&self, out: &mut dyn Write, exp: usize, value: &BigUint) -> io::Result<()> {
        writeln!(out, "    {value}, // -2^{exp}")
    }

    fn ascending_inverse(&self) -> bool {
        true
    }
}

/// Run the forward scan and, if the chain closed, the inverse pass,
/// rendering every pair into `out`.
///
/// Forward pairs are rendered as the chain produces them, before the
/// continue/stop decision takes effect.
///
/// # Errors
/// Propagates whatever the sink returns.
pub fn write_table(
    root: &BigUint,
    modulo: &BigUint,
    max_calculations: usize,
    render: &dyn Render,
    out: &mut dyn Write,
) -> io::Result<()> {
    render.header(out, root, modulo)?;

    let mut table = PowerTable::new(modulo.clone());
    for (i, w) in SquaringChain::new(root, modulo, max_calculations) {
        render.forward(out, i, &w)?;
        table.record(i, &w);
    }

    if table.order_pow2.is_none() {
        return Ok(());
    }
    if render.ascending_inverse() {
        let pairs: Vec<_> = table.inverse_powers().collect();
        for (i, v) in pairs.into_iter().rev() {
            render.inverse(out, i, &v)?;
        }
    } else {
        for (i, v) in table.inverse_powers() {
            render.inverse(out, i, &v)?;
        }
    }
    Ok(())
}
