//! power-lookup ― root / inverse-root table generator for NTT moduli

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, missing_docs)]

pub mod inverse;
pub mod power_table;
pub mod render;

pub use inverse::InversePowers;
pub use power_table::{PowerTable, SquaringChain};
pub use render::{write_table, PlainRender, Render, TableRender};
