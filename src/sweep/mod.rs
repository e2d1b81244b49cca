//! Command enumeration over the sweep parameter product.
//!
//! The enumerator is a pure function of a [`crate::config::SweepSpec`]: it
//! produces one shell line per combination plus blank group separators, in
//! nested-loop order. Nothing here runs the simulator.

mod combo;
mod emit;

pub use combo::{Combo, combos};
pub use emit::{EmitError, emit, render_lines};
