//! Core Ascon permutation over the 320-bit state. Exports [`State`], [`Rounds`] and [`permute`].

pub mod constants;
mod permutation;
mod state;

pub use permutation::{Rounds, permute};
pub(crate) use state::State;
