//! Coconut delivery CLI library.
//!
//! This crate provides the output formatting used by the `coconut-cli`
//! binary.

pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
