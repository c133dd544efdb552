//! Flight routing CLI library.
//!
//! Terminal styling and output formatting shared by the `flightroute-cli`
//! binary and its tests.

pub mod output;
pub mod terminal;
