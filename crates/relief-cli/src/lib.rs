//! Relief CLI library.
//!
//! Output formatting shared by the `relief-cli` subcommands.

pub mod output;
