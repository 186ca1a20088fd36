//! Library side of the `vrdr` command-line tool.

pub mod convert;
pub mod logging;
