//! refsift CLI library: argument definitions, logging setup, and the
//! command implementations driven by `main`.

pub mod cli;
pub mod commands;
pub mod logging;
