//! ax library interface
//!
//! The binary is a thin wrapper around [`app::run`]; everything else is
//! exposed for tests.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod app;
pub mod cli;
pub mod commands;
