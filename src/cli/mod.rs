//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod init;
pub mod pages;
pub mod resolve;
pub mod url;

pub use args::{Cli, Commands, IoArgs, PipelineArgs};
