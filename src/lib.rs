#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod git;
pub mod probe;
pub mod template;
pub mod utils;
pub mod version;
