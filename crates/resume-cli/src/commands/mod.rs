//! Command implementations for resume-cli

pub mod upload;

pub use upload::upload;
