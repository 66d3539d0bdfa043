//! Commands Module
//!
//! All CLI subcommand implementations.

pub mod build;
pub mod info;
pub mod normalize;
pub mod tensorize;

