//! CLI subcommand implementations.

pub mod add;
pub mod fetch;
pub mod list;
pub mod show;
pub mod star;
